//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock;
use super::spawn;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run in progress (title screen)
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run suspended, ticks are ignored
    Paused,
    /// Flame went out
    GameOver,
}

/// Player-selected pace: faster movement burns fuel faster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedMode {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedMode {
    /// Map the speed-select keys 1/2/3
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(SpeedMode::Slow),
            2 => Some(SpeedMode::Normal),
            3 => Some(SpeedMode::Fast),
            _ => None,
        }
    }

    /// Movement speed multiplier
    pub fn move_factor(&self) -> f32 {
        match self {
            SpeedMode::Slow => 0.7,
            SpeedMode::Normal => 1.0,
            SpeedMode::Fast => 1.5,
        }
    }

    /// Fuel decay multiplier
    pub fn decay_factor(&self) -> f32 {
        match self {
            SpeedMode::Slow => 0.6,
            SpeedMode::Normal => 1.3,
            SpeedMode::Fast => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedMode::Slow => "SLOW",
            SpeedMode::Normal => "NORMAL",
            SpeedMode::Fast => "FAST",
        }
    }
}

/// The candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Flame fuel, always within [0, max_fuel]
    pub fuel: f32,
    pub max_fuel: f32,
    /// Base units per tick
    pub move_speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            fuel: tuning.initial_fuel,
            max_fuel: tuning.max_fuel,
            move_speed: tuning.move_speed,
        }
    }

    /// Move by the held direction intents. Axes are applied independently,
    /// so diagonals cover more ground than straight lines.
    pub fn apply_intents(&mut self, up: bool, down: bool, left: bool, right: bool, mode: SpeedMode) {
        let speed = self.move_speed * mode.move_factor();
        let mut delta = Vec2::ZERO;
        if left {
            delta.x -= speed;
        }
        if right {
            delta.x += speed;
        }
        if up {
            delta.y -= speed;
        }
        if down {
            delta.y += speed;
        }
        self.pos = clamp_to_arena(self.pos + delta);
    }
}

/// Clamp a position to the playable arena (arena minus margin)
pub fn clamp_to_arena(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(ARENA_MARGIN, ARENA_WIDTH - ARENA_MARGIN),
        pos.y.clamp(ARENA_MARGIN, ARENA_HEIGHT - ARENA_MARGIN),
    )
}

/// Hazard types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    /// Sideways wind blowing in from the left or right edge
    Gust,
    /// Wanders, homes in on the candle when close
    Crawler,
    /// Falls straight down from the top edge
    Droplet,
    /// Only dangerous to a weak flame
    Lurker,
}

impl HazardKind {
    pub const ALL: [HazardKind; 4] = [
        HazardKind::Gust,
        HazardKind::Crawler,
        HazardKind::Droplet,
        HazardKind::Lurker,
    ];

    /// Fuel lost on contact before the difficulty bonus
    pub fn base_damage(&self) -> f32 {
        match self {
            HazardKind::Gust => 8.0,
            HazardKind::Crawler => 5.0,
            HazardKind::Droplet => 9.0,
            HazardKind::Lurker => 9.0,
        }
    }

    /// Multiplier applied to the difficulty damage bonus
    pub fn bonus_factor(&self) -> f32 {
        match self {
            HazardKind::Lurker => 2.0,
            _ => 1.0,
        }
    }

    /// Display colour (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            HazardKind::Gust => 0x64748b,
            HazardKind::Crawler => 0xdc2626,
            HazardKind::Droplet => 0x0ea5e9,
            HazardKind::Lurker => 0x1f2937,
        }
    }

    /// Display size in arena units
    pub fn draw_size(&self) -> f32 {
        match self {
            HazardKind::Gust => 16.0,
            HazardKind::Crawler => 6.0,
            HazardKind::Droplet => 6.0,
            HazardKind::Lurker => 10.0,
        }
    }
}

/// A moving threat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub kind: HazardKind,
    /// Units per tick
    pub speed: f32,
    /// Radians, screen space (y down)
    pub heading: f32,
    pub active: bool,
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Tinder,
    Wax,
    Oil,
    Ember,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 4] = [
        CollectibleKind::Tinder,
        CollectibleKind::Wax,
        CollectibleKind::Oil,
        CollectibleKind::Ember,
    ];

    /// Fuel restored on pickup
    pub fn fuel_reward(&self) -> f32 {
        match self {
            CollectibleKind::Tinder => 8.0,
            CollectibleKind::Wax => 5.0,
            CollectibleKind::Oil => 12.0,
            CollectibleKind::Ember => 15.0,
        }
    }

    /// Display colour (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            CollectibleKind::Tinder => 0xfbbf24,
            CollectibleKind::Wax => 0xf3f4f6,
            CollectibleKind::Oil => 0x10b981,
            CollectibleKind::Ember => 0x8b5cf6,
        }
    }
}

/// A static pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub kind: CollectibleKind,
    pub collected: bool,
    /// Glow intensity in [0.5, 1.0), fixed at creation
    pub glow: f32,
}

/// Per-run bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u64,
    /// Ticks survived this run
    pub elapsed_ticks: u64,
    pub phase: GamePhase,
    pub speed_mode: SpeedMode,
    pub combo: u32,
    pub items_collected: u32,
    /// Derived from `elapsed_ticks`, always >= 1
    pub difficulty: u32,
    /// Best score across runs (storage is owned by the caller)
    pub best_score: u64,
}

impl RunState {
    pub fn new(best_score: u64) -> Self {
        Self {
            score: 0,
            elapsed_ticks: 0,
            phase: GamePhase::Idle,
            speed_mode: SpeedMode::Normal,
            combo: 0,
            items_collected: 0,
            difficulty: 1,
            best_score,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whole seconds survived at the nominal tick rate
    pub fn seconds_alive(&self) -> u64 {
        self.elapsed_ticks / TICKS_PER_SECOND
    }
}

/// Something that happened during a tick (for audio/UI/logging consumers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Paused,
    Resumed,
    SpeedChanged(SpeedMode),
    HazardSpawned { id: u32, kind: HazardKind },
    HazardHit { id: u32, kind: HazardKind, damage: f32 },
    HazardDespawned { id: u32, kind: HazardKind },
    /// A lurker gave up because the flame was too strong
    LurkerRetreated { id: u32 },
    CollectibleSpawned { id: u32, kind: CollectibleKind },
    Collected { id: u32, kind: CollectibleKind, fuel: f32 },
    DifficultyUp(u32),
    Extinguished { score: u64, elapsed_ticks: u64 },
    NewBest(u64),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub player: Player,
    /// Live hazards (sorted by id)
    pub hazards: Vec<Hazard>,
    /// Live collectibles (sorted by id)
    pub collectibles: Vec<Collectible>,
    pub run: RunState,
    /// Events produced by the most recent processed tick or transition
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            player: Player::new(&tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            hazards: Vec::new(),
            collectibles: Vec::new(),
            run: RunState::new(0),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed the best score loaded by the caller's store
    pub fn with_best_score(mut self, best: u64) -> Self {
        self.run.best_score = best;
        self
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything for a fresh run and enter `Playing`
    pub fn start(&mut self) {
        self.player = Player::new(&self.tuning);
        self.hazards.clear();
        self.collectibles.clear();
        self.run = RunState::new(self.run.best_score);
        self.run.phase = GamePhase::Playing;
        self.events.clear();

        for _ in 0..self.tuning.initial_collectibles {
            let id = self.next_entity_id();
            let collectible = spawn::spawn_collectible(&mut self.rng, id);
            self.collectibles.push(collectible);
        }

        debug_assert_eq!(self.run.difficulty, clock::difficulty_level(0));
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started (seed {}, best {})", self.seed, self.run.best_score);
    }

    /// Flip between `Playing` and `Paused`; no-op in any other phase
    pub fn toggle_pause(&mut self) {
        match self.run.phase {
            GamePhase::Playing => {
                self.run.phase = GamePhase::Paused;
                self.events.push(GameEvent::Paused);
                log::info!("Paused at tick {}", self.run.elapsed_ticks);
            }
            GamePhase::Paused => {
                self.run.phase = GamePhase::Playing;
                self.events.push(GameEvent::Resumed);
                log::info!("Resumed at tick {}", self.run.elapsed_ticks);
            }
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    /// Change pace while a run is in progress
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        if self.run.is_playing() && self.run.speed_mode != mode {
            self.run.speed_mode = mode;
            self.events.push(GameEvent::SpeedChanged(mode));
        }
    }

    /// Enter `GameOver` and settle the best score; only a `Playing` run can
    /// end
    pub fn extinguish(&mut self) {
        if self.run.phase != GamePhase::Playing {
            return;
        }
        self.player.fuel = 0.0;
        self.run.phase = GamePhase::GameOver;
        self.events.push(GameEvent::Extinguished {
            score: self.run.score,
            elapsed_ticks: self.run.elapsed_ticks,
        });
        log::info!(
            "Flame extinguished: score {} after {}s, {} items",
            self.run.score,
            self.run.seconds_alive(),
            self.run.items_collected
        );

        if self.run.score > self.run.best_score {
            self.run.best_score = self.run.score;
            self.events.push(GameEvent::NewBest(self.run.score));
            log::info!("New best score: {}", self.run.score);
        }
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.hazards.sort_by_key(|h| h.id);
        self.collectibles.sort_by_key(|c| c.id);
    }
}
