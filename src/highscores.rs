//! Best-score bookkeeping
//!
//! The simulation only ever sees a plain number; storage belongs to a
//! [`crate::persistence::BestScoreStore`].

use serde::{Deserialize, Serialize};

/// Best score across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScore(pub u64);

impl BestScore {
    /// Create an empty record
    pub fn new() -> Self {
        Self(0)
    }

    /// Parse a stored value. Accepts a bare integer, a JSON number or a JSON
    /// string holding digits; anything else reads as zero.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<u64>() {
            return Self(value);
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Number(n)) => Self(number_to_score(&n)),
            Ok(serde_json::Value::String(s)) => Self(s.trim().parse().unwrap_or(0)),
            Ok(serde_json::Value::Object(map)) => Self(
                match map.get("best") {
                    Some(serde_json::Value::Number(n)) => number_to_score(n),
                    _ => 0,
                },
            ),
            _ => {
                if !raw.is_empty() {
                    log::warn!("Ignoring malformed best score {raw:?}");
                }
                Self(0)
            }
        }
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.0
    }

    /// Record a finished run's score. Returns true if it is a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if self.qualifies(score) {
            self.0 = score;
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

fn number_to_score(n: &serde_json::Number) -> u64 {
    n.as_u64()
        .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
        .unwrap_or(0)
}
