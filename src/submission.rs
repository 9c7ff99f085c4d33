//! Remote score submission
//!
//! Submitting is fire-and-forget from the simulation's point of view: the
//! tracker only records where the request stands so the UI can show a
//! message. Failures are reported, never retried.

use thiserror::Error;

/// Message shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Score saved!";
/// Message shown after a failed submission
pub const FAILURE_MESSAGE: &str = "Failed to save score. Please try again.";

/// The remote service rejected or never received the score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("score submission failed: {reason}")]
pub struct ScoreSubmissionFailure {
    pub reason: String,
}

impl ScoreSubmissionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Anything that can deliver a score for a player
pub trait ScoreSubmitter {
    fn submit(&mut self, player: &str, score: u64) -> Result<(), ScoreSubmissionFailure>;
}

/// Where the latest submission stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending { player: String, score: u64 },
    Succeeded { score: u64 },
    Failed(ScoreSubmissionFailure),
}

/// Request handed to whatever performs the submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub player: String,
    pub score: u64,
}

/// Tracks one submission at a time
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    status: SubmissionStatus,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending { .. })
    }

    /// Start a submission. Refused while another is pending, for an empty
    /// player identity, or for a zero score.
    pub fn begin(&mut self, player: &str, score: u64) -> Option<SubmissionRequest> {
        if self.is_pending() || player.trim().is_empty() || score == 0 {
            return None;
        }
        self.status = SubmissionStatus::Pending {
            player: player.to_string(),
            score,
        };
        log::info!("Submitting score {score} for {player}");
        Some(SubmissionRequest {
            player: player.to_string(),
            score,
        })
    }

    /// Resolve the pending submission. Ignored if nothing is pending.
    pub fn finish(&mut self, result: Result<(), ScoreSubmissionFailure>) {
        let SubmissionStatus::Pending { score, .. } = self.status else {
            log::warn!("Submission result arrived with nothing pending");
            return;
        };
        self.status = match result {
            Ok(()) => SubmissionStatus::Succeeded { score },
            Err(e) => {
                log::error!("{e}");
                SubmissionStatus::Failed(e)
            }
        };
    }

    /// Begin, deliver through `submitter`, and resolve in one go
    pub fn submit_with<S: ScoreSubmitter + ?Sized>(
        &mut self,
        submitter: &mut S,
        player: &str,
        score: u64,
    ) -> &SubmissionStatus {
        if let Some(request) = self.begin(player, score) {
            let result = submitter.submit(&request.player, request.score);
            self.finish(result);
        }
        &self.status
    }

    /// User-facing message for the current status
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Pending { .. } => Some("Saving..."),
            SubmissionStatus::Succeeded { .. } => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Failed(_) => Some(FAILURE_MESSAGE),
        }
    }
}
