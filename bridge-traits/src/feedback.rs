//! Feedback (store review) capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::PlatformService;

/// Why a review cannot be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailReviewReason {
    #[default]
    Unknown,
    /// Player must sign in to an account first.
    NoAuth,
    /// Player already rated the game.
    GameRated,
    /// Player dismissed the review dialog.
    Canceled,
}

/// Result of a review check or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub success: bool,
    /// Meaningful only when `success` is false.
    pub reason: FailReviewReason,
}

impl ReviewOutcome {
    pub fn accepted() -> Self {
        Self {
            success: true,
            reason: FailReviewReason::Unknown,
        }
    }

    pub fn refused(reason: FailReviewReason) -> Self {
        Self {
            success: false,
            reason,
        }
    }
}

#[async_trait]
pub trait FeedbackApp: PlatformService {
    async fn can_review(&self) -> Result<ReviewOutcome>;

    async fn request_review(&self) -> Result<ReviewOutcome>;
}
