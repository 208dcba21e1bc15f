use async_trait::async_trait;
use bridge_traits::{
    error::Result, synthetic, FeedbackApp, PlatformId, PlatformService, ReviewOutcome,
};

/// Review prompts that always succeed.
#[derive(Debug, Default)]
pub struct EditorFeedback;

impl PlatformService for EditorFeedback {
    fn platform(&self) -> PlatformId {
        PlatformId::Editor
    }
}

#[async_trait]
impl FeedbackApp for EditorFeedback {
    async fn can_review(&self) -> Result<ReviewOutcome> {
        synthetic("feedback.can_review", ReviewOutcome::accepted()).await
    }

    async fn request_review(&self) -> Result<ReviewOutcome> {
        synthetic("feedback.request_review", ReviewOutcome::accepted()).await
    }
}
