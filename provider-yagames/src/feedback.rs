use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{
    bridge, FailReviewReason, FeedbackApp, PendingCall, PlatformId, PlatformService,
    ReviewOutcome,
};
use std::sync::Arc;

use crate::error::decode;
use crate::host::YaGamesHost;
use crate::reported;
use crate::types::{review_reason, YaReviewReply};

pub struct YaGamesFeedback {
    host: Arc<dyn YaGamesHost>,
}

impl YaGamesFeedback {
    pub fn new(host: Arc<dyn YaGamesHost>) -> Self {
        Self { host }
    }
}

async fn review_outcome(operation: &'static str, call: PendingCall<String>) -> Result<ReviewOutcome> {
    let Some(json) = reported(operation, call.await)? else {
        return Ok(ReviewOutcome::refused(FailReviewReason::Unknown));
    };
    let reply = decode::<YaReviewReply>("review reply", &json)?;
    Ok(if reply.value {
        ReviewOutcome::accepted()
    } else {
        ReviewOutcome::refused(review_reason(reply.reason))
    })
}

impl PlatformService for YaGamesFeedback {
    fn platform(&self) -> PlatformId {
        PlatformId::YaGames
    }
}

#[async_trait]
impl FeedbackApp for YaGamesFeedback {
    async fn can_review(&self) -> Result<ReviewOutcome> {
        let call = bridge("feedback.can_review", |done| self.host.can_review(done));
        review_outcome("feedback.can_review", call).await
    }

    async fn request_review(&self) -> Result<ReviewOutcome> {
        let call = bridge("feedback.request_review", |done| self.host.request_review(done));
        review_outcome("feedback.request_review", call).await
    }
}
