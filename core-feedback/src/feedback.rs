use bridge_traits::{
    FailReviewReason, FeedbackApp, InitializationStatus, PlatformId, ReviewOutcome,
};
use core_runtime::bootstrap::{ensure, Prerequisite};
use core_runtime::events::{Domain, EventBus, EventStream};
use core_runtime::facade::Facade;
use core_runtime::orchestrate::{best_of_many, first_success, QueryOutcome};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Review prompt facade.
///
/// A review can be requested when any backend allows it. A backend that
/// refuses with [`FailReviewReason::NoAuth`] gets one chance: the session
/// prerequisite is bootstrapped and the check runs again.
pub struct Feedback {
    facade: Facade<dyn FeedbackApp>,
    session: Arc<dyn Prerequisite>,
}

impl Feedback {
    pub fn new(
        events: EventBus,
        app: Arc<dyn Prerequisite>,
        session: Arc<dyn Prerequisite>,
    ) -> Self {
        Self {
            facade: Facade::new(Domain::Feedback, events).with_upstream(app),
            session,
        }
    }

    pub fn register(&self, adapter: Arc<dyn FeedbackApp>) -> bool {
        self.facade.register(adapter)
    }

    pub fn platforms(&self) -> Vec<PlatformId> {
        self.facade.registry().platforms()
    }

    pub fn subscribe(&self) -> EventStream {
        self.facade.subscribe()
    }

    pub fn status(&self) -> InitializationStatus {
        self.facade.status()
    }

    pub fn is_initialized(&self) -> bool {
        self.facade.is_initialized()
    }

    pub async fn initialize(&self) -> InitializationStatus {
        self.facade.initialize_adapters().await
    }

    /// Accepted when any backend allows a review, otherwise the first
    /// refusal reason in registration order.
    pub async fn can_review(&self) -> ReviewOutcome {
        if !self.facade.ensure_initialized("can review").await {
            return ReviewOutcome::refused(FailReviewReason::Unknown);
        }

        let refusals = FirstRefusal::default();
        let seen = &refusals;
        let outcome = best_of_many(
            Domain::Feedback,
            "can review",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .can_review()
                    .await
                    .map(|outcome| seen.accept(outcome))
            },
        )
        .await;

        refusals.resolve(outcome)
    }

    /// Show the review dialog on the first backend that allows it.
    #[instrument(skip(self))]
    pub async fn request_review(&self) -> ReviewOutcome {
        let mut check = self.can_review().await;

        if !check.success && check.reason == FailReviewReason::NoAuth {
            debug!(facade = %Domain::Feedback, "Review needs a signed-in player");
            if !ensure(self.session.as_ref(), Domain::Feedback, "request review").await {
                return check;
            }
            check = self.can_review().await;
        }

        if !check.success {
            info!(facade = %Domain::Feedback, reason = ?check.reason, "Review is not available");
            return check;
        }

        let refusals = FirstRefusal::default();
        let seen = &refusals;
        let outcome = first_success(
            Domain::Feedback,
            "request review",
            &self.facade.adapters(),
            |adapter| async move {
                adapter
                    .request_review()
                    .await
                    .map(|outcome| seen.accept(outcome))
            },
        )
        .await;

        if let QueryOutcome::Found { platform, .. } = &outcome {
            info!(facade = %Domain::Feedback, platform = %platform, "Review requested");
        }
        refusals.resolve(outcome)
    }
}

/// Remembers the first refusal reason of a pass.
#[derive(Default)]
struct FirstRefusal(Mutex<Option<FailReviewReason>>);

impl FirstRefusal {
    /// Pass successes through; note the reason of a refusal.
    fn accept(&self, outcome: ReviewOutcome) -> Option<ReviewOutcome> {
        if outcome.success {
            return Some(outcome);
        }
        self.0.lock().get_or_insert(outcome.reason);
        None
    }

    fn resolve(self, outcome: QueryOutcome<ReviewOutcome>) -> ReviewOutcome {
        match outcome {
            QueryOutcome::Found { value, .. } => value,
            QueryOutcome::NotFound => {
                let reason = self.0.into_inner().unwrap_or_default();
                ReviewOutcome::refused(reason)
            }
            QueryOutcome::Aborted { .. } => ReviewOutcome::refused(FailReviewReason::Unknown),
        }
    }
}

impl std::fmt::Debug for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feedback")
            .field("facade", &self.facade)
            .finish()
    }
}
