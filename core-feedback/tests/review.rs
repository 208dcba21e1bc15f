use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{
    BridgeError, FailReviewReason, FeedbackApp, PlatformId, PlatformService, ReviewOutcome,
};
use core_feedback::Feedback;
use core_runtime::bootstrap::Prerequisite;
use core_runtime::events::EventBus;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Always-satisfied core app.
struct AppUp;

#[async_trait]
impl Prerequisite for AppUp {
    fn describe(&self) -> &'static str {
        "core app initialization"
    }

    fn is_satisfied(&self) -> bool {
        true
    }

    async fn satisfy(&self) {}
}

/// Player session that can be upgraded by `satisfy`.
struct Session {
    signed_in: Arc<AtomicBool>,
    can_sign_in: bool,
    attempts: AtomicUsize,
}

#[async_trait]
impl Prerequisite for Session {
    fn describe(&self) -> &'static str {
        "account session"
    }

    fn is_satisfied(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }

    async fn satisfy(&self) {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.can_sign_in {
            self.signed_in.store(true, Ordering::SeqCst);
        }
    }
}

/// Host that refuses with `NoAuth` until the shared session flag is set.
struct ReviewHost {
    platform: PlatformId,
    signed_in: Arc<AtomicBool>,
    refusal: Option<FailReviewReason>,
    faults: bool,
    journal: Arc<Mutex<Vec<String>>>,
}

impl ReviewHost {
    fn record(&self, call: &str) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.platform, call));
    }

    fn answer(&self) -> Result<ReviewOutcome> {
        if self.faults {
            return Err(BridgeError::OperationFailed("review api".to_string()));
        }
        if let Some(reason) = self.refusal {
            return Ok(ReviewOutcome::refused(reason));
        }
        if !self.signed_in.load(Ordering::SeqCst) {
            return Ok(ReviewOutcome::refused(FailReviewReason::NoAuth));
        }
        Ok(ReviewOutcome::accepted())
    }
}

impl PlatformService for ReviewHost {
    fn platform(&self) -> PlatformId {
        self.platform
    }
}

#[async_trait]
impl FeedbackApp for ReviewHost {
    async fn can_review(&self) -> Result<ReviewOutcome> {
        self.record("can_review");
        self.answer()
    }

    async fn request_review(&self) -> Result<ReviewOutcome> {
        self.record("request_review");
        self.answer()
    }
}

struct Fixture {
    feedback: Feedback,
    session: Arc<Session>,
    signed_in: Arc<AtomicBool>,
    journal: Arc<Mutex<Vec<String>>>,
}

impl Fixture {
    fn new(signed_in: bool, can_sign_in: bool) -> Self {
        let signed_in = Arc::new(AtomicBool::new(signed_in));
        let session = Arc::new(Session {
            signed_in: signed_in.clone(),
            can_sign_in,
            attempts: AtomicUsize::new(0),
        });
        let feedback = Feedback::new(EventBus::new(16), Arc::new(AppUp), session.clone());
        Self {
            feedback,
            session,
            signed_in,
            journal: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn host(&self, platform: PlatformId, refusal: Option<FailReviewReason>) -> Arc<ReviewHost> {
        Arc::new(ReviewHost {
            platform,
            signed_in: self.signed_in.clone(),
            refusal,
            faults: false,
            journal: self.journal.clone(),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn test_any_backend_allowing_review_is_enough() {
    let fx = Fixture::new(true, true);
    fx.feedback
        .register(fx.host(PlatformId::Editor, Some(FailReviewReason::GameRated)));
    fx.feedback.register(fx.host(PlatformId::YaGames, None));

    assert!(fx.feedback.can_review().await.success);
}

#[tokio::test]
async fn test_refusal_reports_first_reason() {
    let fx = Fixture::new(true, true);
    fx.feedback
        .register(fx.host(PlatformId::Editor, Some(FailReviewReason::GameRated)));
    fx.feedback
        .register(fx.host(PlatformId::YaGames, Some(FailReviewReason::Canceled)));

    let outcome = fx.feedback.request_review().await;
    assert_eq!(outcome, ReviewOutcome::refused(FailReviewReason::GameRated));
    assert!(!fx.calls().iter().any(|call| call.ends_with("request_review")));
}

#[tokio::test]
async fn test_no_auth_signs_in_and_retries_once() {
    let fx = Fixture::new(false, true);
    fx.feedback.register(fx.host(PlatformId::YaGames, None));

    assert!(fx.feedback.request_review().await.success);
    assert_eq!(fx.session.attempts.load(Ordering::SeqCst), 1);
    assert_eq!(
        fx.calls(),
        vec![
            "yagames:can_review",
            "yagames:can_review",
            "yagames:request_review"
        ]
    );
}

#[tokio::test]
async fn test_declined_sign_in_keeps_no_auth() {
    let fx = Fixture::new(false, false);
    fx.feedback.register(fx.host(PlatformId::YaGames, None));

    let outcome = fx.feedback.request_review().await;
    assert_eq!(outcome, ReviewOutcome::refused(FailReviewReason::NoAuth));
    assert_eq!(fx.calls(), vec!["yagames:can_review"]);
}

#[tokio::test]
async fn test_request_goes_to_a_single_backend() {
    let fx = Fixture::new(true, true);
    fx.feedback.register(fx.host(PlatformId::Editor, None));
    fx.feedback.register(fx.host(PlatformId::YaGames, None));

    assert!(fx.feedback.request_review().await.success);
    let requests: Vec<_> = fx
        .calls()
        .into_iter()
        .filter(|call| call.ends_with("request_review"))
        .collect();
    assert_eq!(requests, vec!["editor:request_review"]);
}

#[tokio::test]
async fn test_fault_yields_unknown_reason() {
    let fx = Fixture::new(true, true);
    fx.feedback.register(Arc::new(ReviewHost {
        platform: PlatformId::Editor,
        signed_in: fx.signed_in.clone(),
        refusal: None,
        faults: true,
        journal: fx.journal.clone(),
    }));

    assert_eq!(
        fx.feedback.can_review().await,
        ReviewOutcome::refused(FailReviewReason::Unknown)
    );
}

#[tokio::test]
async fn test_empty_registry_cannot_review() {
    let fx = Fixture::new(true, true);
    assert!(!fx.feedback.can_review().await.success);
}
