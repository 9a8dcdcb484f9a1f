//! Get Advice use case.
//!
//! Owns the request lifecycle: validation, the idle → loading →
//! success|error flow, and single-flight enforcement. The presentation
//! layer observes [`LifecycleState`] and never mutates it.

use crate::ports::advice_gateway::AdviceGateway;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use vyapar_domain::util::truncate_str;
use vyapar_domain::{Advice, AdviceRequest, DomainError};

/// Current state of the advice request lifecycle
///
/// Exactly one variant is active at a time. Transitions are owned
/// solely by [`AdviceController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    /// No request submitted yet
    Idle,
    /// A request is in flight; new submissions are ignored
    Loading,
    /// The advisor responded; payload is structured or raw fallback
    Success(Advice),
    /// Validation or gateway failure, with the display message
    Error(String),
}

impl LifecycleState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LifecycleState::Loading)
    }
}

/// Controller for the advice request lifecycle
///
/// Holds the single mutable piece of state in the system. At most one
/// request is in flight per controller; a submission while Loading is a
/// no-op. A request, once issued, runs to completion — there is no
/// cancellation.
#[derive(Clone)]
pub struct AdviceController {
    gateway: Arc<dyn AdviceGateway>,
    state: Arc<Mutex<LifecycleState>>,
}

impl AdviceController {
    pub fn new(gateway: Arc<dyn AdviceGateway>) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(LifecycleState::Idle)),
        }
    }

    /// Snapshot of the current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state.lock().unwrap().clone()
    }

    /// Submit the three form fields and drive the request to completion.
    ///
    /// Validation happens entirely at this boundary: if any field is
    /// empty the gateway is never invoked and the state becomes `Error`
    /// with the fixed validation message. Entering Loading clears any
    /// previous payload or error, so stale results never display
    /// alongside a new loading indicator.
    pub async fn submit(
        &self,
        business_type: impl Into<String>,
        situation: impl Into<String>,
        goal: impl Into<String>,
    ) {
        let request = AdviceRequest::new(business_type, situation, goal);

        {
            let mut state = self.state.lock().unwrap();
            if state.is_loading() {
                debug!("Submission ignored: a request is already in flight");
                return;
            }
            if !request.is_complete() {
                *state = LifecycleState::Error(DomainError::IncompleteRequest.to_string());
                return;
            }
            *state = LifecycleState::Loading;
        }

        info!(
            "Requesting advice for business type '{}'",
            truncate_str(&request.business_type, 80)
        );

        let result = self.gateway.request_advice(&request).await;

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(text) => {
                debug!(bytes = text.len(), "Advice response received");
                *state = LifecycleState::Success(Advice::from_raw(text));
            }
            Err(e) => {
                // Full cause stays in the log; the user sees one generic message
                warn!("Advice request failed: {}", e);
                *state = LifecycleState::Error(e.user_message().to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::advice_gateway::{GatewayError, GATEWAY_FAILURE_MESSAGE};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use vyapar_domain::ParsedRecommendation;

    // ==================== Test Mocks ====================

    struct FixedGateway {
        response: Result<String, GatewayError>,
        calls: AtomicUsize,
    }

    impl FixedGateway {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn err(error: GatewayError) -> Self {
            Self {
                response: Err(error),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AdviceGateway for FixedGateway {
        async fn request_advice(
            &self,
            _request: &AdviceRequest,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(GatewayError::Transport(msg)) => Err(GatewayError::Transport(msg.clone())),
                Err(GatewayError::EmptyResponse) => Err(GatewayError::EmptyResponse),
            }
        }
    }

    /// Gateway that blocks until released, for observing the Loading state
    struct BlockingGateway {
        started: Arc<Notify>,
        release: Arc<Notify>,
        calls: AtomicUsize,
    }

    impl BlockingGateway {
        fn new(started: Arc<Notify>, release: Arc<Notify>) -> Self {
            Self {
                started,
                release,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AdviceGateway for BlockingGateway {
        async fn request_advice(
            &self,
            _request: &AdviceRequest,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            Ok("Recommended Decision: Done".to_string())
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_submission_yields_structured_advice() {
        let gateway = Arc::new(FixedGateway::ok(
            "Recommended Decision: Open on weekends\n\
             Why This Is Recommended:\n- More customers\n\
             Risks & Trade-offs:\n- Staffing cost\n\
             Alternative Option: Loyalty cards",
        ));
        let controller = AdviceController::new(gateway);

        controller.submit("Cafe", "Slow weekdays", "Footfall").await;

        match controller.state() {
            LifecycleState::Success(Advice::Structured(ParsedRecommendation {
                decision, ..
            })) => {
                assert_eq!(decision, "Open on weekends");
            }
            other => panic!("Expected structured success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_response_falls_back_to_raw() {
        let gateway = Arc::new(FixedGateway::ok("just some text"));
        let controller = AdviceController::new(gateway);

        controller.submit("Cafe", "Slow weekdays", "Footfall").await;

        match controller.state() {
            LifecycleState::Success(Advice::Unstructured(raw)) => {
                assert_eq!(raw, "just some text");
            }
            other => panic!("Expected raw fallback, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validation_gate_never_invokes_gateway() {
        let gateway = Arc::new(FixedGateway::ok("unused"));
        let controller = AdviceController::new(gateway.clone());

        controller.submit("", "Slow weekdays", "Footfall").await;

        assert_eq!(gateway.call_count(), 0);
        assert_eq!(
            controller.state(),
            LifecycleState::Error("Please fill out all fields to get advice.".to_string())
        );
    }

    #[tokio::test]
    async fn test_transport_and_empty_response_collapse_to_one_message() {
        for error in [
            GatewayError::Transport("connection refused".to_string()),
            GatewayError::EmptyResponse,
        ] {
            let gateway = Arc::new(FixedGateway::err(error));
            let controller = AdviceController::new(gateway);

            controller.submit("Cafe", "Slow weekdays", "Footfall").await;

            assert_eq!(
                controller.state(),
                LifecycleState::Error(GATEWAY_FAILURE_MESSAGE.to_string())
            );
        }
    }

    #[tokio::test]
    async fn test_single_flight_ignores_submit_while_loading() {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let gateway = Arc::new(BlockingGateway::new(started.clone(), release.clone()));
        let controller = AdviceController::new(gateway.clone());

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.submit("Cafe", "Slow weekdays", "Footfall").await;
            })
        };

        started.notified().await;
        assert!(controller.state().is_loading());

        // Second submit while the first is in flight is a no-op
        controller.submit("Cafe", "Other", "Goal").await;
        assert!(controller.state().is_loading());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

        release.notify_one();
        first.await.unwrap();

        assert!(matches!(controller.state(), LifecycleState::Success(_)));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resubmission_clears_previous_error() {
        let gateway = Arc::new(FixedGateway::ok("Recommended Decision: X"));
        let controller = AdviceController::new(gateway);

        controller.submit("", "", "").await;
        assert!(matches!(controller.state(), LifecycleState::Error(_)));

        controller.submit("Cafe", "Slow weekdays", "Footfall").await;
        assert!(matches!(controller.state(), LifecycleState::Success(_)));
    }
}
