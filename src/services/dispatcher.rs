// Request Dispatcher
// Owns the idle/pending/settled submission lifecycle and turns every
// failure into one user-readable message

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::ClassificationResult;
use crate::services::classify_client::{ClassifyClient, ClassifyError, ClientConfig};
use crate::services::text_input::normalize_claim;

const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(ClassificationResult),
    Failure(String),
}

/// Lifecycle of one submission. A submission settles exactly once; a new
/// accepted submission replaces the previous settlement entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Pending,
    Settled(Outcome),
}

pub struct Dispatcher {
    client: ClassifyClient,
    state: SubmitState,
}

impl Dispatcher {
    pub fn new(client: ClassifyClient) -> Self {
        Self {
            client,
            state: SubmitState::Idle,
        }
    }

    /// Build a dispatcher against the environment-configured service.
    pub fn from_env() -> Result<Self, ClassifyError> {
        Ok(Self::new(ClassifyClient::new(&ClientConfig::from_env())?))
    }

    /// Submit a claim for classification.
    ///
    /// Blank input and submissions made while one is already pending are
    /// no-ops: no network call goes out and the current state is kept.
    /// Otherwise exactly one request is sent and the state moves
    /// idle -> pending -> settled, with the settlement carrying either the
    /// parsed result or a user-facing failure message.
    pub async fn submit(&mut self, text: &str) -> &SubmitState {
        let claim = normalize_claim(text);
        if claim.is_empty() {
            debug!("submit.skipped: empty claim");
            return &self.state;
        }
        if matches!(self.state, SubmitState::Pending) {
            warn!("submit.rejected: previous submission still pending");
            return &self.state;
        }

        let submission_id = Uuid::new_v4();
        info!(%submission_id, chars = claim.len(), "submit.start");
        self.state = SubmitState::Pending;

        let outcome = match self.client.classify(&claim).await {
            Ok(result) => {
                info!(%submission_id, label = %result.label, confidence = result.confidence, "submit.success");
                Outcome::Success(result)
            }
            Err(err) => {
                warn!(%submission_id, error = %err, "submit.failure");
                Outcome::Failure(failure_message(&err))
            }
        };

        self.state = SubmitState::Settled(outcome);
        &self.state
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmitState::Pending)
    }

    /// Failure message of the current settlement, if it failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Settled(Outcome::Failure(message)) => Some(message),
            _ => None,
        }
    }

    /// Result of the current settlement, if it succeeded.
    pub fn result(&self) -> Option<&ClassificationResult> {
        match &self.state {
            SubmitState::Settled(Outcome::Success(result)) => Some(result),
            _ => None,
        }
    }
}

/// The one conversion point from a transport/service error to the message
/// shown to the user. Service-provided detail is used verbatim; a non-2xx
/// without detail falls back to the status code; everything else gets the
/// generic message.
pub fn failure_message(err: &ClassifyError) -> String {
    match err {
        ClassifyError::Service {
            detail: Some(detail),
            ..
        } => detail.clone(),
        ClassifyError::Service { status, .. } => format!("Request failed: {status}"),
        ClassifyError::Network(_) | ClassifyError::MalformedResponse(_) => {
            DEFAULT_FAILURE_MESSAGE.to_string()
        }
    }
}
