//! Remote game service boundary: typed operations and failure taxonomy.

use crate::game::{AgentKind, Move};
use crate::session::Session;
use derive_more::{Display, Error};
use std::sync::Arc;

/// Failure taxonomy for remote engine calls.
#[derive(Debug, Clone, Display, Error)]
pub enum ServiceError {
    /// The endpoint could not be reached or returned a non-success status.
    #[display("service unavailable: {message}")]
    Unavailable {
        /// Transport or status detail.
        message: String,
    },
    /// The engine rejected a move the client believed legal (legality race
    /// or stale legal-move set).
    #[display("move rejected by engine: {message}")]
    InvalidMove {
        /// Rejection detail from the engine.
        message: String,
    },
    /// The AI endpoint reported a failure.
    #[display("AI move failed: {message}")]
    AiMoveFailed {
        /// Failure detail from the engine.
        message: String,
    },
}

impl ServiceError {
    /// Transport or HTTP failure.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Engine-side move rejection.
    pub fn invalid_move(message: impl Into<String>) -> Self {
        Self::InvalidMove {
            message: message.into(),
        }
    }

    /// AI endpoint failure.
    pub fn ai_move_failed(message: impl Into<String>) -> Self {
        Self::AiMoveFailed {
            message: message.into(),
        }
    }
}

/// Result of an AI move request.
#[derive(Debug, Clone)]
pub struct AiMove {
    /// Session state with the AI's move already applied by the engine.
    pub session: Session,
    /// The placement the engine chose, or `None` on a forced AI pass.
    pub placed: Option<Move>,
}

/// Operations the remote Othello engine exposes to this client.
///
/// Each call is a single request/response exchange with no client-side
/// retry; the client never applies a move locally before confirmation.
#[async_trait::async_trait]
pub trait GameService: Send {
    /// Creates a fresh game session.
    async fn create_game(&self) -> Result<Session, ServiceError>;

    /// Submits a placement, or a pass when `mv` is `None`.
    async fn submit_move(&self, id: &str, mv: Option<Move>) -> Result<Session, ServiceError>;

    /// Asks the engine to choose and apply a move for the side to move.
    async fn request_ai_move(
        &self,
        id: &str,
        agent: AgentKind,
        time_budget: f64,
    ) -> Result<AiMove, ServiceError>;

    /// Read-only state refresh, used defensively off the happy path.
    async fn fetch_state(&self, id: &str) -> Result<Session, ServiceError>;
}

/// Shared-ownership forwarding: an `Arc`-wrapped service is itself a service,
/// delegating every call to the inner value.
#[async_trait::async_trait]
impl<S: GameService + Sync + ?Sized> GameService for Arc<S> {
    async fn create_game(&self) -> Result<Session, ServiceError> {
        (**self).create_game().await
    }

    async fn submit_move(&self, id: &str, mv: Option<Move>) -> Result<Session, ServiceError> {
        (**self).submit_move(id, mv).await
    }

    async fn request_ai_move(
        &self,
        id: &str,
        agent: AgentKind,
        time_budget: f64,
    ) -> Result<AiMove, ServiceError> {
        (**self).request_ai_move(id, agent, time_budget).await
    }

    async fn fetch_state(&self, id: &str) -> Result<Session, ServiceError> {
        (**self).fetch_state(id).await
    }
}
