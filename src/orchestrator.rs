//! Turn orchestration: the state machine between human intents, the remote
//! engine, and the session store.

use crate::game::{AgentKind, Move, Side};
use crate::service::{AiMove, GameService};
use crate::session::{Session, SessionStore};
use tracing::{debug, info, instrument, warn};

/// Externally visible phase of the turn state machine.
///
/// Exactly one phase holds at any time; the in-flight sub-state is a busy
/// flag rather than a separate phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session yet.
    Idle,
    /// Waiting for the human to choose a cell, or a forced skip.
    HumanTurn,
    /// The engine owes us an AI move.
    AiTurn,
    /// Terminal; only a new game leaves this phase.
    GameOver,
}

/// Drives a single game session against a remote engine.
///
/// All transitions run to completion on one task; the busy flag drops any
/// intent arriving while a request is in flight, so at most one request is
/// outstanding per session.
pub struct Orchestrator<S> {
    service: S,
    store: SessionStore,
    phase: Phase,
    busy: bool,
    stalled: bool,
    human_side: Side,
    agent: AgentKind,
    time_budget: f64,
    log: Vec<String>,
    explanation: Option<String>,
}

impl<S> Orchestrator<S> {
    /// Creates an idle orchestrator over `service`.
    pub fn new(service: S, agent: AgentKind, time_budget: f64) -> Self {
        Self {
            service,
            store: SessionStore::new(),
            phase: Phase::Idle,
            busy: false,
            stalled: false,
            human_side: Side::Black,
            agent,
            time_budget,
            log: Vec::new(),
            explanation: None,
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest session snapshot for rendering.
    pub fn session(&self) -> Option<&Session> {
        self.store.current()
    }

    /// Append-only, human-readable event log.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Agent used for the next AI turn.
    pub fn agent(&self) -> AgentKind {
        self.agent
    }

    /// Explanation line for the AI's last placement.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// True when an AI move is owed or outstanding (and not stalled).
    pub fn thinking(&self) -> bool {
        self.phase == Phase::AiTurn && !self.stalled
    }

    /// True after a failed AI request, until [`Self::retry_ai`].
    pub fn stalled(&self) -> bool {
        self.stalled
    }

    /// True when the event loop should issue the AI move for this turn.
    pub fn needs_ai(&self) -> bool {
        self.phase == Phase::AiTurn && !self.busy && !self.stalled
    }

    /// Selects the agent used for subsequent AI turns; never retroactive.
    pub fn select_agent(&mut self, agent: AgentKind) {
        if agent != self.agent {
            info!(%agent, "Agent selected");
            self.agent = agent;
        }
    }

    /// Clears the stall after a failed AI request so the loop retries once.
    pub fn retry_ai(&mut self) {
        if self.phase == Phase::AiTurn && self.stalled {
            info!("Retrying AI move");
            self.stalled = false;
        }
    }

    /// Folds a freshly received session into the store and re-derives the
    /// phase from its side-to-move and outcome.
    fn adopt(&mut self, session: Session) {
        let phase = if session.is_over() {
            Phase::GameOver
        } else if *session.to_move() == self.human_side {
            Phase::HumanTurn
        } else {
            Phase::AiTurn
        };
        if phase == Phase::GameOver {
            if let Some(outcome) = session.outcome() {
                self.log.push(format!("Game over → {outcome}"));
            }
        }
        debug!(?phase, to_move = %session.to_move(), "Adopted session state");
        self.store.replace(session);
        self.phase = phase;
    }
}

impl<S: GameService> Orchestrator<S> {
    /// Starts a fresh session, replacing any finished or in-progress one.
    #[instrument(skip(self))]
    pub async fn new_game(&mut self) {
        if self.busy {
            debug!("Dropping new-game intent while busy");
            return;
        }
        self.busy = true;
        match self.service.create_game().await {
            Ok(session) => {
                self.log.push(format!("New game started ({})", session.id()));
                self.explanation = None;
                self.stalled = false;
                self.adopt(session);
            }
            Err(e) => {
                warn!(error = %e, "Session creation failed");
                self.log.push(format!("Could not start game: {e}"));
            }
        }
        self.busy = false;
    }

    /// Plays the human's chosen cell.
    ///
    /// Rejected locally with a log line when the cell is not in the current
    /// legal move set; nothing is sent over the network in that case.
    #[instrument(skip(self))]
    pub async fn play_cell(&mut self, row: usize, col: usize) {
        if self.busy || self.phase != Phase::HumanTurn {
            debug!("Dropping cell input");
            return;
        }
        let mv = Move::new(row, col);
        let Some(session) = self.store.current() else {
            return;
        };
        if !session.is_legal(mv) {
            debug!(%mv, "Rejected locally: not in the legal move set");
            self.log.push(format!("Illegal move {mv}"));
            return;
        }
        let id = session.id().clone();
        self.busy = true;
        match self.service.submit_move(&id, Some(mv)).await {
            Ok(next) => {
                self.log.push(format!("Human plays {mv}"));
                self.adopt(next);
            }
            Err(e) => {
                warn!(error = %e, %mv, "Move submission failed");
                self.log.push(format!("Move failed {mv}: {e}"));
            }
        }
        self.busy = false;
    }

    /// Submits a forced pass. A no-op unless the legal move set is empty.
    #[instrument(skip(self))]
    pub async fn skip_turn(&mut self) {
        if self.busy || self.phase != Phase::HumanTurn {
            debug!("Dropping skip intent");
            return;
        }
        let Some(session) = self.store.current() else {
            return;
        };
        if !session.legal_moves().is_empty() {
            debug!("Skip requested with moves available");
            return;
        }
        let id = session.id().clone();
        self.log.push("Human skips turn".to_string());
        self.busy = true;
        match self.service.submit_move(&id, None).await {
            Ok(next) => self.adopt(next),
            Err(e) => {
                warn!(error = %e, "Pass submission failed");
                self.log.push(format!("Pass failed: {e}"));
            }
        }
        self.busy = false;
    }

    /// Requests an AI move for the side to move.
    ///
    /// Invoked by the event loop whenever the machine lands on
    /// [`Phase::AiTurn`]; a failure parks the turn until [`Self::retry_ai`],
    /// so repeated engine failures cannot loop.
    #[instrument(skip(self), fields(agent = %self.agent))]
    pub async fn invoke_ai(&mut self) {
        if self.busy || self.phase != Phase::AiTurn {
            return;
        }
        let Some(session) = self.store.current() else {
            return;
        };
        let id = session.id().clone();
        let agent = self.agent;
        self.busy = true;
        match self.service.request_ai_move(&id, agent, self.time_budget).await {
            Ok(AiMove { session, placed }) => {
                match placed {
                    Some(mv) => {
                        self.log.push(format!("{} plays {mv}", agent.label()));
                        self.explanation = Some(agent.explain(mv));
                    }
                    None => self.log.push(format!("{} skips", agent.label())),
                }
                self.stalled = false;
                self.adopt(session);
            }
            Err(e) => {
                warn!(error = %e, "AI move request failed; awaiting retry");
                self.log.push("AI move failed".to_string());
                self.stalled = true;
            }
        }
        self.busy = false;
    }

    /// Defensive read-only refresh from the engine.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) {
        if self.busy {
            return;
        }
        let Some(session) = self.store.current() else {
            return;
        };
        let id = session.id().clone();
        self.busy = true;
        match self.service.fetch_state(&id).await {
            Ok(next) => {
                debug!("State refreshed");
                self.adopt(next);
            }
            Err(e) => {
                warn!(error = %e, "State refresh failed");
                self.log.push(format!("Refresh failed: {e}"));
            }
        }
        self.busy = false;
    }
}
