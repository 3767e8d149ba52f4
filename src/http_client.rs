//! HTTP implementation of the game service over the engine's REST API.

use crate::game::{AgentKind, Board, Cell, Move, PieceCount, Side};
use crate::service::{AiMove, GameService, ServiceError};
use crate::session::Session;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

/// HTTP client for the remote Othello engine.
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    /// Base URL of the engine, without a trailing slash.
    base_url: String,
    /// Shared connection pool.
    client: reqwest::Client,
}

impl HttpGameClient {
    /// Creates a client for the engine at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        response.json::<T>().await.map_err(|e| {
            error!(error = %e, "Failed to decode engine response");
            ServiceError::unavailable(format!("invalid engine response: {e}"))
        })
    }
}

/// Wire shape shared by all game endpoints.
///
/// `game_id` appears only on creation, `move` and `eval_score` only on AI
/// move responses.
#[derive(Debug, Deserialize)]
struct GameStateWire {
    #[serde(default)]
    game_id: Option<String>,
    board: Vec<Vec<i8>>,
    to_move: i8,
    #[serde(default)]
    legal_moves: Vec<[usize; 2]>,
    #[serde(default)]
    pieces: Option<PiecesWire>,
    #[serde(rename = "move", default)]
    placed: Option<[usize; 2]>,
    #[serde(default)]
    eval_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PiecesWire {
    black: u32,
    white: u32,
}

fn decode_cell(value: i8) -> Result<Cell, ServiceError> {
    match value {
        0 => Ok(Cell::Empty),
        v => Side::from_wire(v).map(Cell::Occupied).ok_or_else(|| {
            ServiceError::unavailable(format!("unknown cell encoding {v}"))
        }),
    }
}

impl GameStateWire {
    /// Validates the payload shape and converts it into a domain session.
    fn into_session(self, id: String) -> Result<Session, ServiceError> {
        let size = self.board.len();
        let mut rows = Vec::with_capacity(size);
        for row in self.board {
            if row.len() != size {
                return Err(ServiceError::unavailable(
                    "engine returned a non-square board",
                ));
            }
            let cells = row
                .into_iter()
                .map(decode_cell)
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        let board = Board::from_rows(rows).map_err(ServiceError::unavailable)?;
        let to_move = Side::from_wire(self.to_move).ok_or_else(|| {
            ServiceError::unavailable(format!("unknown side encoding {}", self.to_move))
        })?;
        let pieces = match self.pieces {
            Some(p) => PieceCount::new(p.black, p.white),
            None => PieceCount::new(board.count(Side::Black), board.count(Side::White)),
        };
        let legal_moves = self
            .legal_moves
            .iter()
            .map(|[r, c]| Move::new(*r, *c))
            .collect();
        Ok(Session::new(id, board, to_move, legal_moves, pieces))
    }
}

#[async_trait::async_trait]
impl GameService for HttpGameClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn create_game(&self) -> Result<Session, ServiceError> {
        info!("Creating game session");
        let url = format!("{}/api/v1/game/new", self.base_url);
        let response = self.client.post(&url).send().await.map_err(|e| {
            error!(error = %e, "Failed to reach engine");
            ServiceError::unavailable(format!("create failed: {e}"))
        })?;
        if !response.status().is_success() {
            return Err(ServiceError::unavailable(format!(
                "create returned {}",
                response.status()
            )));
        }
        let wire: GameStateWire = Self::read_json(response).await?;
        let id = wire
            .game_id
            .clone()
            .ok_or_else(|| ServiceError::unavailable("create response missing game_id"))?;
        let session = wire.into_session(id)?;
        info!(game_id = %session.id(), "Session created");
        Ok(session)
    }

    #[instrument(skip(self), fields(game_id = %id))]
    async fn submit_move(&self, id: &str, mv: Option<Move>) -> Result<Session, ServiceError> {
        debug!(mv = ?mv, "Submitting move");
        let url = format!("{}/api/v1/game/{}/move", self.base_url, id);
        let body = match mv {
            Some(m) => serde_json::json!({ "row": m.row, "col": m.col }),
            None => serde_json::json!({}),
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach engine");
                ServiceError::unavailable(format!("move failed: {e}"))
            })?;
        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST {
            let detail = response.text().await.unwrap_or_default();
            warn!(detail = %detail, "Engine rejected move");
            return Err(ServiceError::invalid_move(if detail.is_empty() {
                "engine rejected the move".to_string()
            } else {
                detail
            }));
        }
        if !status.is_success() {
            return Err(ServiceError::unavailable(format!("move returned {status}")));
        }
        let wire: GameStateWire = Self::read_json(response).await?;
        wire.into_session(id.to_string())
    }

    #[instrument(skip(self), fields(game_id = %id, agent = %agent))]
    async fn request_ai_move(
        &self,
        id: &str,
        agent: AgentKind,
        time_budget: f64,
    ) -> Result<AiMove, ServiceError> {
        info!(time_budget, "Requesting AI move");
        let url = format!("{}/api/v1/game/{}/ai_move", self.base_url, id);
        let response = self
            .client
            .post(&url)
            .query(&[
                ("agent", agent.to_string()),
                ("time", time_budget.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach engine");
                ServiceError::unavailable(format!("ai_move failed: {e}"))
            })?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "AI endpoint returned failure");
            return Err(ServiceError::ai_move_failed(format!(
                "engine returned {status}"
            )));
        }
        let wire: GameStateWire = Self::read_json(response).await?;
        let placed = wire.placed.map(|[r, c]| Move::new(r, c));
        if let Some(score) = wire.eval_score {
            debug!(eval_score = score, "Engine evaluation");
        }
        let session = wire.into_session(id.to_string())?;
        Ok(AiMove { session, placed })
    }

    #[instrument(skip(self), fields(game_id = %id))]
    async fn fetch_state(&self, id: &str) -> Result<Session, ServiceError> {
        debug!("Fetching game state");
        let url = format!("{}/api/v1/game/{}/state", self.base_url, id);
        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = %e, "Failed to reach engine");
            ServiceError::unavailable(format!("state fetch failed: {e}"))
        })?;
        if !response.status().is_success() {
            return Err(ServiceError::unavailable(format!(
                "state returned {}",
                response.status()
            )));
        }
        let wire: GameStateWire = Self::read_json(response).await?;
        wire.into_session(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Winner;

    fn opening_payload() -> &'static str {
        r#"{
            "game_id": "g1",
            "board": [
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,-1,1,0,0,0],
                [0,0,0,1,-1,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0]
            ],
            "to_move": 1,
            "legal_moves": [[2,3],[3,2],[4,5],[5,4]],
            "pieces": {"black": 2, "white": 2}
        }"#
    }

    #[test]
    fn decodes_standard_opening() {
        let wire: GameStateWire = serde_json::from_str(opening_payload()).expect("valid payload");
        let session = wire.into_session("g1".to_string()).expect("decodes");
        assert_eq!(*session.to_move(), Side::Black);
        assert_eq!(session.legal_moves().len(), 4);
        assert!(session.is_legal(Move::new(2, 3)));
        assert_eq!(*session.pieces(), PieceCount::new(2, 2));
        assert!(session.outcome().is_none());
        assert_eq!(session.board().get(3, 3), Some(Cell::Occupied(Side::White)));
        assert_eq!(session.board().get(3, 4), Some(Cell::Occupied(Side::Black)));
    }

    #[test]
    fn rejects_non_square_board() {
        let payload = r#"{"board": [[0,1],[0,1],[0,1]], "to_move": 1}"#;
        let wire: GameStateWire = serde_json::from_str(payload).expect("valid json");
        let err = wire.into_session("g1".to_string()).unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable { .. }));
    }

    #[test]
    fn rejects_unknown_cell_encoding() {
        let payload = r#"{"board": [[0,7],[1,0]], "to_move": 1}"#;
        let wire: GameStateWire = serde_json::from_str(payload).expect("valid json");
        let err = wire.into_session("g1".to_string()).unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable { .. }));
    }

    #[test]
    fn rejects_unknown_side_encoding() {
        let payload = r#"{"board": [[0,1],[1,0]], "to_move": 2}"#;
        let wire: GameStateWire = serde_json::from_str(payload).expect("valid json");
        let err = wire.into_session("g1".to_string()).unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable { .. }));
    }

    #[test]
    fn ai_pass_omits_move() {
        let payload = r#"{
            "board": [[0,1],[1,-1]],
            "to_move": 1,
            "legal_moves": [],
            "pieces": {"black": 2, "white": 1},
            "move": null,
            "eval_score": 0.0
        }"#;
        let wire: GameStateWire = serde_json::from_str(payload).expect("valid json");
        assert!(wire.placed.is_none());
        let session = wire.into_session("g1".to_string()).expect("decodes");
        assert!(session.must_pass());
    }

    #[test]
    fn derives_outcome_for_full_board() {
        // 2x2 board, three black discs to one white.
        let payload = r#"{
            "board": [[1,1],[1,-1]],
            "to_move": -1,
            "legal_moves": [],
            "pieces": {"black": 3, "white": 1}
        }"#;
        let wire: GameStateWire = serde_json::from_str(payload).expect("valid json");
        let session = wire.into_session("g1".to_string()).expect("decodes");
        let outcome = session
            .outcome()
            .as_ref()
            .expect("full board yields an outcome");
        assert_eq!(outcome.winner, Winner::Black);
        assert_eq!((outcome.black, outcome.white), (3, 1));
    }

    #[test]
    fn counts_pieces_when_tally_missing() {
        let payload = r#"{"board": [[1,-1],[0,1]], "to_move": 1}"#;
        let wire: GameStateWire = serde_json::from_str(payload).expect("valid json");
        let session = wire.into_session("g1".to_string()).expect("decodes");
        assert_eq!(*session.pieces(), PieceCount::new(2, 1));
    }
}
