use thiserror::Error;

use crate::api::types::RoomId;

/// Construction-time failures. The per-tick loop itself never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("room {0:?} does not exist")]
    UnknownRoom(RoomId),

    #[error("spawn position ({x}, {y}) is not finite")]
    InvalidPosition { x: f32, y: f32 },

    #[error("no sprite sheet registered under `{0}`")]
    UnknownSheet(String),

    #[error("sprite sheet `{0}` has no frames")]
    EmptySheet(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
