pub type LunaResult<T> = Result<T, LunaError>;

#[derive(thiserror::Error, Debug)]
pub enum LunaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[error("playback error: {0}")]
    Playback(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LunaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True when a host refused to start playback (autoplay policy and the like).
    pub fn is_playback_rejection(&self) -> bool {
        matches!(self, Self::Playback(_))
    }
}

impl From<serde_json::Error> for LunaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
