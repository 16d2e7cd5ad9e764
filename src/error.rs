use thiserror::Error;

/// Errors surfaced by the playback core and its configuration.
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Playlist has no tracks")]
    EmptyPlaylist,

    #[error("Track index {index} is out of range for a playlist of {len}")]
    TrackOutOfRange { index: usize, len: usize },

    #[error("Invalid player configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Playback request rejected: {0}")]
    PlaybackRejected(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
