//! Error types for the greeting card

use thiserror::Error;

/// Why a media element refused to start playing.
///
/// Every variant is non-fatal: the page stays usable with the element paused
/// until a later user gesture succeeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The autoplay policy rejected a play request without a user gesture
    #[error("Playback not allowed: {0}")]
    NotAllowed(String),

    /// The source could not be decoded or is of an unsupported type
    #[error("Unsupported source: {0}")]
    Unsupported(String),

    /// The play request was interrupted by a pause or a reload
    #[error("Playback aborted: {0}")]
    Aborted(String),

    /// Anything else reported by the media element
    #[error("Playback failed: {0}")]
    Other(String),
}

impl PlaybackError {
    /// Classify a DOMException `name` reported by the webview.
    ///
    /// ```
    /// use greetingcard_core::PlaybackError;
    ///
    /// let err = PlaybackError::from_dom_exception("NotAllowedError", "user didn't interact");
    /// assert!(matches!(err, PlaybackError::NotAllowed(_)));
    /// ```
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        let message = message.to_string();
        match name {
            "NotAllowedError" => PlaybackError::NotAllowed(message),
            "NotSupportedError" => PlaybackError::Unsupported(message),
            "AbortError" => PlaybackError::Aborted(message),
            _ if message.is_empty() => PlaybackError::Other(name.to_string()),
            _ => PlaybackError::Other(format!("{}: {}", name, message)),
        }
    }

    /// True when the rejection came from the autoplay policy.
    pub fn is_autoplay_block(&self) -> bool {
        matches!(self, PlaybackError::NotAllowed(_))
    }
}

/// Errors raised while loading a card definition
#[derive(Error, Debug)]
pub enum CardError {
    /// The definition file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The definition is not valid JSON for a card
    #[error("Invalid card definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A card needs at least one background track
    #[error("Card has no tracks")]
    NoTracks,
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
