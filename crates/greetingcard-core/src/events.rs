//! Page events
//!
//! Every input the page reacts to, as a single enum. The desktop app turns
//! DOM events into these and feeds them to [`crate::Controller::dispatch`]
//! one at a time, in arrival order.

use crate::card::MessageItem;
use crate::error::PlaybackError;
use crate::media::PlayRequest;

/// Key name the modal closes on (DOM `KeyboardEvent.key`)
pub const ESCAPE_KEY: &str = "Escape";

/// What a click landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A message tile
    MessageItem(MessageItem),
    /// The modal's close button
    CloseButton,
    /// The dimmed overlay around the modal box
    Backdrop,
    /// Anything else, including the inside of the modal box
    Elsewhere,
}

/// Why the modal was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseReason::CloseButton => "close-button",
            CloseReason::Backdrop => "backdrop",
            CloseReason::Escape => "escape",
        }
    }
}

/// An input event delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading
    Loaded,
    /// A click somewhere on the page
    Click(ClickTarget),
    /// A key press anywhere on the page
    KeyDown { key: String },
    /// The song selector changed to a new source
    TrackSelected { src: String },
    /// The background audio element fired `play`
    AudioPlayed,
    /// The background audio element fired `pause`
    AudioPaused,
    /// An earlier play request finished
    PlaySettled {
        request: PlayRequest,
        outcome: Result<(), PlaybackError>,
    },
}

impl PageEvent {
    pub fn key(key: impl Into<String>) -> Self {
        PageEvent::KeyDown { key: key.into() }
    }

    pub fn track(src: impl Into<String>) -> Self {
        PageEvent::TrackSelected { src: src.into() }
    }

    pub fn item(item: MessageItem) -> Self {
        PageEvent::Click(ClickTarget::MessageItem(item))
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Loaded => "loaded",
            PageEvent::Click(_) => "click",
            PageEvent::KeyDown { .. } => "keydown",
            PageEvent::TrackSelected { .. } => "track-selected",
            PageEvent::AudioPlayed => "audio-play",
            PageEvent::AudioPaused => "audio-pause",
            PageEvent::PlaySettled { .. } => "play-settled",
        }
    }
}
