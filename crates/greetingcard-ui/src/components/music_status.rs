//! Music Status Indicator Component
//!
//! Small label next to the song selector:
//! - "music playing" - background track is audible
//! - "music paused" - the user paused it
//! - "tap anywhere for music" - autoplay was blocked and nothing has played yet

use dioxus::prelude::*;

/// What the background music is doing, as far as the card should say
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MusicState {
    /// Audio is playing
    Playing,
    /// The user paused the audio
    Paused,
    /// Nothing has played yet
    #[default]
    Waiting,
}

impl MusicState {
    /// Derive the state from the controller's flags
    pub fn from_flags(music_started: bool, is_user_paused: bool) -> Self {
        match (music_started, is_user_paused) {
            (_, true) => MusicState::Paused,
            (true, false) => MusicState::Playing,
            (false, false) => MusicState::Waiting,
        }
    }

    /// Returns the display label for this state
    pub fn label(&self) -> &'static str {
        match self {
            MusicState::Playing => "music playing",
            MusicState::Paused => "music paused",
            MusicState::Waiting => "tap anywhere for music",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            MusicState::Playing => "music-status playing",
            MusicState::Paused => "music-status paused",
            MusicState::Waiting => "music-status waiting",
        }
    }
}

#[component]
pub fn MusicStatus(state: MusicState) -> Element {
    rsx! {
        span { class: state.class(), "{state.label()}" }
    }
}
