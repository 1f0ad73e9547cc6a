//! Media element abstraction
//!
//! The controller never talks to a concrete `<audio>` or `<video>` element.
//! It drives anything implementing [`MediaElement`], which lets the desktop
//! app plug in a webview-backed element and lets tests plug in a fake.

use std::fmt;

/// Why the controller asked a media element to start playing.
///
/// The tag travels with the asynchronous play request and comes back in
/// [`crate::PageEvent::PlaySettled`], so the controller knows which
/// bookkeeping to apply when the outcome arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayRequest {
    /// Autoplay attempt made once on page load
    Autoplay,
    /// Fallback attempt made on the first click anywhere on the page
    FirstInteraction,
    /// Resume on a newly selected track
    TrackChange,
    /// Resume of background audio after the modal closed
    ModalResume,
    /// Autoplay of the video shown inside the modal
    ModalVideo,
}

impl PlayRequest {
    /// True for requests issued against the background audio element.
    pub fn targets_audio(&self) -> bool {
        !matches!(self, PlayRequest::ModalVideo)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayRequest::Autoplay => "autoplay",
            PlayRequest::FirstInteraction => "first-interaction",
            PlayRequest::TrackChange => "track-change",
            PlayRequest::ModalResume => "modal-resume",
            PlayRequest::ModalVideo => "modal-video",
        }
    }
}

impl fmt::Display for PlayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A playable media element.
///
/// `play` is fire-and-forget: implementations start the request and report
/// its outcome later by dispatching `PageEvent::PlaySettled` with the same
/// [`PlayRequest`]. `pause` and `load` take effect immediately, and both
/// implicitly invalidate any play request still in flight.
pub trait MediaElement {
    /// Whether the element is currently paused.
    fn is_paused(&self) -> bool;

    /// Request playback.
    fn play(&mut self, request: PlayRequest);

    /// Pause playback. Pausing a paused element is a no-op.
    fn pause(&mut self);

    /// Replace the source and reload the element. A reloaded element is paused.
    fn load(&mut self, src: &str);
}

impl<M: MediaElement + ?Sized> MediaElement for Box<M> {
    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn play(&mut self, request: PlayRequest) {
        (**self).play(request)
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn load(&mut self, src: &str) {
        (**self).load(src)
    }
}
