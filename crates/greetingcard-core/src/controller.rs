//! Interaction controller
//!
//! Owns the page's transient state (playback flags, modal, selected track)
//! and exposes one transition function per user action. All inputs arrive
//! through [`Controller::dispatch`] in event order; nothing here blocks or
//! awaits.
//!
//! ## Telling a user pause from a modal pause
//!
//! Opening a video sets `was_playing_before_modal` *before* pausing the
//! background audio. The `pause` event that follows reads that flag: if it is
//! set, the pause came from the modal; otherwise the user paused, and every
//! automatic resume is suppressed until the user plays again.

use crate::card::MessageItem;
use crate::error::PlaybackError;
use crate::events::{ClickTarget, CloseReason, PageEvent, ESCAPE_KEY};
use crate::media::{MediaElement, PlayRequest};
use crate::modal::{ModalBody, ModalState};

/// Read-only copy of what the page should currently render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Body of the open modal, `None` while closed
    pub modal: Option<ModalBody>,
    /// Source loaded into the background audio element
    pub current_track: String,
    pub is_user_paused: bool,
    pub music_started: bool,
}

/// The page's interaction controller.
///
/// Generic over the background audio element `A` and the modal's video
/// element `V`.
pub struct Controller<A, V> {
    audio: A,
    video: V,
    modal: ModalState,
    current_track: String,
    is_user_paused: bool,
    music_started: bool,
    was_playing_before_modal: bool,
    first_interaction_armed: bool,
}

impl<A: MediaElement, V: MediaElement> Controller<A, V> {
    /// Create a controller for a page whose audio element starts on `initial_track`.
    pub fn new(audio: A, video: V, initial_track: impl Into<String>) -> Self {
        Self {
            audio,
            video,
            modal: ModalState::new(),
            current_track: initial_track.into(),
            is_user_paused: false,
            music_started: false,
            was_playing_before_modal: false,
            first_interaction_armed: true,
        }
    }

    /// Route an event to its transition.
    pub fn dispatch(&mut self, event: PageEvent) {
        tracing::trace!(event = event.name(), "Dispatching page event");
        match event {
            PageEvent::Loaded => self.start_music(),
            PageEvent::Click(target) => self.click(target),
            PageEvent::KeyDown { key } => self.key_down(&key),
            PageEvent::TrackSelected { src } => self.select_track(src),
            PageEvent::AudioPlayed => self.on_audio_play(),
            PageEvent::AudioPaused => self.on_audio_pause(),
            PageEvent::PlaySettled { request, outcome } => self.on_play_settled(request, outcome),
        }
    }

    /// Try autoplay once on page load.
    pub fn start_music(&mut self) {
        if !self.music_started {
            tracing::debug!("Attempting autoplay");
            self.audio.play(PlayRequest::Autoplay);
        }
    }

    /// Handle a click, in DOM bubbling order: the target's own handler, then
    /// the document-level first-interaction fallback, then the window-level
    /// backdrop check.
    pub fn click(&mut self, target: ClickTarget) {
        match &target {
            ClickTarget::MessageItem(item) => self.open_item(item),
            ClickTarget::CloseButton => self.close_modal(CloseReason::CloseButton),
            ClickTarget::Backdrop | ClickTarget::Elsewhere => {}
        }

        self.first_interaction();

        if target == ClickTarget::Backdrop {
            self.close_modal(CloseReason::Backdrop);
        }
    }

    /// Escape closes the modal; other keys are ignored.
    pub fn key_down(&mut self, key: &str) {
        if key == ESCAPE_KEY {
            self.close_modal(CloseReason::Escape);
        }
    }

    /// Fallback for blocked autoplay: start music on the first click.
    fn first_interaction(&mut self) {
        if self.first_interaction_armed && !self.music_started && self.audio.is_paused() {
            tracing::debug!("Starting music on first interaction");
            self.audio.play(PlayRequest::FirstInteraction);
        }
    }

    /// Swap the background track.
    ///
    /// Resumes on the new source only if the old one was playing and the
    /// user had not paused it. Selecting a song counts as intent to play, so
    /// the user-paused flag is always cleared afterwards.
    pub fn select_track(&mut self, src: impl Into<String>) {
        let src = src.into();
        let was_playing = !self.audio.is_paused();

        self.audio.load(&src);
        tracing::info!(track = %src, was_playing, "Selected track");
        self.current_track = src;

        if was_playing && !self.is_user_paused {
            self.audio.play(PlayRequest::TrackChange);
        }

        self.is_user_paused = false;
    }

    /// The audio element fired `pause`.
    pub fn on_audio_pause(&mut self) {
        if !self.was_playing_before_modal {
            tracing::debug!("Background audio paused by user");
            self.is_user_paused = true;
        }
    }

    /// The audio element fired `play`.
    pub fn on_audio_play(&mut self) {
        self.is_user_paused = false;
        self.music_started = true;
    }

    /// Open the modal for a clicked message item.
    ///
    /// An item with no message, image, or video leaves the page untouched.
    pub fn open_item(&mut self, item: &MessageItem) {
        let Some(body) = ModalBody::from_item(item) else {
            tracing::debug!(label = %item.label, "Message item has no content");
            return;
        };

        // A video dropped from the modal body stops with it
        if self.modal.holds_video() {
            self.video.pause();
        }

        tracing::debug!(label = %item.label, kind = body.kind(), "Opening modal");

        if !body.is_video() {
            // Text and image messages leave the music alone
            self.modal.open(body);
            return;
        }

        if !self.audio.is_paused() {
            self.was_playing_before_modal = true;
            self.audio.pause();
        } else {
            self.was_playing_before_modal = false;
        }

        if let ModalBody::Video { src } = &body {
            self.video.load(src);
        }
        self.modal.open(body);
        self.video.play(PlayRequest::ModalVideo);
    }

    /// Hide the modal and run the resume procedure.
    pub fn close_modal(&mut self, reason: CloseReason) {
        if self.modal.is_open() {
            tracing::debug!(reason = reason.as_str(), "Closing modal");
        }
        self.modal.close();
        self.resume_audio();
    }

    /// Stop the modal video and resume background audio unless the user
    /// paused it.
    fn resume_audio(&mut self) {
        if self.modal.holds_video() {
            self.video.pause();
        }

        self.was_playing_before_modal = false;

        if self.audio.is_paused() && !self.is_user_paused {
            self.audio.play(PlayRequest::ModalResume);
        }
    }

    /// Apply the outcome of an earlier play request.
    ///
    /// Failures are never fatal: they are logged and the page carries on.
    pub fn on_play_settled(&mut self, request: PlayRequest, outcome: Result<(), PlaybackError>) {
        match (request, outcome) {
            (PlayRequest::Autoplay, Ok(())) => {
                tracing::info!("Background music autoplaying");
                self.music_started = true;
            }
            (PlayRequest::FirstInteraction, Ok(())) => {
                tracing::info!("Background music started on first interaction");
                self.music_started = true;
                self.first_interaction_armed = false;
            }
            (_, Ok(())) => {
                tracing::debug!(request = %request, "Playback started");
            }
            (PlayRequest::Autoplay | PlayRequest::FirstInteraction, Err(e)) => {
                tracing::debug!(request = %request, error = %e, "Autoplay blocked");
            }
            (PlayRequest::ModalVideo, Err(e)) => {
                tracing::debug!(error = %e, "Modal video autoplay blocked");
            }
            (PlayRequest::TrackChange | PlayRequest::ModalResume, Err(e)) => {
                if failure_expected(request, &e) {
                    tracing::debug!(request = %request, error = %e, "Playback blocked until user gesture");
                } else if request == PlayRequest::TrackChange {
                    tracing::warn!(error = %e, "Could not play new song source");
                } else {
                    tracing::warn!(error = %e, "Could not resume background music");
                }
            }
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            modal: self.modal.body().cloned(),
            current_track: self.current_track.clone(),
            is_user_paused: self.is_user_paused,
            music_started: self.music_started,
        }
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn current_track(&self) -> &str {
        &self.current_track
    }

    pub fn is_user_paused(&self) -> bool {
        self.is_user_paused
    }

    pub fn music_started(&self) -> bool {
        self.music_started
    }

    pub fn was_playing_before_modal(&self) -> bool {
        self.was_playing_before_modal
    }

    /// Whether the first-click fallback is still listening
    pub fn first_interaction_armed(&self) -> bool {
        self.first_interaction_armed
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn video(&self) -> &V {
        &self.video
    }

    pub fn video_mut(&mut self) -> &mut V {
        &mut self.video
    }
}

/// Whether a rejected play is routine (logged at debug) rather than worth a
/// warning. Autoplay-style requests are expected to be blocked; resumes only
/// when the autoplay policy is the reason.
fn failure_expected(request: PlayRequest, error: &PlaybackError) -> bool {
    match request {
        PlayRequest::Autoplay | PlayRequest::FirstInteraction | PlayRequest::ModalVideo => true,
        PlayRequest::TrackChange | PlayRequest::ModalResume => error.is_autoplay_block(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal media element recording calls; events are delivered by hand.
    #[derive(Debug, Default)]
    struct Recorder {
        paused: bool,
        plays: Vec<PlayRequest>,
        pauses: usize,
        loads: Vec<String>,
    }

    impl Recorder {
        fn paused() -> Self {
            Self { paused: true, ..Default::default() }
        }

        fn playing() -> Self {
            Self { paused: false, ..Default::default() }
        }
    }

    impl MediaElement for Recorder {
        fn is_paused(&self) -> bool {
            self.paused
        }

        fn play(&mut self, request: PlayRequest) {
            self.plays.push(request);
            self.paused = false;
        }

        fn pause(&mut self) {
            self.pauses += 1;
            self.paused = true;
        }

        fn load(&mut self, src: &str) {
            self.loads.push(src.to_string());
            self.paused = true;
        }
    }

    fn controller(audio: Recorder) -> Controller<Recorder, Recorder> {
        Controller::new(audio, Recorder::paused(), "a.mp3")
    }

    #[test]
    fn initial_state() {
        let c = controller(Recorder::paused());
        assert!(!c.is_user_paused());
        assert!(!c.music_started());
        assert!(!c.was_playing_before_modal());
        assert!(c.first_interaction_armed());
        assert!(!c.modal().is_open());
        assert_eq!(c.current_track(), "a.mp3");
    }

    #[test]
    fn autoplay_success_marks_music_started() {
        let mut c = controller(Recorder::paused());
        c.dispatch(PageEvent::Loaded);
        assert_eq!(c.audio().plays, vec![PlayRequest::Autoplay]);

        c.on_play_settled(PlayRequest::Autoplay, Ok(()));
        assert!(c.music_started());

        // A second load event does not retry once music has started
        c.start_music();
        assert_eq!(c.audio().plays.len(), 1);
    }

    #[test]
    fn pause_event_is_user_pause_unless_modal_flag_set() {
        let mut c = controller(Recorder::playing());
        c.on_audio_pause();
        assert!(c.is_user_paused());

        c.on_audio_play();
        assert!(!c.is_user_paused());
        assert!(c.music_started());
    }

    #[test]
    fn video_open_sets_flag_before_pausing() {
        let mut c = controller(Recorder::playing());
        c.open_item(&MessageItem::video_message("v", "v.mp4"));

        assert!(c.was_playing_before_modal());
        assert_eq!(c.audio().pauses, 1);
        assert_eq!(c.video().loads, vec!["v.mp4".to_string()]);
        assert_eq!(c.video().plays, vec![PlayRequest::ModalVideo]);

        // The pause event that follows is attributed to the modal
        c.on_audio_pause();
        assert!(!c.is_user_paused());
    }

    #[test]
    fn video_open_with_paused_audio_records_false() {
        let mut c = controller(Recorder::paused());
        c.open_item(&MessageItem::video_message("v", "v.mp4"));
        assert!(!c.was_playing_before_modal());
        assert_eq!(c.audio().pauses, 0);
    }

    #[test]
    fn close_resets_flag_and_pauses_video() {
        let mut c = controller(Recorder::playing());
        c.open_item(&MessageItem::video_message("v", "v.mp4"));
        c.close_modal(CloseReason::CloseButton);

        assert!(!c.was_playing_before_modal());
        assert_eq!(c.video().pauses, 1);
        assert_eq!(c.audio().plays, vec![PlayRequest::ModalResume]);
        assert!(!c.modal().is_open());
    }

    #[test]
    fn opening_text_over_video_stops_the_video() {
        let mut c = controller(Recorder::paused());
        c.open_item(&MessageItem::video_message("v", "v.mp4"));
        c.open_item(&MessageItem::text_message("t", "hi"));
        assert_eq!(c.video().pauses, 1);
        assert_eq!(c.modal().body().map(ModalBody::kind), Some("text"));
    }

    #[test]
    fn empty_item_leaves_modal_alone() {
        let mut c = controller(Recorder::paused());
        c.open_item(&MessageItem::text_message("t", "hi"));
        c.open_item(&MessageItem::default());
        assert_eq!(
            c.modal().body(),
            Some(&ModalBody::Text { message: "hi".to_string() })
        );
    }

    #[test]
    fn non_escape_keys_are_ignored() {
        let mut c = controller(Recorder::paused());
        c.open_item(&MessageItem::text_message("t", "hi"));
        c.dispatch(PageEvent::key("Enter"));
        assert!(c.modal().is_open());
        c.dispatch(PageEvent::key(ESCAPE_KEY));
        assert!(!c.modal().is_open());
    }

    #[test]
    fn track_change_while_playing_resumes() {
        let mut c = controller(Recorder::playing());
        c.dispatch(PageEvent::track("b.mp3"));
        assert_eq!(c.audio().loads, vec!["b.mp3".to_string()]);
        assert_eq!(c.audio().plays, vec![PlayRequest::TrackChange]);
        assert_eq!(c.current_track(), "b.mp3");
    }

    #[test]
    fn track_change_while_paused_stays_paused_and_clears_flag() {
        let mut c = controller(Recorder::playing());
        c.audio_mut().pause();
        c.on_audio_pause();
        assert!(c.is_user_paused());

        c.select_track("b.mp3");
        assert!(c.audio().plays.is_empty());
        assert!(!c.is_user_paused());
    }

    #[test]
    fn first_interaction_success_disarms_fallback() {
        let mut c = controller(Recorder::paused());
        c.click(ClickTarget::Elsewhere);
        assert_eq!(c.audio().plays, vec![PlayRequest::FirstInteraction]);
        c.on_play_settled(PlayRequest::FirstInteraction, Ok(()));
        assert!(!c.first_interaction_armed());
        assert!(c.music_started());
    }

    #[test]
    fn first_interaction_failure_stays_armed() {
        let mut c = controller(Recorder::paused());
        c.click(ClickTarget::Elsewhere);
        c.audio_mut().paused = true;
        c.on_play_settled(
            PlayRequest::FirstInteraction,
            Err(PlaybackError::NotAllowed("no gesture".to_string())),
        );
        assert!(c.first_interaction_armed());
        assert!(!c.music_started());
    }

    #[test]
    fn playback_failures_are_not_fatal() {
        let mut c = controller(Recorder::paused());
        for request in [
            PlayRequest::Autoplay,
            PlayRequest::TrackChange,
            PlayRequest::ModalResume,
            PlayRequest::ModalVideo,
        ] {
            c.on_play_settled(request, Err(PlaybackError::Other("boom".to_string())));
        }
        assert!(!c.music_started());
        assert!(!c.is_user_paused());
    }

    #[test]
    fn autoplay_blocks_on_resume_are_routine() {
        let blocked = PlaybackError::NotAllowed("no gesture".to_string());
        let decode = PlaybackError::Unsupported("bad codec".to_string());

        assert!(failure_expected(PlayRequest::Autoplay, &decode));
        assert!(failure_expected(PlayRequest::ModalVideo, &decode));
        assert!(failure_expected(PlayRequest::ModalResume, &blocked));
        assert!(failure_expected(PlayRequest::TrackChange, &blocked));
        assert!(!failure_expected(PlayRequest::ModalResume, &decode));
        assert!(!failure_expected(PlayRequest::TrackChange, &decode));

        // Neither kind of failure changes state
        let mut c = controller(Recorder::paused());
        c.on_play_settled(PlayRequest::ModalResume, Err(blocked));
        c.on_play_settled(PlayRequest::TrackChange, Err(decode));
        assert!(!c.music_started());
        assert!(c.first_interaction_armed());
    }

    #[test]
    fn snapshot_reflects_open_modal() {
        let mut c = controller(Recorder::paused());
        c.open_item(&MessageItem::image_message("i", "i.jpg", None));
        let snap = c.snapshot();
        assert_eq!(
            snap.modal,
            Some(ModalBody::Image { src: "i.jpg".to_string(), caption: None })
        );
        assert_eq!(snap.current_track, "a.mp3");
    }
}
