//! Greeting Card Core Library
//!
//! Interaction logic for a greeting-card page: background music with song
//! selection, and a modal that shows text, image, or video messages.
//!
//! ## Overview
//!
//! The page's whole behaviour lives in one [`Controller`]. It owns three
//! playback flags, the modal state, and the selected track, and reacts to
//! [`PageEvent`]s one at a time. Media elements sit behind the
//! [`MediaElement`] trait so the same controller drives a real webview and
//! the fakes used in tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use greetingcard_core::{CardDefinition, Controller, PageEvent};
//!
//! let card = CardDefinition::builtin()?;
//! let mut controller = Controller::new(audio, video, card.initial_track());
//!
//! controller.dispatch(PageEvent::Loaded);
//! controller.dispatch(PageEvent::item(card.messages[0].clone()));
//! controller.dispatch(PageEvent::key("Escape"));
//! ```

pub mod card;
pub mod controller;
pub mod error;
pub mod events;
pub mod media;
pub mod modal;

// Re-exports
pub use card::{CardDefinition, MessageItem, Track};
pub use controller::{Controller, PageSnapshot};
pub use error::{CardError, CardResult, PlaybackError};
pub use events::{ClickTarget, CloseReason, PageEvent, ESCAPE_KEY};
pub use media::{MediaElement, PlayRequest};
pub use modal::{ModalBody, ModalState, IMAGE_ALT_TEXT, VIDEO_MIME_TYPE};
