//! Page components for the greeting card.
//!
//! These read the page context; the presentational pieces they compose live
//! in `greetingcard-ui`.

mod message_modal;
mod message_wall;
mod music_player;

pub use message_modal::MessageModal;
pub use message_wall::MessageWall;
pub use music_player::MusicPlayer;
