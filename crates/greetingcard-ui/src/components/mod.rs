//! Reusable card components
//!
//! All components use the celebration palette with:
//! - Playfair Display for titles
//! - Nunito for body text

mod button;
mod message_tile;
mod modal_body;
mod music_status;
mod song_select;

pub use button::*;
pub use message_tile::*;
pub use modal_body::*;
pub use music_status::*;
pub use song_select::*;
