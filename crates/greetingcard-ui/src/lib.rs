//! Greeting Card UI Components
//!
//! This crate provides the presentational Dioxus components of the card:
//! message tiles, the song selector, the modal body and its close button.
//! Components hold no playback state of their own; they render what the
//! controller reports and forward clicks through event handlers.
//!
//! ## Look
//!
//! - **Rose (#e85d75)**: Titles, video tiles, the close button
//! - **Cream (#fff8f0)**: Card surface
//! - **Gold (#f2b134)**: Highlights and the playing indicator

pub mod components;

pub use components::*;
