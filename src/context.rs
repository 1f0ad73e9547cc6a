//! Page context for the greeting card.
//!
//! Provides the card definition and the page event channel to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let card = use_card();
//! let events = use_page_events();
//! events.send(PageEvent::item(card.messages[0].clone()));
//! ```

use dioxus::prelude::*;
use greetingcard_core::{CardDefinition, PageEvent, PageSnapshot};

/// Get the card loaded at startup.
pub fn get_card() -> Option<CardDefinition> {
    crate::get_card()
}

/// Hook to access the card definition from context.
pub fn use_card() -> CardDefinition {
    use_context::<CardDefinition>()
}

/// Hook to access the page event queue.
///
/// Every DOM event the card reacts to goes through this handle, so the
/// controller sees them one at a time in arrival order.
pub fn use_page_events() -> Coroutine<PageEvent> {
    use_coroutine_handle::<PageEvent>()
}

/// Hook to read the latest controller snapshot.
///
/// Returns a reactive signal that updates after every handled event.
pub fn use_snapshot() -> Signal<PageSnapshot> {
    use_context::<Signal<PageSnapshot>>()
}
