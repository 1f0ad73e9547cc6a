//! Message Modal Component
//!
//! The one modal on the page. The overlay stays in the DOM and is toggled
//! between `display: none` and `display: block`.

use dioxus::prelude::*;
use greetingcard_core::{ClickTarget, PageEvent};
use greetingcard_ui::{CloseButton, ModalBodyView};

use crate::context::{use_page_events, use_snapshot};

/// Message Modal
///
/// Clicks are tagged by where they landed: the dimmed overlay is the
/// backdrop, anything inside the box is an ordinary page click.
#[component]
pub fn MessageModal() -> Element {
    let events = use_page_events();
    let snapshot = use_snapshot();
    let body = snapshot.read().modal.clone();
    let display = if body.is_some() { "block" } else { "none" };

    rsx! {
        div {
            id: "message-modal",
            class: "modal",
            style: "display: {display};",
            onclick: move |evt| {
                evt.stop_propagation();
                events.send(PageEvent::Click(ClickTarget::Backdrop));
            },

            div {
                class: "modal-content",
                onclick: move |evt| {
                    evt.stop_propagation();
                    events.send(PageEvent::Click(ClickTarget::Elsewhere));
                },

                CloseButton {
                    onclick: move |_| events.send(PageEvent::Click(ClickTarget::CloseButton)),
                }

                if let Some(body) = body {
                    ModalBodyView { body }
                }
            }
        }
    }
}
