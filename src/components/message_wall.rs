//! Message Wall
//!
//! Grid of message tiles in card order.

use dioxus::prelude::*;
use greetingcard_core::{MessageItem, PageEvent};
use greetingcard_ui::MessageTile;

use crate::context::{use_card, use_page_events};

#[component]
pub fn MessageWall() -> Element {
    let card = use_card();
    let events = use_page_events();

    if card.messages.is_empty() {
        return rsx! {
            p { class: "message-wall-empty", "No messages yet." }
        };
    }

    rsx! {
        div { class: "message-container",
            for (index, item) in card.messages.iter().cloned().enumerate() {
                MessageTile {
                    key: "{index}",
                    item,
                    on_open: move |item: MessageItem| events.send(PageEvent::item(item)),
                }
            }
        }
    }
}
