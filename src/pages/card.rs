//! The greeting card page.

use dioxus::prelude::*;
use greetingcard_core::{ClickTarget, PageEvent};

use crate::components::{MessageModal, MessageWall, MusicPlayer};
use crate::context::{use_card, use_page_events};

/// Card Page
///
/// The root element takes focus so Escape reaches the page wherever the
/// pointer is. A click that nothing else handled lands here as a plain
/// page click, which is what the first-interaction music fallback needs.
#[component]
pub fn CardPage() -> Element {
    let card = use_card();
    let events = use_page_events();

    let on_keydown = move |evt: KeyboardEvent| {
        events.send(PageEvent::key(evt.key().to_string()));
    };

    rsx! {
        div {
            class: "card-page",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| events.send(PageEvent::Click(ClickTarget::Elsewhere)),
            onkeydown: on_keydown,

            header { class: "card-header",
                h1 { class: "card-title", "{card.title}" }
                if let Some(subtitle) = &card.subtitle {
                    p { class: "card-subtitle", "{subtitle}" }
                }
            }

            MusicPlayer {}
            MessageWall {}
            MessageModal {}
        }
    }
}
