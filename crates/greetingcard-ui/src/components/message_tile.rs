//! Message Tile Component
//!
//! One clickable message on the card. Video messages get the video-card
//! style; everything else renders as a note.

use dioxus::prelude::*;
use greetingcard_core::MessageItem;

/// Properties for the MessageTile component
#[derive(Clone, PartialEq, Props)]
pub struct MessageTileProps {
    /// The message this tile opens
    pub item: MessageItem,
    /// Handler called with the clicked item
    pub on_open: EventHandler<MessageItem>,
}

/// Displays a single message tile
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for item in card.messages.iter().cloned() {
///         MessageTile {
///             item,
///             on_open: move |item| events.send(PageEvent::item(item))
///         }
///     }
/// }
/// ```
#[component]
pub fn MessageTile(props: MessageTileProps) -> Element {
    let class = tile_class(&props.item);
    let icon = tile_icon(&props.item);
    let item = props.item.clone();
    let on_open = props.on_open;

    rsx! {
        div {
            class: "{class}",
            role: "button",
            tabindex: "0",
            onclick: move |evt| {
                evt.stop_propagation();
                on_open.call(item.clone());
            },
            span { class: "tile-icon", "{icon}" }
            span { class: "tile-label", "{props.item.label}" }
        }
    }
}

/// CSS class for a tile
pub fn tile_class(item: &MessageItem) -> &'static str {
    if item.is_video_card() {
        "message-tile video-card"
    } else if item.image().is_some() {
        "message-tile image-card"
    } else {
        "message-tile"
    }
}

fn tile_icon(item: &MessageItem) -> &'static str {
    if item.is_video_card() {
        "\u{25B6}"
    } else if item.image().is_some() {
        "\u{1F4F7}"
    } else {
        "\u{2709}"
    }
}
