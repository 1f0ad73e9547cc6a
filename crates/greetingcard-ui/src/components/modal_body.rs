//! Modal Body and Rich Text
//!
//! Renders the one piece of content the modal shows: a video player, an
//! image with optional caption, or a rich-text message.

use dioxus::prelude::*;
use greetingcard_core::{ModalBody, IMAGE_ALT_TEXT, VIDEO_MIME_TYPE};
use pulldown_cmark::{html, Options, Parser};

/// DOM id of the video element inside the modal
pub const MODAL_VIDEO_ID: &str = "modal-video";

/// Convert a rich-text message to HTML.
///
/// Messages are markdown; inline HTML passes through untouched so card
/// authors can keep writing `<br>` or `<b>` by hand.
pub fn render_rich_text(message: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(message, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders the modal body
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(body) = snapshot().modal {
///         ModalBodyView { body }
///     }
/// }
/// ```
#[component]
pub fn ModalBodyView(
    /// Content to show
    body: ModalBody,
) -> Element {
    match body {
        ModalBody::Video { src } => rsx! {
            div { id: "modal-text", class: "modal-body modal-body--video",
                video {
                    id: MODAL_VIDEO_ID,
                    class: "modal-video",
                    controls: true,
                    autoplay: true,
                    source { src: "{src}", r#type: VIDEO_MIME_TYPE }
                }
            }
        },
        ModalBody::Image { src, caption } => {
            let caption_html = caption.as_deref().map(render_rich_text);
            rsx! {
                div { id: "modal-text", class: "modal-body modal-body--image",
                    img { class: "modal-image", src: "{src}", alt: IMAGE_ALT_TEXT }
                    if let Some(caption_html) = caption_html {
                        div {
                            class: "modal-caption card-markdown",
                            dangerous_inner_html: "{caption_html}",
                        }
                    }
                }
            }
        }
        ModalBody::Text { message } => {
            let message_html = render_rich_text(&message);
            rsx! {
                div {
                    id: "modal-text",
                    class: "modal-body modal-body--text card-markdown",
                    dangerous_inner_html: "{message_html}",
                }
            }
        }
    }
}
