//! Message modal state

use crate::card::MessageItem;

/// MIME type given to the modal video's source
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// Alt text given to image messages
pub const IMAGE_ALT_TEXT: &str = "A special memory";

/// Content of the modal body. Exactly one variant is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    /// Rich-text message
    Text { message: String },
    /// Image with an optional caption below it
    Image { src: String, caption: Option<String> },
    /// Video player with controls, autoplay attempted
    Video { src: String },
}

impl ModalBody {
    /// Pick the body for a clicked item.
    ///
    /// Precedence is video, then image, then text. An item with none of the
    /// three attributes yields `None` and must not open the modal.
    pub fn from_item(item: &MessageItem) -> Option<Self> {
        if let Some(src) = item.video() {
            Some(ModalBody::Video { src: src.to_string() })
        } else if let Some(src) = item.image() {
            Some(ModalBody::Image {
                src: src.to_string(),
                caption: item.message().map(str::to_string),
            })
        } else {
            item.message().map(|message| ModalBody::Text {
                message: message.to_string(),
            })
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, ModalBody::Video { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModalBody::Text { .. } => "text",
            ModalBody::Image { .. } => "image",
            ModalBody::Video { .. } => "video",
        }
    }
}

/// Visibility plus body of the single modal on the page.
///
/// The body is kept after closing, matching a hidden DOM node that still
/// holds its last content; the next open replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
    body: Option<ModalBody>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Body of the open modal, `None` while closed
    pub fn body(&self) -> Option<&ModalBody> {
        if self.visible {
            self.body.as_ref()
        } else {
            None
        }
    }

    /// True while the open modal shows a video
    pub fn shows_video(&self) -> bool {
        self.body().is_some_and(ModalBody::is_video)
    }

    /// True when the modal node holds a video element, visible or not
    pub fn holds_video(&self) -> bool {
        self.body.as_ref().is_some_and(ModalBody::is_video)
    }

    /// Discard the previous body and show `body`
    pub fn open(&mut self, body: ModalBody) {
        self.body = Some(body);
        self.visible = true;
    }

    /// Hide the modal. Idempotent.
    pub fn close(&mut self) {
        self.visible = false;
    }
}
