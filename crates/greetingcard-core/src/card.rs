//! Card definition
//!
//! The page content (title, background tracks, message items) is described
//! by a JSON document. A default card ships inside the binary; a custom one
//! can be loaded from disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// A selectable background track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Label shown in the song selector
    pub title: String,
    /// Audio source URL
    pub src: String,
}

/// A clickable message item.
///
/// Carries up to three optional attributes. Which modal variant opens is
/// decided by [`crate::ModalBody::from_item`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageItem {
    /// Text shown on the tile itself
    #[serde(default)]
    pub label: String,
    /// Rich-text message (markdown, inline HTML allowed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_message: Option<String>,
    /// Video source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_src: Option<String>,
    /// Image source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
}

impl MessageItem {
    /// A text-only item
    pub fn text_message(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            full_message: Some(message.into()),
            ..Default::default()
        }
    }

    /// An image item with an optional caption
    pub fn image_message(label: impl Into<String>, src: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            label: label.into(),
            image_src: Some(src.into()),
            full_message: caption,
            ..Default::default()
        }
    }

    /// A video item
    pub fn video_message(label: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            video_src: Some(src.into()),
            ..Default::default()
        }
    }

    /// The message, treating an empty attribute as absent
    pub fn message(&self) -> Option<&str> {
        present(&self.full_message)
    }

    /// The video source, treating an empty attribute as absent
    pub fn video(&self) -> Option<&str> {
        present(&self.video_src)
    }

    /// The image source, treating an empty attribute as absent
    pub fn image(&self) -> Option<&str> {
        present(&self.image_src)
    }

    /// True for tiles styled as video cards
    pub fn is_video_card(&self) -> bool {
        self.video().is_some()
    }
}

fn present(attr: &Option<String>) -> Option<&str> {
    attr.as_deref().filter(|s| !s.is_empty())
}

/// Everything the page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Heading of the card
    pub title: String,
    /// Optional line under the heading
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Background tracks; the first one is loaded initially
    pub tracks: Vec<Track>,
    /// Message tiles, in display order
    #[serde(default)]
    pub messages: Vec<MessageItem>,
}

const DEFAULT_CARD: &str = include_str!("default_card.json");

impl CardDefinition {
    /// Parse and validate a card from JSON text
    pub fn from_json(json: &str) -> CardResult<Self> {
        let card: CardDefinition = serde_json::from_str(json)?;
        card.validate()?;
        Ok(card)
    }

    /// Read, parse and validate a card from a file
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let card = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            tracks = card.tracks.len(),
            messages = card.messages.len(),
            "Loaded card definition"
        );
        Ok(card)
    }

    /// The card embedded in the binary
    pub fn builtin() -> CardResult<Self> {
        Self::from_json(DEFAULT_CARD)
    }

    /// Source loaded into the audio element on page load
    pub fn initial_track(&self) -> &str {
        // validate() guarantees at least one track
        self.tracks.first().map(|t| t.src.as_str()).unwrap_or_default()
    }

    fn validate(&self) -> CardResult<()> {
        if self.tracks.is_empty() {
            return Err(CardError::NoTracks);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_card_is_valid() {
        let card = CardDefinition::builtin().unwrap();
        assert!(!card.tracks.is_empty());
        assert!(!card.messages.is_empty());
        assert_eq!(card.initial_track(), card.tracks[0].src);
    }

    #[test]
    fn empty_attributes_count_as_absent() {
        let item = MessageItem {
            label: "x".to_string(),
            full_message: Some(String::new()),
            video_src: Some(String::new()),
            image_src: None,
        };
        assert_eq!(item.message(), None);
        assert_eq!(item.video(), None);
        assert_eq!(item.image(), None);
        assert!(!item.is_video_card());
    }

    #[test]
    fn rejects_card_without_tracks() {
        let err = CardDefinition::from_json(r#"{"title": "t", "tracks": []}"#).unwrap_err();
        assert!(matches!(err, CardError::NoTracks));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CardDefinition::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CardError::Json(_)));
    }

    #[test]
    fn messages_default_to_empty() {
        let card = CardDefinition::from_json(
            r#"{"title": "t", "tracks": [{"title": "a", "src": "a.mp3"}]}"#,
        )
        .unwrap();
        assert!(card.messages.is_empty());
        assert_eq!(card.subtitle, None);
    }
}
