//! Song Select Component
//!
//! Dropdown of background tracks. The selected value is the track's source
//! URL, so a change event carries exactly what the audio element loads next.

use dioxus::prelude::*;
use greetingcard_core::Track;

/// Properties for the SongSelect component
#[derive(Clone, PartialEq, Props)]
pub struct SongSelectProps {
    /// Available tracks, in menu order
    pub tracks: Vec<Track>,
    /// Source of the currently loaded track
    pub selected: String,
    /// Handler called with the newly selected source
    pub on_select: EventHandler<String>,
}

/// Displays the song selector
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SongSelect {
///         tracks: card.tracks.clone(),
///         selected: snapshot().current_track,
///         on_select: move |src| events.send(PageEvent::track(src))
///     }
/// }
/// ```
#[component]
pub fn SongSelect(props: SongSelectProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div { class: "song-select",
            label {
                class: "song-select-label",
                r#for: "song-select",
                "\u{266B} choose a song"
            }
            select {
                id: "song-select",
                class: "song-select-input",
                onchange: move |e| on_select.call(e.value()),
                for track in props.tracks.iter() {
                    option {
                        key: "{track.src}",
                        value: "{track.src}",
                        selected: track.src == props.selected,
                        "{track.title}"
                    }
                }
            }
        }
    }
}

/// Title of the track whose source is `src`, if it is on the menu
pub fn track_title<'a>(tracks: &'a [Track], src: &str) -> Option<&'a str> {
    tracks
        .iter()
        .find(|t| t.src == src)
        .map(|t| t.title.as_str())
}
