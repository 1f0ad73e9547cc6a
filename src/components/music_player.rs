//! Music Player
//!
//! The background `<audio>` element, the song selector and the status label.

use dioxus::prelude::*;
use greetingcard_core::PageEvent;
use greetingcard_ui::{track_title, MusicState, MusicStatus, SongSelect};

use crate::context::{use_card, use_page_events, use_snapshot};
use crate::media::AUDIO_ID;

#[component]
pub fn MusicPlayer() -> Element {
    let card = use_card();
    let events = use_page_events();
    let snapshot = use_snapshot();

    let initial_src = card.initial_track().to_string();
    let current = snapshot.read().current_track.clone();
    let now_playing = track_title(&card.tracks, &current).unwrap_or("custom track").to_string();
    let state = {
        let snap = snapshot.read();
        MusicState::from_flags(snap.music_started, snap.is_user_paused)
    };

    rsx! {
        div { class: "music-player",
            // The source is swapped in place on track change; the element
            // itself is never re-created
            audio {
                id: AUDIO_ID,
                class: "birthday-song",
                controls: true,
                r#loop: true,
                preload: "auto",
                onplay: move |_| events.send(PageEvent::AudioPlayed),
                onpause: move |_| events.send(PageEvent::AudioPaused),
                source { src: "{initial_src}", r#type: "audio/mpeg" }
            }
            div { class: "music-player-row",
                SongSelect {
                    tracks: card.tracks.clone(),
                    selected: current,
                    on_select: move |src: String| events.send(PageEvent::track(src)),
                }
                MusicStatus { state }
            }
            p { class: "now-playing", "\u{266A} {now_playing}" }
        }
    }
}
