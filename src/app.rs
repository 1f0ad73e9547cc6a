use dioxus::prelude::*;
use futures::StreamExt;
use greetingcard_core::{CardDefinition, Controller, PageEvent, PageSnapshot};
use greetingcard_ui::MODAL_VIDEO_ID;

use crate::context::get_card;
use crate::media::{mirror_media_state, WebviewMedia, AUDIO_ID};
use crate::pages::CardPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card, or an error note if none loaded.
#[component]
pub fn App() -> Element {
    let Some(card) = get_card() else {
        return rsx! {
            style { {GLOBAL_STYLES} }
            p { class: "card-missing", "No card definition was loaded." }
        };
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        CardProvider { card }
    }
}

/// Owns the interaction controller.
///
/// All page events go through one coroutine: DOM events sent by components
/// and play outcomes sent back by the media elements are merged into a
/// single stream and handled strictly in order. After each event the
/// controller's snapshot is published for rendering.
#[component]
fn CardProvider(card: CardDefinition) -> Element {
    let initial_track = card.initial_track().to_string();
    let snapshot: Signal<PageSnapshot> = use_signal(|| PageSnapshot {
        modal: None,
        current_track: initial_track.clone(),
        is_user_paused: false,
        music_started: false,
    });

    use_context_provider(|| card.clone());
    use_context_provider(|| snapshot);

    let events = use_coroutine(move |rx: UnboundedReceiver<PageEvent>| {
        let initial_track = initial_track.clone();
        let mut snapshot = snapshot;
        async move {
            let (settled_tx, settled_rx) = futures::channel::mpsc::unbounded();
            let audio = WebviewMedia::new(AUDIO_ID, settled_tx.clone());
            let video = WebviewMedia::new(MODAL_VIDEO_ID, settled_tx);
            let mut controller = Controller::new(audio, video, initial_track);

            let mut incoming = futures::stream::select(rx, settled_rx);
            while let Some(event) = incoming.next().await {
                mirror_media_state(&mut controller, &event);
                controller.dispatch(event);
                snapshot.set(controller.snapshot());
            }
            tracing::debug!("Page event stream closed");
        }
    });

    // Runs once, after the audio element is in the DOM
    use_effect(move || {
        tracing::info!("Card page loaded");
        events.send(PageEvent::Loaded);
    });

    rsx! {
        CardPage {}
    }
}
