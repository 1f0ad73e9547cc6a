//! Webview-backed media elements.
//!
//! Drives the real `<audio>`/`<video>` elements through `document::eval`.
//! The DOM's `paused` attribute is mirrored locally so the controller can
//! read it synchronously, updated the same way the browser updates it:
//! immediately on `play`/`pause`/`load`, and again when a play request is
//! rejected or the user uses the native controls.

use dioxus::document;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedSender;
use greetingcard_core::{Controller, MediaElement, PageEvent, PlayRequest, PlaybackError};
use serde::Deserialize;

/// DOM id of the background audio element
pub const AUDIO_ID: &str = "birthday-song";

/// Frames to wait for an element that has not been rendered yet
const ELEMENT_WAIT_FRAMES: u32 = 30;

/// Controller as wired into the desktop page
pub type PageController = Controller<WebviewMedia, WebviewMedia>;

/// Result reported back by the play script
#[derive(Debug, Deserialize)]
struct PlayResult {
    ok: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl PlayResult {
    fn into_outcome(self) -> Result<(), PlaybackError> {
        if self.ok {
            return Ok(());
        }
        Err(PlaybackError::from_dom_exception(
            self.name.as_deref().unwrap_or("Error"),
            self.message.as_deref().unwrap_or(""),
        ))
    }
}

/// A media element living in the webview, addressed by DOM id
pub struct WebviewMedia {
    element_id: &'static str,
    paused: bool,
    settled: UnboundedSender<PageEvent>,
}

impl WebviewMedia {
    /// `settled` receives a `PlaySettled` event for every play request.
    pub fn new(element_id: &'static str, settled: UnboundedSender<PageEvent>) -> Self {
        Self {
            element_id,
            paused: true,
            settled,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

impl MediaElement for WebviewMedia {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self, request: PlayRequest) {
        self.paused = false;

        // Sent now so it runs in order with other scripts; only the result is awaited
        let eval = document::eval(&play_script(self.element_id));
        let settled = self.settled.clone();
        spawn(async move {
            let outcome = match eval.join::<PlayResult>().await {
                Ok(result) => result.into_outcome(),
                Err(e) => Err(PlaybackError::Other(e.to_string())),
            };
            if settled
                .unbounded_send(PageEvent::PlaySettled { request, outcome })
                .is_err()
            {
                tracing::debug!(request = %request, "Page closed before playback settled");
            }
        });
    }

    fn pause(&mut self) {
        self.paused = true;
        let _ = document::eval(&pause_script(self.element_id));
    }

    fn load(&mut self, src: &str) {
        self.paused = true;
        let _ = document::eval(&load_script(self.element_id, src));
    }
}

/// Keep the local `paused` mirrors in step with what the webview reports,
/// before the controller sees the event.
pub fn mirror_media_state(controller: &mut PageController, event: &PageEvent) {
    match event {
        PageEvent::AudioPlayed => controller.audio_mut().set_paused(false),
        PageEvent::AudioPaused => controller.audio_mut().set_paused(true),
        PageEvent::PlaySettled { request, outcome: Err(_) } => {
            if request.targets_audio() {
                controller.audio_mut().set_paused(true);
            } else {
                controller.video_mut().set_paused(true);
            }
        }
        _ => {}
    }
}

fn js_string(value: &str) -> String {
    // A JSON string literal is a valid JS string literal
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn element_lookup(element_id: &str) -> String {
    format!(
        r#"const waitFor = (id, frames) => new Promise((resolve) => {{
    const tick = (left) => {{
        const el = document.getElementById(id);
        if (el || left <= 0) {{ resolve(el); }} else {{ requestAnimationFrame(() => tick(left - 1)); }}
    }};
    tick(frames);
}});
const el = await waitFor({id}, {frames});"#,
        id = js_string(element_id),
        frames = ELEMENT_WAIT_FRAMES,
    )
}

fn play_script(element_id: &str) -> String {
    format!(
        r#"{lookup}
if (!el) {{ return {{ ok: false, name: "NotFoundError", message: "media element missing" }}; }}
try {{
    await el.play();
    return {{ ok: true }};
}} catch (e) {{
    return {{ ok: false, name: e.name, message: e.message }};
}}"#,
        lookup = element_lookup(element_id),
    )
}

fn pause_script(element_id: &str) -> String {
    format!(
        "const el = document.getElementById({}); if (el) {{ el.pause(); }}",
        js_string(element_id)
    )
}

fn load_script(element_id: &str, src: &str) -> String {
    format!(
        r#"{lookup}
if (el) {{
    const source = el.querySelector("source");
    if (source) {{ source.src = {src}; }} else {{ el.src = {src}; }}
    el.load();
}}"#,
        lookup = element_lookup(element_id),
        src = js_string(src),
    )
}
