//! Simulated page for integration tests.
//!
//! `FakeMedia` behaves like a browser media element: `play` resolves later
//! (when the test pumps the event queue), the autoplay policy rejects play
//! requests until the page has seen a user gesture, and state changes queue
//! the same `play`/`pause` events a real `<audio>` element would fire.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use greetingcard_core::{
    ClickTarget, Controller, MediaElement, MessageItem, PageEvent, PlayRequest, PlaybackError,
};

#[derive(Debug, Default)]
pub struct BrowserState {
    /// Sticky user activation: set by the first click or key press
    pub user_activated: bool,
    /// When true, play requests succeed even without activation
    pub autoplay_allowed: bool,
    pub queue: VecDeque<PageEvent>,
}

pub type Browser = Rc<RefCell<BrowserState>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Audio,
    Video,
}

#[derive(Debug)]
pub struct FakeMedia {
    slot: Slot,
    browser: Browser,
    pub paused: bool,
    pub src: String,
    pub plays: Vec<PlayRequest>,
    pub pauses: usize,
    pub loads: Vec<String>,
}

impl FakeMedia {
    fn new(slot: Slot, browser: Browser) -> Self {
        Self {
            slot,
            browser,
            paused: true,
            src: String::new(),
            plays: Vec::new(),
            pauses: 0,
            loads: Vec::new(),
        }
    }
}

impl MediaElement for FakeMedia {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self, request: PlayRequest) {
        self.plays.push(request);
        let mut browser = self.browser.borrow_mut();
        let allowed = browser.autoplay_allowed || browser.user_activated;

        let outcome = if allowed {
            if self.paused && self.slot == Slot::Audio {
                browser.queue.push_back(PageEvent::AudioPlayed);
            }
            self.paused = false;
            Ok(())
        } else {
            Err(PlaybackError::NotAllowed("play() requires a user gesture".to_string()))
        };
        browser.queue.push_back(PageEvent::PlaySettled { request, outcome });
    }

    fn pause(&mut self) {
        self.pauses += 1;
        if !self.paused {
            self.paused = true;
            if self.slot == Slot::Audio {
                self.browser.borrow_mut().queue.push_back(PageEvent::AudioPaused);
            }
        }
    }

    fn load(&mut self, src: &str) {
        self.loads.push(src.to_string());
        self.src = src.to_string();
        self.paused = true;
    }
}

pub const TRACK_A: &str = "assets/music/a.mp3";
pub const TRACK_B: &str = "assets/music/b.mp3";

/// A page with one controller, one audio element and one modal video slot
pub struct Page {
    pub browser: Browser,
    pub controller: Controller<FakeMedia, FakeMedia>,
}

impl Page {
    /// A page whose browser allows autoplay
    pub fn with_autoplay() -> Self {
        Self::new(true)
    }

    /// A page whose browser blocks autoplay until the first gesture
    pub fn autoplay_blocked() -> Self {
        Self::new(false)
    }

    fn new(autoplay_allowed: bool) -> Self {
        let browser: Browser = Rc::new(RefCell::new(BrowserState {
            autoplay_allowed,
            ..Default::default()
        }));
        let mut audio = FakeMedia::new(Slot::Audio, browser.clone());
        audio.load(TRACK_A);
        let video = FakeMedia::new(Slot::Video, browser.clone());
        let controller = Controller::new(audio, video, TRACK_A);

        let mut page = Self { browser, controller };
        page.dispatch(PageEvent::Loaded);
        page
    }

    /// Dispatch one event, then deliver everything it queued
    pub fn dispatch(&mut self, event: PageEvent) {
        self.controller.dispatch(event);
        self.pump();
    }

    pub fn pump(&mut self) {
        loop {
            let next = self.browser.borrow_mut().queue.pop_front();
            match next {
                Some(event) => self.controller.dispatch(event),
                None => break,
            }
        }
    }

    pub fn click(&mut self, target: ClickTarget) {
        self.browser.borrow_mut().user_activated = true;
        self.dispatch(PageEvent::Click(target));
    }

    pub fn click_item(&mut self, item: MessageItem) {
        self.click(ClickTarget::MessageItem(item));
    }

    pub fn press(&mut self, key: &str) {
        self.browser.borrow_mut().user_activated = true;
        self.dispatch(PageEvent::key(key));
    }

    pub fn select_track(&mut self, src: &str) {
        self.browser.borrow_mut().user_activated = true;
        self.dispatch(PageEvent::track(src));
    }

    /// The user hits pause on the native audio controls
    pub fn user_pauses_audio(&mut self) {
        self.browser.borrow_mut().user_activated = true;
        self.controller.audio_mut().pause();
        self.pump();
    }

    /// The user hits play on the native audio controls
    pub fn user_plays_audio(&mut self) {
        self.browser.borrow_mut().user_activated = true;
        let audio = self.controller.audio_mut();
        if audio.paused {
            audio.paused = false;
            self.browser.borrow_mut().queue.push_back(PageEvent::AudioPlayed);
        }
        self.pump();
    }

    pub fn audio_playing(&self) -> bool {
        !self.controller.audio().paused
    }

    pub fn video_playing(&self) -> bool {
        !self.controller.video().paused
    }
}

pub fn text_item() -> MessageItem {
    MessageItem::text_message("From all of us", "Happy **birthday**!")
}

pub fn image_item() -> MessageItem {
    MessageItem::image_message("Memory", "assets/images/beach.jpg", Some("Beach day".to_string()))
}

pub fn video_item() -> MessageItem {
    MessageItem::video_message("Press play", "assets/video/wishes.mp4")
}
