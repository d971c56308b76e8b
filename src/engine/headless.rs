//! Simulated page for tests and the CLI.
//!
//! Element positions are document offsets; bounding-rect tops are derived from the current
//! scroll position. Frame requests queue up until the caller fires them.

use std::collections::BTreeMap;

use crate::engine::host::{FrameToken, Host, ObserveTarget, ObserverId};
use crate::engine::instance::EngineInstance;
use crate::engine::sink::TransformSink;
use crate::foundation::core::Viewport;
use crate::foundation::error::ReelResult;

/// In-memory [`Host`] with a scroll position, document offsets and a frame queue.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    viewport: Viewport,
    scroll_y: f64,
    section_offset: Option<f64>,
    anchors: BTreeMap<String, f64>,
    advances: Option<Vec<f64>>,
    next_token: u64,
    queued: Vec<FrameToken>,
    frame_requests: u64,
    listeners: bool,
    next_observer: u64,
    observers: BTreeMap<ObserverId, ObserveTarget>,
}

impl HeadlessHost {
    /// Page whose tracked section starts `section_offset` pixels into the document.
    pub fn new(viewport: Viewport, section_offset: f64) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            section_offset: Some(section_offset),
            anchors: BTreeMap::new(),
            advances: None,
            next_token: 0,
            queued: Vec::new(),
            frame_requests: 0,
            listeners: false,
            next_observer: 0,
            observers: BTreeMap::new(),
        }
    }

    /// Page where the tracked section is not mounted.
    pub fn unmounted(viewport: Viewport) -> Self {
        Self {
            section_offset: None,
            ..Self::new(viewport, 0.0)
        }
    }

    /// Add an anchor element matched by `selector` at document offset `offset`.
    pub fn with_anchor(mut self, selector: impl Into<String>, offset: f64) -> Self {
        self.anchors.insert(selector.into(), offset);
        self
    }

    /// Report these per-character advances once asked.
    pub fn with_letter_advances(mut self, advances: Vec<f64>) -> Self {
        self.advances = Some(advances);
        self
    }

    /// Replace the reported per-character advances, as after a font load.
    pub fn set_letter_advances(&mut self, advances: Option<Vec<f64>>) {
        self.advances = advances;
    }

    /// Scroll the page to `y`.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Current scroll position.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Move or add an anchor.
    pub fn set_anchor(&mut self, selector: impl Into<String>, offset: f64) {
        self.anchors.insert(selector.into(), offset);
    }

    /// Remove an anchor from the page.
    pub fn remove_anchor(&mut self, selector: &str) {
        self.anchors.remove(selector);
    }

    /// Fire the oldest queued frame, returning its token.
    pub fn next_frame(&mut self) -> Option<FrameToken> {
        if self.queued.is_empty() {
            None
        } else {
            Some(self.queued.remove(0))
        }
    }

    /// Frames requested and not yet fired or cancelled.
    pub fn queued_frames(&self) -> &[FrameToken] {
        &self.queued
    }

    /// Total number of frame requests made so far.
    pub fn frame_requests(&self) -> u64 {
        self.frame_requests
    }

    /// Return `true` while scroll and resize listeners are installed.
    pub fn listeners_attached(&self) -> bool {
        self.listeners
    }

    /// Targets currently observed.
    pub fn observed(&self) -> impl Iterator<Item = &ObserveTarget> + '_ {
        self.observers.values()
    }
}

impl Host for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn section_top(&self) -> Option<f64> {
        self.section_offset.map(|o| o - self.scroll_y)
    }

    fn anchor_top(&self, selector: &str) -> Option<f64> {
        self.anchors.get(selector).map(|o| o - self.scroll_y)
    }

    fn letter_advances(&self) -> Option<Vec<f64>> {
        self.advances.clone()
    }

    fn request_frame(&mut self) -> FrameToken {
        self.next_token += 1;
        self.frame_requests += 1;
        let token = FrameToken(self.next_token);
        self.queued.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.queued.retain(|t| *t != token);
    }

    fn attach_listeners(&mut self) {
        self.listeners = true;
    }

    fn detach_listeners(&mut self) {
        self.listeners = false;
    }

    fn observe(&mut self, target: &ObserveTarget) -> Option<ObserverId> {
        if let ObserveTarget::Anchor(selector) = target
            && !self.anchors.contains_key(selector)
        {
            return None;
        }
        self.next_observer += 1;
        let id = ObserverId(self.next_observer);
        self.observers.insert(id, target.clone());
        Some(id)
    }

    fn disconnect(&mut self, id: ObserverId) {
        self.observers.remove(&id);
    }
}

impl<S: TransformSink> EngineInstance<HeadlessHost, S> {
    /// Fire queued frames in order until the queue is empty, including frames the engine
    /// requests while the price counter settles. Returns how many frames were evaluated.
    pub fn pump(&mut self) -> ReelResult<u32> {
        let mut evaluated = 0;
        while let Some(token) = self.host_mut().next_frame() {
            if self.on_frame(token)? {
                evaluated += 1;
            }
        }
        Ok(evaluated)
    }

    /// Scroll to `y`, dispatch the scroll event and fire the resulting frames.
    pub fn scroll_and_pump(&mut self, y: f64) -> ReelResult<u32> {
        self.host_mut().scroll_to(y);
        self.on_scroll();
        self.pump()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/headless.rs"]
mod tests;
