use crate::foundation::core::Viewport;

/// Handle of a requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(pub u64);

/// Handle of an installed resize observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(pub u64);

/// What a resize observer watches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObserveTarget {
    /// The whole document; fires on viewport and reflow changes.
    Document,
    /// The tail-snap anchor matched by this selector.
    Anchor(String),
}

/// Read side and scheduling side of the page hosting the engine.
///
/// Geometry reads return `None` when the element is not mounted. A host never reports errors:
/// anything it cannot provide is simply absent.
pub trait Host {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Bounding-rect top of the tracked section relative to the viewport.
    fn section_top(&self) -> Option<f64>;

    /// Bounding-rect top of the element matched by `selector`.
    fn anchor_top(&self, selector: &str) -> Option<f64>;

    /// Per-character advances of the closing phrase once fonts are laid out.
    fn letter_advances(&self) -> Option<Vec<f64>>;

    /// Ask for a frame callback; the host later calls back with the returned token.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a pending frame request.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Install scroll and resize listeners.
    fn attach_listeners(&mut self);

    /// Remove the listeners installed by [`Host::attach_listeners`].
    fn detach_listeners(&mut self);

    /// Install a resize observer; `None` when the target does not exist.
    fn observe(&mut self, target: &ObserveTarget) -> Option<ObserverId>;

    /// Remove a resize observer.
    fn disconnect(&mut self, id: ObserverId);
}
