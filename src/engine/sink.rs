use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::core::{ElementId, Pose, fmt_num};
use crate::track::resolver::TrackHeight;

/// Non-transform style written onto an element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum StyleValue {
    /// `stroke-dashoffset` of a checkmark path.
    DashOffset(f64),
    /// `width` of a slider fill bar, in percent.
    WidthPercent(f64),
    /// Text content of the element.
    Text(String),
    /// Horizontal `background-position` shift in pixels, written as a negative offset.
    BackgroundShift(f64),
    /// `background-size` width in pixels; height is always the full element.
    BackgroundWidth(f64),
}

impl StyleValue {
    /// CSS property name and value of this style.
    pub fn declaration(&self) -> (&'static str, String) {
        match self {
            Self::DashOffset(v) => ("stroke-dashoffset", fmt_num(*v)),
            Self::WidthPercent(v) => ("width", format!("{}%", fmt_num(*v))),
            Self::Text(s) => ("text", s.clone()),
            Self::BackgroundShift(x) => ("background-position", format!("{}px 0", fmt_num(-x))),
            Self::BackgroundWidth(w) => ("background-size", format!("{}px 100%", fmt_num(*w))),
        }
    }
}

/// Output contract of the engine: everything it writes goes through a sink.
///
/// Sinks must tolerate writes to elements that are not mounted and drop them silently.
pub trait TransformSink {
    /// Write `transform` and `opacity` for `id`.
    fn set_transform(&mut self, id: ElementId, pose: &Pose);
    /// Write a non-transform style for `id`.
    fn set_style(&mut self, id: ElementId, value: &StyleValue);
    /// Write the height of the tracked section.
    fn set_track_height(&mut self, height: TrackHeight);
}

/// In-memory sink recording inline CSS declarations, for tests and the CLI.
#[derive(Clone, Debug, Default)]
pub struct InMemorySink {
    mounted: Option<BTreeSet<ElementId>>,
    styles: BTreeMap<ElementId, BTreeMap<&'static str, String>>,
    track_height: Option<String>,
    writes: u64,
    dropped: u64,
}

impl InMemorySink {
    /// Sink that accepts writes to every element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that only accepts writes to `mounted` elements and drops the rest.
    pub fn with_mounted(mounted: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            mounted: Some(mounted.into_iter().collect()),
            ..Self::default()
        }
    }

    fn is_mounted(&self, id: ElementId) -> bool {
        self.mounted.as_ref().is_none_or(|m| m.contains(&id))
    }

    fn record(&mut self, id: ElementId, property: &'static str, value: String) {
        if !self.is_mounted(id) {
            self.dropped += 1;
            return;
        }
        self.writes += 1;
        self.styles.entry(id).or_default().insert(property, value);
    }

    /// Current value of `property` on `id`.
    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.styles.get(&id)?.get(property).map(String::as_str)
    }

    /// Current section height, if one was written.
    pub fn track_height(&self) -> Option<&str> {
        self.track_height.as_deref()
    }

    /// Number of accepted declaration writes.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Number of writes dropped because the element is not mounted.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Elements that received at least one write.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.styles.keys().copied()
    }

    /// Style table keyed by element name, for serialization.
    pub fn table(&self) -> BTreeMap<String, BTreeMap<&'static str, String>> {
        let mut out: BTreeMap<String, BTreeMap<&'static str, String>> = self
            .styles
            .iter()
            .map(|(id, decls)| (id.to_string(), decls.clone()))
            .collect();
        if let Some(h) = &self.track_height {
            out.entry("section".to_owned())
                .or_default()
                .insert("height", h.clone());
        }
        out
    }
}

impl TransformSink for InMemorySink {
    fn set_transform(&mut self, id: ElementId, pose: &Pose) {
        self.record(id, "transform", pose.css_transform());
        self.record(id, "opacity", fmt_num(pose.opacity));
    }

    fn set_style(&mut self, id: ElementId, value: &StyleValue) {
        let (property, css) = value.declaration();
        self.record(id, property, css);
    }

    fn set_track_height(&mut self, height: TrackHeight) {
        self.track_height = Some(height.css());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/sink.rs"]
mod tests;
