use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ReelError, ReelResult};
use crate::scenes::checklist::{RowKind, RowSpec};
use crate::scenes::counter::DEFAULT_SMOOTHING;
use crate::track::partition::MAX_OVERLAP;

/// Engine configuration; every field is optional in JSON and falls back to a default.
///
/// Scene lengths are in viewport-height units where `100` is one full viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Length of the deck scene.
    pub p2_length: f64,
    /// Length of the pricing scene.
    pub p3_length: f64,
    /// Length of the optional closing scene; `0` disables it.
    pub p4_length: f64,
    /// Crossfade width as a fraction of total progress, capped at [`MAX_OVERLAP`].
    pub overlap: f64,
    /// Tail-cut fraction used only by the normalized-length fallback.
    pub global_raw_end: f64,
    /// Selector of the section the sequence must end at exactly.
    pub next_section_selector: Option<String>,
    /// Text consumed by the reveal generators.
    pub content: ContentConfig,
    /// Pricing rows and counter settings.
    pub pricing: PricingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            p2_length: 320.0,
            p3_length: 380.0,
            p4_length: 0.0,
            overlap: 0.06,
            global_raw_end: 0.97,
            next_section_selector: None,
            content: ContentConfig::default(),
            pricing: PricingConfig::default(),
        }
    }
}

/// Text content for the reveal scenes.
///
/// `labels` and `phrase` drive the label and letter generators. `headline` is inert: the host
/// renders it as markup, and the engine only animates the title element's transform and opacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    /// Title text carried for the host's markup; never written by the engine.
    pub headline: String,
    /// Words revealed under the deck.
    pub labels: Vec<String>,
    /// Phrase revealed letter by letter in the closing scene.
    pub phrase: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            headline: "Everything in one deck".to_owned(),
            labels: vec!["Plan".to_owned(), "Build".to_owned(), "Ship".to_owned()],
            phrase: "Start today".to_owned(),
        }
    }
}

/// Pricing scene content and counter settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// Price before any row contributes.
    pub base: f64,
    /// Prefix written before the displayed number.
    pub currency: String,
    /// Per-frame counter smoothing factor in `(0, 1]`.
    pub smoothing: f64,
    /// Slider track width in pixels.
    pub slider_track_px: f64,
    /// Rows in display order.
    pub rows: Vec<RowSpec>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let row = |label: &str, kind, price| RowSpec {
            label: label.to_owned(),
            kind,
            price,
        };
        Self {
            base: 49.0,
            currency: "$".to_owned(),
            smoothing: DEFAULT_SMOOTHING,
            slider_track_px: 240.0,
            rows: vec![
                row("Custom domain", RowKind::Checkbox, 20.0),
                row("Team seats", RowKind::Slider { fill: 0.6 }, 300.0),
                row("Priority support", RowKind::Checkbox, 80.0),
                row("Storage", RowKind::Slider { fill: 0.35 }, 200.0),
            ],
        }
    }
}

impl EngineConfig {
    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| ReelError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate configuration from a JSON file.
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Scene lengths in scene order.
    pub fn scene_lengths(&self) -> [f64; 3] {
        [self.p2_length, self.p3_length, self.p4_length]
    }

    /// Overlap after the internal cap.
    pub fn capped_overlap(&self) -> f64 {
        self.overlap.min(MAX_OVERLAP)
    }

    /// Return `true` when the closing scene is enabled.
    pub fn has_closing_scene(&self) -> bool {
        self.p4_length > 0.0
    }

    /// Validate static invariants.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("p2Length", self.p2_length),
            ("p3Length", self.p3_length),
            ("p4Length", self.p4_length),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ReelError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.p2_length <= 0.0 || self.p3_length <= 0.0 {
            return Err(ReelError::validation(
                "p2Length and p3Length must be > 0; only p4Length may disable its scene",
            ));
        }
        if !self.overlap.is_finite() || self.overlap < 0.0 {
            return Err(ReelError::validation("overlap must be finite and >= 0"));
        }
        if !(self.global_raw_end > 0.0 && self.global_raw_end <= 1.0) {
            return Err(ReelError::validation("globalRawEnd must be in (0, 1]"));
        }
        let p = &self.pricing;
        if !(p.smoothing > 0.0 && p.smoothing <= 1.0) {
            return Err(ReelError::validation("pricing.smoothing must be in (0, 1]"));
        }
        if !p.base.is_finite() {
            return Err(ReelError::validation("pricing.base must be finite"));
        }
        if !p.slider_track_px.is_finite() || p.slider_track_px < 0.0 {
            return Err(ReelError::validation(
                "pricing.sliderTrackPx must be finite and >= 0",
            ));
        }
        if p.rows.len() > usize::from(u8::MAX) || self.content.labels.len() > usize::from(u8::MAX)
        {
            return Err(ReelError::validation("at most 255 rows and 255 labels"));
        }
        if self.content.phrase.chars().count() > usize::from(u16::MAX) {
            return Err(ReelError::validation("phrase is too long"));
        }
        for (idx, row) in p.rows.iter().enumerate() {
            if !row.price.is_finite() {
                return Err(ReelError::validation(format!(
                    "pricing.rows[{idx}].price must be finite"
                )));
            }
            if let RowKind::Slider { fill } = row.kind
                && !(0.0..=1.0).contains(&fill)
            {
                return Err(ReelError::validation(format!(
                    "pricing.rows[{idx}].kind.fill must be in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
