use crate::config::EngineConfig;
use crate::engine::sink::{StyleValue, TransformSink};
use crate::foundation::core::{ElementId, Pose, Viewport};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scenes::checklist::{ChecklistTimeline, RowFill, RowSpec};
use crate::scenes::counter::CounterState;
use crate::scenes::deck::{CARD_COUNT, DeckTimeline};
use crate::scenes::labels::LabelTimeline;
use crate::scenes::letters::{LetterPlan, LetterReveal};
use crate::scenes::title::TitleTimeline;
use crate::track::partition::{ScenePartition, SceneState};

const DECK_SCENE: usize = 0;
const PRICING_SCENE: usize = 1;
const CLOSING_SCENE: usize = 2;

/// One element write produced by a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ElementWrite {
    /// Transform and opacity.
    Transform {
        /// Target element.
        id: ElementId,
        /// Pose to write.
        pose: Pose,
    },
    /// Any other style.
    Style {
        /// Target element.
        id: ElementId,
        /// Style to write.
        value: StyleValue,
    },
}

/// Everything one frame computed, in write order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Progress the frame was evaluated at.
    pub raw: f64,
    /// Per-scene local progress and crossfade weight.
    pub scenes: Vec<SceneState>,
    /// Price the counter eases toward.
    pub target_price: f64,
    /// Counter state after this frame; feed it into the next frame.
    pub counter: CounterState,
    /// Element writes in application order.
    pub writes: Vec<ElementWrite>,
}

impl FrameOutput {
    /// Displayed counter value after this frame.
    pub fn displayed_price(&self) -> f64 {
        self.counter.display()
    }
}

/// Pure per-frame evaluation of every scene from one progress sample.
///
/// The only state carried between frames is the [`CounterState`], which callers thread through
/// explicitly. Letter plans are cached per viewport and regenerate when it changes.
#[derive(Clone, Debug)]
pub struct Timeline {
    partition: ScenePartition,
    title: TitleTimeline,
    deck: DeckTimeline,
    labels: LabelTimeline,
    label_count: usize,
    checklist: ChecklistTimeline,
    rows: Vec<RowSpec>,
    base_price: f64,
    currency: String,
    letters: LetterReveal,
    phrase: String,
    closing: bool,
    letter_plans: Vec<LetterPlan>,
    plans_viewport: Option<Viewport>,
}

impl Timeline {
    /// Build the timeline from a validated configuration.
    pub fn new(config: &EngineConfig) -> ReelResult<Self> {
        config.validate()?;
        let partition = ScenePartition::new(&config.scene_lengths(), config.overlap)?;
        let checklist = ChecklistTimeline {
            slider_track_px: config.pricing.slider_track_px,
            ..ChecklistTimeline::default()
        };
        Ok(Self {
            closing: partition.len() > CLOSING_SCENE,
            partition,
            title: TitleTimeline::default(),
            deck: DeckTimeline::default(),
            labels: LabelTimeline::default(),
            label_count: config.content.labels.len(),
            checklist,
            rows: config.pricing.rows.clone(),
            base_price: config.pricing.base,
            currency: config.pricing.currency.clone(),
            letters: LetterReveal::default(),
            phrase: config.content.phrase.clone(),
            letter_plans: Vec::new(),
            plans_viewport: None,
        })
    }

    /// Scene ranges and overlap in use.
    pub fn partition(&self) -> &ScenePartition {
        &self.partition
    }

    /// Return `true` when the closing letter scene is part of the sequence.
    pub fn has_closing_scene(&self) -> bool {
        self.closing
    }

    /// Number of characters in the closing phrase, or zero without a closing scene.
    pub fn letter_count(&self) -> usize {
        if self.closing {
            self.phrase.chars().count()
        } else {
            0
        }
    }

    /// Format a displayed counter value for the price element.
    pub fn price_text(&self, display: f64) -> String {
        format!("{}{}", self.currency, display.round() as i64)
    }

    fn prepare_letters(&mut self, viewport: Viewport) {
        if self.plans_viewport == Some(viewport) {
            return;
        }
        self.letter_plans = self.letters.plans(&self.phrase, viewport);
        self.plans_viewport = Some(viewport);
        tracing::debug!(
            letters = self.letter_plans.len(),
            width = viewport.width,
            height = viewport.height,
            "generated letter plans"
        );
    }

    /// Evaluate one frame at progress `raw`, advancing `counter` by one step.
    #[tracing::instrument(level = "trace", skip(self, counter))]
    pub fn evaluate(
        &mut self,
        raw: f64,
        viewport: Viewport,
        counter: CounterState,
    ) -> ReelResult<FrameOutput> {
        if !raw.is_finite() {
            return Err(ReelError::evaluation(format!("progress is not finite ({raw})")));
        }
        if !viewport.is_finite() {
            return Err(ReelError::evaluation("viewport is not finite"));
        }
        if self.closing {
            self.prepare_letters(viewport);
        }

        let scenes: Vec<SceneState> = self.partition.states(raw).into_iter().collect();
        let scene = |idx: usize| scenes.get(idx).copied().unwrap_or(SceneState::HIDDEN);
        let mut writes = Vec::with_capacity(
            1 + CARD_COUNT + self.label_count + 2 + 3 * self.rows.len() + self.letter_plans.len(),
        );
        let mut transform = |id: ElementId, pose: Pose| -> ReelResult<()> {
            if !pose.is_finite() {
                return Err(ReelError::evaluation(format!("non-finite pose for {id}")));
            }
            writes.push(ElementWrite::Transform { id, pose });
            Ok(())
        };

        let deck = scene(DECK_SCENE);
        transform(ElementId::Title, self.title.sample(deck.local, deck.weight))?;
        for (idx, pose) in self
            .deck
            .sample(deck.local, deck.weight, viewport)
            .into_iter()
            .enumerate()
        {
            transform(ElementId::Card(idx as u8), pose)?;
        }
        for idx in 0..self.label_count {
            let pose = self
                .labels
                .sample(idx, self.label_count, deck.local, deck.weight);
            transform(ElementId::Label(idx as u8), pose)?;
        }

        let pricing = scene(PRICING_SCENE);
        let frame = self.checklist.sample(
            &self.rows,
            self.base_price,
            pricing.local,
            pricing.weight,
            viewport,
        );
        transform(ElementId::Panel, frame.panel)?;
        let mut styles = Vec::with_capacity(self.rows.len() + 1);
        for (idx, row) in frame.rows.iter().enumerate() {
            let i = idx as u8;
            transform(ElementId::Row(i), row.pose)?;
            match row.fill {
                RowFill::Check { dash_offset, .. } => {
                    styles.push((ElementId::Check(i), StyleValue::DashOffset(dash_offset)));
                }
                RowFill::Slider { fraction, knob_x } => {
                    styles.push((
                        ElementId::SliderFill(i),
                        StyleValue::WidthPercent(fraction * 100.0),
                    ));
                    transform(ElementId::SliderKnob(i), Pose::at(knob_x, 0.0, 0.0, 1.0))?;
                }
            }
        }

        if self.closing {
            let closing = scene(CLOSING_SCENE);
            for plan in &self.letter_plans {
                transform(
                    ElementId::Letter(plan.index as u16),
                    plan.sample(closing.local, closing.weight),
                )?;
            }
        }

        let mut counter = counter;
        let display = counter.advance(frame.target_price)?;
        styles.push((ElementId::Price, StyleValue::Text(self.price_text(display))));
        writes.extend(
            styles
                .into_iter()
                .map(|(id, value)| ElementWrite::Style { id, value }),
        );

        Ok(FrameOutput {
            raw,
            scenes,
            target_price: frame.target_price,
            counter,
            writes,
        })
    }
}

/// Push every write of `output` into `sink`.
pub fn apply<S: TransformSink + ?Sized>(output: &FrameOutput, sink: &mut S) {
    for write in &output.writes {
        match write {
            ElementWrite::Transform { id, pose } => sink.set_transform(*id, pose),
            ElementWrite::Style { id, value } => sink.set_style(*id, value),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/timeline.rs"]
mod tests;
