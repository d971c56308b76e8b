use smallvec::SmallVec;

use crate::config::EngineConfig;
use crate::engine::host::{FrameToken, Host, ObserveTarget, ObserverId};
use crate::engine::scheduler::FrameScheduler;
use crate::engine::sink::{StyleValue, TransformSink};
use crate::engine::timeline::{FrameOutput, Timeline, apply};
use crate::foundation::core::ElementId;
use crate::foundation::error::ReelResult;
use crate::scenes::counter::CounterState;
use crate::scenes::letters::GradientOffsets;
use crate::track::resolver::{TrackLength, TrackResolver};
use crate::track::sampler::ProgressSampler;

/// One mounted scroll sequence: host wiring, frame scheduling and per-frame evaluation.
///
/// Created stopped. [`EngineInstance::start`] measures the track, installs listeners and
/// observers and schedules the first frame; [`EngineInstance::stop`] undoes all of it. Both are
/// idempotent, and dropping a running instance stops it.
pub struct EngineInstance<H: Host, S: TransformSink> {
    host: H,
    sink: S,
    timeline: Timeline,
    resolver: TrackResolver,
    sampler: ProgressSampler,
    scheduler: FrameScheduler,
    counter: CounterState,
    length: Option<TrackLength>,
    gradient: Option<GradientOffsets>,
    observers: SmallVec<[ObserverId; 2]>,
    running: bool,
    last: Option<FrameOutput>,
}

impl<H: Host, S: TransformSink> EngineInstance<H, S> {
    /// Build a stopped instance from a configuration.
    pub fn new(config: &EngineConfig, host: H, sink: S) -> ReelResult<Self> {
        let timeline = Timeline::new(config)?;
        Ok(Self {
            host,
            sink,
            timeline,
            resolver: TrackResolver::new(
                config.next_section_selector.clone(),
                &config.scene_lengths(),
            ),
            sampler: ProgressSampler::new(config.global_raw_end),
            scheduler: FrameScheduler::new(),
            counter: CounterState::new(config.pricing.base, config.pricing.smoothing),
            length: None,
            gradient: None,
            observers: SmallVec::new(),
            running: false,
            last: None,
        })
    }

    /// Return `true` between `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, for simulating page changes.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Track length from the latest measurement.
    pub fn track_length(&self) -> Option<TrackLength> {
        self.length
    }

    /// Output of the most recent evaluated frame.
    pub fn last_frame(&self) -> Option<&FrameOutput> {
        self.last.as_ref()
    }

    /// Counter state carried into the next frame.
    pub fn counter(&self) -> CounterState {
        self.counter
    }

    /// Mount the sequence: measure, size the section, listen, observe and schedule a frame.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.remeasure();
        self.host.attach_listeners();

        let mut targets = vec![ObserveTarget::Document];
        if let Some(selector) = self.resolver.selector() {
            targets.push(ObserveTarget::Anchor(selector.to_owned()));
        }
        for target in &targets {
            match self.host.observe(target) {
                Some(id) => self.observers.push(id),
                None => tracing::debug!(?target, "resize target not found"),
            }
        }

        self.scheduler.request(&mut self.host);
        tracing::debug!(length = ?self.length, "engine started");
    }

    /// Unmount: cancel the pending frame, remove listeners and disconnect observers.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.scheduler.cancel(&mut self.host);
        self.host.detach_listeners();
        for id in self.observers.drain(..) {
            self.host.disconnect(id);
        }
        tracing::debug!("engine stopped");
    }

    /// Scroll event: coalesce into the next frame.
    pub fn on_scroll(&mut self) {
        if self.running {
            self.scheduler.request(&mut self.host);
        }
    }

    /// Window resize event: re-measure the track and schedule a frame.
    pub fn on_resize(&mut self) {
        if self.running {
            self.remeasure();
            self.scheduler.request(&mut self.host);
        }
    }

    /// Resize observer callback on the document or the anchor.
    pub fn on_observed_resize(&mut self) {
        if self.running {
            tracing::debug!("observed resize");
            self.remeasure();
            self.scheduler.request(&mut self.host);
        }
    }

    /// Frame callback. Returns `true` when a frame was evaluated and written.
    ///
    /// Stale tokens and frames without a mounted section are skipped. While the price counter
    /// is still moving toward its target another frame is requested, so it settles without
    /// further scroll events.
    pub fn on_frame(&mut self, token: FrameToken) -> ReelResult<bool> {
        if !self.running || !self.scheduler.take(token) {
            return Ok(false);
        }
        let Some(section_top) = self.host.section_top() else {
            tracing::trace!("section not mounted; frame skipped");
            return Ok(false);
        };
        let viewport = self.host.viewport();
        let length = match self.length {
            Some(length) => length,
            None => self.remeasure(),
        };

        let track = self.sampler.sample(length, viewport.height, section_top)?;
        let output = self.timeline.evaluate(track.raw, viewport, self.counter)?;
        apply(&output, &mut self.sink);
        self.counter = output.counter;
        let settled = self.counter.is_settled(output.target_price);
        self.last = Some(output);
        self.apply_gradient();
        if !settled {
            self.scheduler.request(&mut self.host);
        }
        Ok(true)
    }

    fn remeasure(&mut self) -> TrackLength {
        let section_top = self.host.section_top();
        let anchor_top = self
            .resolver
            .selector()
            .and_then(|selector| self.host.anchor_top(selector));
        let length = self.resolver.resolve(section_top, anchor_top);
        if self.length != Some(length) {
            tracing::debug!(?length, "track length resolved");
            self.sink.set_track_height(length.section_height());
            self.length = Some(length);
        }
        length
    }

    // Unusable layout is retried on a later frame.
    fn apply_gradient(&mut self) {
        let count = self.timeline.letter_count();
        if self.gradient.is_some() || count == 0 {
            return;
        }
        let Some(advances) = self.host.letter_advances() else {
            return;
        };
        if advances.len() != count {
            tracing::trace!(
                measured = advances.len(),
                expected = count,
                "letter layout incomplete"
            );
            return;
        }
        let gradient = match GradientOffsets::from_advances(&advances) {
            Ok(gradient) => gradient,
            Err(err) => {
                tracing::debug!(%err, "letter layout not usable yet");
                return;
            }
        };
        for idx in 0..gradient.len() {
            let id = ElementId::Letter(idx as u16);
            self.sink
                .set_style(id, &StyleValue::BackgroundWidth(gradient.total_width()));
            if let Some(offset) = gradient.offset(idx) {
                self.sink.set_style(id, &StyleValue::BackgroundShift(offset));
            }
        }
        self.gradient = Some(gradient);
    }
}

impl<H: Host, S: TransformSink> Drop for EngineInstance<H, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/instance.rs"]
mod tests;
