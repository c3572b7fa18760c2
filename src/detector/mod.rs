// QuakeWatch: Event Detector
//
// Turns the stream of magnitudes into discrete earthquake events.
//
//   Idle  -> Active  when the sample classifies above None, or STA > 3 x LTA
//   Active -> Idle   when the sample classifies as None and STA <= 2 x LTA
//
// The gap between the two ratios keeps a signal hovering near one boundary
// from toggling the state every sample.

pub mod classify;
pub mod window;

pub use classify::classify;
pub use window::MagnitudeWindow;

use crate::config::*;
use crate::events::{AlertLevel, EventSummary, SampleOutcome, Transition};

/// Running statistics of the event in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveEvent {
    pub duration: u32,
    pub peak: u32,
}

/// All mutable detection state.  One instance, owned by the sampling loop.
#[derive(Debug, Clone)]
pub struct Detector {
    window: MagnitudeWindow,
    event: Option<ActiveEvent>,
    total_events: u32,
    max_recorded: u32,
    previous_level: AlertLevel,
}

impl Detector {
    pub fn new() -> Self {
        Self {
            window: MagnitudeWindow::default(),
            event: None,
            total_events: 0,
            max_recorded: 0,
            previous_level: AlertLevel::None,
        }
    }

    /// Feed one magnitude through the window, classifier and state machine.
    pub fn process(&mut self, magnitude: u32) -> SampleOutcome {
        self.window.push(magnitude);
        let sta = self.window.sta();
        let lta = self.window.lta();
        let level = classify(magnitude);

        let mut transition = None;

        let ratio_trigger = sta > lta.wrapping_mul(RATIO_ENTER);
        if self.event.is_none() && (level > AlertLevel::None || ratio_trigger) {
            self.total_events += 1;
            self.event = Some(ActiveEvent { duration: 0, peak: magnitude });
            transition = Some(Transition::Entered {
                banner: level.max(AlertLevel::Minor),
            });
            log::info!(
                "Event #{} started (mag {}, STA/LTA {}/{})",
                self.total_events,
                magnitude,
                sta,
                lta
            );
        }

        let in_event = self.event.is_some();
        let mut intensifying = false;

        if let Some(mut event) = self.event.take() {
            event.duration += 1;
            event.peak = event.peak.max(magnitude);
            intensifying = level > self.previous_level && level > AlertLevel::Minor;

            if level == AlertLevel::None && sta <= lta.wrapping_mul(RATIO_EXIT) {
                transition = Some(Transition::Exited(self.close(event)));
            } else {
                self.event = Some(event);
            }
        }

        self.previous_level = level;

        SampleOutcome {
            sta,
            lta,
            level,
            in_event,
            intensifying,
            transition,
            active_after: self.event.is_some(),
        }
    }

    fn close(&mut self, event: ActiveEvent) -> EventSummary {
        let new_maximum = event.peak > self.max_recorded;
        if new_maximum {
            self.max_recorded = event.peak;
        }

        log::info!(
            "Event #{} ended after {} samples, peak {}",
            self.total_events,
            event.duration,
            event.peak
        );

        EventSummary {
            peak: event.peak,
            duration: event.duration,
            level: classify(event.peak),
            total_events: self.total_events,
            new_maximum,
        }
    }

    pub fn is_active(&self) -> bool {
        self.event.is_some()
    }

    pub fn event(&self) -> Option<ActiveEvent> {
        self.event
    }

    pub fn total_events(&self) -> u32 {
        self.total_events
    }

    /// Largest event peak seen since startup.
    pub fn max_recorded(&self) -> u32 {
        self.max_recorded
    }

    pub fn window(&self) -> &MagnitudeWindow {
        &self.window
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}
