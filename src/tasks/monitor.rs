// QuakeWatch: Monitor Task
//
// The single sampling loop.  Each cycle runs strictly in order:
//   read -> buffer -> STA/LTA -> classify -> transition -> report -> pause
// and owns every piece of mutable state it touches.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;

use crate::config::*;
use crate::detector::Detector;
use crate::drivers::accel::Accelerometer;
use crate::drivers::registers::RegisterBlock;
use crate::drivers::timer::Pacer;
use crate::events::{SampleOutcome, Transition};
use crate::report::Console;

pub struct Monitor<R, W, P> {
    accel: Accelerometer<R>,
    console: Console<W>,
    pacer: P,
    detector: Detector,
    samples: u32,
}

impl<R: RegisterBlock, W: Write, P: Pacer> Monitor<R, W, P> {
    pub fn new(accel: Accelerometer<R>, console: Console<W>, pacer: P) -> Self {
        Self {
            accel,
            console,
            pacer,
            detector: Detector::new(),
            samples: 0,
        }
    }

    /// Run one full sampling cycle, pause included.
    pub fn step(&mut self) -> anyhow::Result<SampleOutcome> {
        let reading = self.accel.read();
        if !reading.data_ready() {
            // Status never gates detection; note it for bring-up only.
            log::trace!(
                "Sample {} read without data-ready ({:#x})",
                self.samples.wrapping_add(1),
                reading.status
            );
        }
        self.samples = self.samples.wrapping_add(1);

        let outcome = self.detector.process(reading.magnitude);

        if let Some(Transition::Entered { banner }) = outcome.transition {
            self.accel.reset_peak();
            self.console.alert(banner).context("writing alert banner")?;
        }

        if outcome.in_event {
            self.console
                .sample(&reading, &outcome)
                .context("writing sample line")?;
            if outcome.intensifying {
                self.console.intensifying()?;
            }

            if let Some(Transition::Exited(summary)) = outcome.transition {
                let hw_peak = self.accel.peak();
                let hw_counter = self.accel.sample_counter();
                log::debug!(
                    "Hardware peak {} (software {}), hardware counter {}",
                    hw_peak,
                    summary.peak,
                    hw_counter
                );
                self.console
                    .summary(&summary)
                    .context("writing event summary")?;
            }
        } else {
            self.console
                .heartbeat(self.samples, self.detector.total_events())
                .context("writing heartbeat")?;
        }

        self.pacer.pause(sample_interval(outcome.active_after));
        Ok(outcome)
    }

    /// Run `count` cycles.
    pub fn run_for(&mut self, count: u32) -> anyhow::Result<()> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    #[cfg(test)]
    pub fn sensor(&mut self) -> &mut R {
        self.accel.registers()
    }

    pub fn into_parts(self) -> (Accelerometer<R>, Console<W>, P) {
        (self.accel, self.console, self.pacer)
    }
}

/// Fast sampling while an event is in progress, slow otherwise.
pub fn sample_interval(active: bool) -> Duration {
    if active {
        Duration::from_millis(EVENT_SAMPLE_INTERVAL_MS)
    } else {
        Duration::from_millis(IDLE_SAMPLE_INTERVAL_MS)
    }
}

/// Print the boot banner and sample forever.  Returns only on a console error.
pub fn monitor_task<R, W, P>(
    accel: Accelerometer<R>,
    mut console: Console<W>,
    pacer: P,
) -> anyhow::Result<()>
where
    R: RegisterBlock,
    W: Write,
    P: Pacer,
{
    log::info!("Monitor task started");
    console.startup().context("writing startup banner")?;

    let mut monitor = Monitor::new(accel, console, pacer);
    loop {
        monitor.step()?;
    }
}
