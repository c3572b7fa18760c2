// QuakeWatch: Sample Pacing
//
// The monitor loop ends every cycle with a pause whose length depends on the
// detector state.  The pause is a plain wait: nothing is polled or cancelled.

use std::thread;
use std::time::Duration;

pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread (a FreeRTOS task on ESP-IDF).
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Returns immediately, recording what was requested.  Used by tests and
/// by host runs that want the whole scenario at once.
#[derive(Debug, Default)]
pub struct NoDelay {
    pub pauses: Vec<Duration>,
}

impl Pacer for NoDelay {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Tick-accurate FreeRTOS delay.
#[cfg(target_os = "espidf")]
pub struct FreeRtosPacer;

#[cfg(target_os = "espidf")]
impl Pacer for FreeRtosPacer {
    fn pause(&mut self, duration: Duration) {
        esp_idf_hal::delay::FreeRtos::delay_ms(duration.as_millis() as u32);
    }
}
