// QuakeWatch: Magnitude History & STA/LTA

use ringbuffer::{ConstGenericRingBuffer, RingBuffer};

use crate::config::*;

/// Fixed-capacity history of magnitudes, always full, overwritten oldest-first.
#[derive(Debug, Clone)]
pub struct MagnitudeWindow {
    ring: ConstGenericRingBuffer<u32, MAGNITUDE_WINDOW>,
}

impl MagnitudeWindow {
    /// Pre-filled with `fill` so the first samples after boot are compared
    /// against a quiet history.
    pub fn new(fill: u32) -> Self {
        let mut ring = ConstGenericRingBuffer::<u32, MAGNITUDE_WINDOW>::default();
        for _ in 0..MAGNITUDE_WINDOW {
            ring.push(fill);
        }
        Self { ring }
    }

    pub fn push(&mut self, magnitude: u32) {
        self.ring.push(magnitude);
    }

    /// The `k` most recent magnitudes, newest first.
    pub fn recent(&self, k: usize) -> impl Iterator<Item = u32> + '_ {
        self.ring.iter().rev().take(k).copied()
    }

    /// Every buffered magnitude, oldest first.
    pub fn all(&self) -> impl Iterator<Item = u32> + '_ {
        self.ring.iter().copied()
    }

    /// Short-term average: floor mean of the last `STA_WINDOW` magnitudes.
    pub fn sta(&self) -> u32 {
        self.recent(STA_WINDOW).sum::<u32>() / STA_WINDOW as u32
    }

    /// Long-term average over the whole window, clamped to at least 1 so it
    /// can be used as a ratio divisor.
    pub fn lta(&self) -> u32 {
        let mean = self.all().sum::<u32>() / MAGNITUDE_WINDOW as u32;
        mean.max(1)
    }
}

impl Default for MagnitudeWindow {
    fn default() -> Self {
        Self::new(WINDOW_BASELINE_FILL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_full_of_baseline() {
        let window = MagnitudeWindow::default();
        assert_eq!(window.all().count(), MAGNITUDE_WINDOW);
        assert!(window.all().all(|m| m == WINDOW_BASELINE_FILL));
        assert_eq!(window.sta(), WINDOW_BASELINE_FILL);
        assert_eq!(window.lta(), WINDOW_BASELINE_FILL);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut window = MagnitudeWindow::default();
        for m in [10, 20, 30, 40, 50] {
            window.push(m);
        }
        assert_eq!(window.recent(4).collect::<Vec<_>>(), vec![50, 40, 30, 20]);
        assert_eq!(window.all().count(), MAGNITUDE_WINDOW);
    }

    #[test]
    fn constant_fill_converges_both_averages() {
        let mut window = MagnitudeWindow::default();
        for _ in 0..MAGNITUDE_WINDOW {
            window.push(77);
        }
        assert_eq!(window.sta(), 77);
        assert_eq!(window.lta(), 77);
    }

    #[test]
    fn averages_use_floor_division() {
        let mut window = MagnitudeWindow::new(0);
        for m in [1, 2, 2, 2] {
            window.push(m);
        }
        // 7 / 4
        assert_eq!(window.sta(), 1);

        let mut window = MagnitudeWindow::new(3);
        window.push(34);
        // (31 * 3 + 34) / 32 = 127 / 32
        assert_eq!(window.lta(), 3);
    }

    #[test]
    fn silent_history_clamps_lta_to_one() {
        let window = MagnitudeWindow::new(0);
        assert_eq!(window.sta(), 0);
        assert_eq!(window.lta(), 1);
    }

    #[test]
    fn oldest_value_is_overwritten_first() {
        let mut window = MagnitudeWindow::new(0);
        window.push(64);
        assert_eq!(window.lta(), 2);
        for _ in 0..MAGNITUDE_WINDOW - 1 {
            window.push(0);
        }
        assert_eq!(window.lta(), 2);
        window.push(0);
        assert_eq!(window.lta(), 1);
    }
}
