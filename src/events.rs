// QuakeWatch: Readings, Alert Levels & Detector Outcomes

use crate::config::*;

// ---------------------------------------------------------------------------
// Accelerometer Reading (one sampling cycle)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccelReading {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// Integer distance from the gravity-aligned rest vector.
    pub magnitude: u32,
    /// Raw status bitmask, informational only.
    pub status: u32,
}

impl AccelReading {
    pub fn data_ready(&self) -> bool {
        self.status & STATUS_DATA_READY != 0
    }

    pub fn quake_flagged(&self) -> bool {
        self.status & STATUS_QUAKE_ACTIVE != 0
    }

    pub fn threshold_flagged(&self) -> bool {
        self.status & STATUS_THRESHOLD != 0
    }
}

// ---------------------------------------------------------------------------
// Alert Level (ordered by severity)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum AlertLevel {
    #[default]
    None,
    Minor,
    Moderate,
    Severe,
    Extreme,
}

impl AlertLevel {
    /// Upper-case name used in the event summary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None     => "NONE",
            Self::Minor    => "MINOR",
            Self::Moderate => "MODERATE",
            Self::Severe   => "SEVERE",
            Self::Extreme  => "EXTREME",
        }
    }

    /// Fixed-width (10 column) tag appended to each sample line.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::None     => "          ",
            Self::Minor    => "[MINOR]   ",
            Self::Moderate => "[MODERATE]",
            Self::Severe   => "[SEVERE]  ",
            Self::Extreme  => "[EXTREME] ",
        }
    }
}

// ---------------------------------------------------------------------------
// Event Summary (produced on Active -> Idle)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSummary {
    pub peak: u32,
    /// Samples observed while Active, entry and exit samples included.
    pub duration: u32,
    pub level: AlertLevel,
    /// Lifetime event count at the time the event closed.
    pub total_events: u32,
    /// Peak strictly exceeded every earlier event since startup.
    pub new_maximum: bool,
}

// ---------------------------------------------------------------------------
// Detector Outcomes
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Active. `banner` is the level to announce (at least Minor).
    Entered { banner: AlertLevel },
    /// Active -> Idle.
    Exited(EventSummary),
}

/// Everything the sampling loop needs to report one processed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOutcome {
    pub sta: u32,
    /// Clamped to at least 1.
    pub lta: u32,
    pub level: AlertLevel,
    /// Detector was Active for this sample (including entry and exit samples).
    pub in_event: bool,
    /// Level rose above the previous sample's level and above Minor while Active.
    pub intensifying: bool,
    pub transition: Option<Transition>,
    /// Detector is still Active after this sample.
    pub active_after: bool,
}
