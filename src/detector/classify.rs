// QuakeWatch: Magnitude Classifier

use crate::config::*;
use crate::events::AlertLevel;

/// Map a magnitude to its alert level; thresholds are inclusive lower bounds.
pub fn classify(magnitude: u32) -> AlertLevel {
    if magnitude >= THRESHOLD_EXTREME {
        AlertLevel::Extreme
    } else if magnitude >= THRESHOLD_SEVERE {
        AlertLevel::Severe
    } else if magnitude >= THRESHOLD_MODERATE {
        AlertLevel::Moderate
    } else if magnitude >= THRESHOLD_MINOR {
        AlertLevel::Minor
    } else {
        AlertLevel::None
    }
}
