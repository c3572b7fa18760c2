// QuakeWatch: Console Report Formats
//
// Everything the operator sees goes through `Console`: the boot banner,
// one line per sample while an event is active, alert and summary blocks,
// and the idle heartbeat.  Lines end in CR LF for the serial terminal.

use std::io::{self, Write};

use crate::config::*;
use crate::events::{AccelReading, AlertLevel, EventSummary, SampleOutcome};

const NL: &str = "\r\n";

pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Boot banner followed by the "armed" line.
    pub fn startup(&mut self) -> io::Result<()> {
        let rule = "+===================================================+";
        write!(self.out, "{NL}{rule}{NL}")?;
        write!(self.out, "|        EARTHQUAKE EARLY WARNING SYSTEM            |{NL}")?;
        write!(self.out, "|                 RISC-V Edition                    |{NL}")?;
        write!(self.out, "{rule}{NL}")?;
        write!(self.out, "|  Detection: STA/LTA Algorithm                     |{NL}")?;
        write!(self.out, "|  Sensor: 3-Axis Accelerometer @ {:#010x}        |{NL}", SENSOR_BASE)?;
        write!(self.out, "|  Thresholds:                                      |{NL}")?;
        write!(
            self.out,
            "|    Minor: {}  Moderate: {}  Severe: {}  Ext: {} |{NL}",
            THRESHOLD_MINOR, THRESHOLD_MODERATE, THRESHOLD_SEVERE, THRESHOLD_EXTREME
        )?;
        write!(self.out, "{rule}{NL}{NL}")?;
        write!(self.out, "System armed. Monitoring seismic activity...{NL}{NL}")?;
        self.out.flush()
    }

    /// Bordered block announcing a new event.
    pub fn alert(&mut self, level: AlertLevel) -> io::Result<()> {
        let rule = "+========================================+";
        let text = match level {
            AlertLevel::None     => "",
            AlertLevel::Minor    => "|     ! MINOR SEISMIC ACTIVITY !        |",
            AlertLevel::Moderate => "|    !! MODERATE EARTHQUAKE !!          |",
            AlertLevel::Severe   => "|   !!! SEVERE EARTHQUAKE !!!           |",
            AlertLevel::Extreme  => "|  !!!! EXTREME EARTHQUAKE !!!!         |",
        };
        write!(self.out, "{NL}{rule}{NL}{text}{NL}{rule}{NL}")
    }

    pub fn sample(&mut self, reading: &AccelReading, outcome: &SampleOutcome) -> io::Result<()> {
        write!(
            self.out,
            "  X:{:>5}  Y:{:>5}  Z:{:>5}  | Mag:{:>4}  | STA/LTA:{:>4}/{:>3}  {}{NL}",
            reading.x,
            reading.y,
            reading.z,
            reading.magnitude,
            outcome.sta,
            outcome.lta,
            outcome.level.tag()
        )
    }

    pub fn intensifying(&mut self) -> io::Result<()> {
        write!(self.out, "  *** INTENSITY INCREASING ***{NL}")
    }

    /// Summary block for a closed event, plus the new-maximum notice.
    pub fn summary(&mut self, summary: &EventSummary) -> io::Result<()> {
        write!(self.out, "{NL}+----------- EVENT SUMMARY -----------+{NL}")?;
        write!(self.out, "| Peak Magnitude: {}{NL}", summary.peak)?;
        write!(self.out, "| Duration: {} samples{NL}", summary.duration)?;
        write!(self.out, "| Classification: {}{NL}", summary.level.name())?;
        write!(self.out, "| Total Events: {}{NL}", summary.total_events)?;
        write!(self.out, "+-------------------------------------+{NL}{NL}")?;

        if summary.new_maximum {
            write!(self.out, "  *** NEW MAXIMUM RECORDED ***{NL}")?;
        }
        self.out.flush()
    }

    /// Idle liveness: a dot every `HEARTBEAT_INTERVAL` samples and a running
    /// tally every `HEARTBEAT_SUMMARY_INTERVAL`.
    pub fn heartbeat(&mut self, samples: u32, total_events: u32) -> io::Result<()> {
        if samples % HEARTBEAT_INTERVAL == 0 {
            write!(self.out, ".")?;
        }
        if samples % HEARTBEAT_SUMMARY_INTERVAL == 0 {
            write!(self.out, " [{} samples, {} events]{NL}", samples, total_events)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Console<Vec<u8>>) -> io::Result<()>) -> String {
        let mut console = Console::new(Vec::new());
        f(&mut console).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    fn outcome(sta: u32, lta: u32, level: AlertLevel) -> SampleOutcome {
        SampleOutcome {
            sta,
            lta,
            level,
            in_event: true,
            intensifying: false,
            transition: None,
            active_after: true,
        }
    }

    #[test]
    fn sample_line_columns() {
        let reading = AccelReading { x: -12, y: 3, z: 1090, magnitude: 95, status: 1 };
        let text = render(|c| c.sample(&reading, &outcome(61, 9, AlertLevel::Moderate)));

        assert_eq!(
            text,
            "  X:  -12  Y:    3  Z: 1090  | Mag:  95  | STA/LTA:  61/  9  [MODERATE]\r\n"
        );
    }

    #[test]
    fn sample_line_blank_tag_and_wide_values() {
        let reading = AccelReading { x: 123456, y: -99999, z: 0, magnitude: 12345, status: 0 };
        let text = render(|c| c.sample(&reading, &outcome(20, 1000, AlertLevel::None)));

        assert_eq!(
            text,
            "  X:123456  Y:-99999  Z:    0  | Mag:12345  | STA/LTA:  20/1000            \r\n"
        );
    }

    #[test]
    fn level_tags_are_ten_columns() {
        for level in [
            AlertLevel::None,
            AlertLevel::Minor,
            AlertLevel::Moderate,
            AlertLevel::Severe,
            AlertLevel::Extreme,
        ] {
            assert_eq!(level.tag().len(), 10);
        }
    }

    #[test]
    fn alert_banner_wording() {
        let text = render(|c| c.alert(AlertLevel::Severe));
        assert_eq!(
            text,
            "\r\n+========================================+\r\n\
             |   !!! SEVERE EARTHQUAKE !!!           |\r\n\
             +========================================+\r\n"
        );
    }

    #[test]
    fn summary_block_with_new_maximum() {
        let summary = EventSummary {
            peak: 172,
            duration: 88,
            level: AlertLevel::Extreme,
            total_events: 3,
            new_maximum: true,
        };
        let text = render(|c| c.summary(&summary));

        assert_eq!(
            text,
            "\r\n+----------- EVENT SUMMARY -----------+\r\n\
             | Peak Magnitude: 172\r\n\
             | Duration: 88 samples\r\n\
             | Classification: EXTREME\r\n\
             | Total Events: 3\r\n\
             +-------------------------------------+\r\n\r\n\
             \x20 *** NEW MAXIMUM RECORDED ***\r\n"
        );
    }

    #[test]
    fn heartbeat_cadence() {
        assert_eq!(render(|c| c.heartbeat(19, 0)), "");
        assert_eq!(render(|c| c.heartbeat(20, 0)), ".");
        assert_eq!(render(|c| c.heartbeat(200, 2)), ". [200 samples, 2 events]\r\n");
    }

    #[test]
    fn startup_names_sensor_and_thresholds() {
        let text = render(|c| c.startup());
        assert!(text.contains("|  Sensor: 3-Axis Accelerometer @ 0x20000000        |\r\n"));
        assert!(text.contains("|    Minor: 30  Moderate: 60  Severe: 100  Ext: 150 |\r\n"));
        assert!(text.ends_with("System armed. Monitoring seismic activity...\r\n\r\n"));
    }
}
