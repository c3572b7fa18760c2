// QuakeWatch: end-to-end run of the scripted quake scenario

use quakewatch::config::*;
use quakewatch::drivers::accel::Accelerometer;
use quakewatch::drivers::sim::{QuakeScenario, ScriptedSensor};
use quakewatch::drivers::timer::NoDelay;
use quakewatch::events::{AlertLevel, EventSummary, Transition};
use quakewatch::report::Console;
use quakewatch::tasks::monitor::{sample_interval, Monitor};

struct Run {
    text: String,
    summaries: Vec<EventSummary>,
    pauses: Vec<std::time::Duration>,
    active_samples: u32,
}

fn run_demo() -> Run {
    let sensor = ScriptedSensor::new(QuakeScenario::demo(SIM_NOISE_SEED));
    let mut monitor = Monitor::new(
        Accelerometer::new(sensor),
        Console::new(Vec::new()),
        NoDelay::default(),
    );

    let mut summaries = Vec::new();
    let mut active_samples = 0;
    for _ in 0..SIM_SAMPLE_COUNT {
        let outcome = monitor.step().unwrap();
        if outcome.in_event {
            active_samples += 1;
        }
        if let Some(Transition::Exited(summary)) = outcome.transition {
            summaries.push(summary);
        }
    }
    assert!(!monitor.detector().is_active());
    assert_eq!(monitor.detector().total_events(), 2);
    assert_eq!(monitor.detector().max_recorded(), 172);

    let (_, console, pacer) = monitor.into_parts();
    Run {
        text: String::from_utf8(console.into_inner()).unwrap(),
        summaries,
        pauses: pacer.pauses,
        active_samples,
    }
}

#[test]
fn main_shock_and_aftershock_are_two_events() {
    let run = run_demo();

    assert_eq!(
        run.summaries,
        vec![
            EventSummary {
                peak: 172,
                duration: 106,
                level: AlertLevel::Extreme,
                total_events: 1,
                new_maximum: true,
            },
            EventSummary {
                peak: 47,
                duration: 25,
                level: AlertLevel::Minor,
                total_events: 2,
                new_maximum: false,
            },
        ]
    );
    assert_eq!(
        run.active_samples,
        run.summaries.iter().map(|s| s.duration).sum::<u32>()
    );
}

#[test]
fn console_transcript_has_every_block() {
    let run = run_demo();
    let text = &run.text;

    assert_eq!(text.matches("|     ! MINOR SEISMIC ACTIVITY !        |").count(), 2);
    assert_eq!(text.matches("EVENT SUMMARY").count(), 2);
    assert_eq!(text.matches("*** NEW MAXIMUM RECORDED ***").count(), 1);
    assert!(text.contains("| Peak Magnitude: 172\r\n| Duration: 106 samples\r\n"));
    assert!(text.contains("| Classification: MINOR\r\n| Total Events: 2\r\n"));
    assert!(text.contains("[EXTREME] \r\n"));
    assert!(text.contains("*** INTENSITY INCREASING ***"));

    assert!(text.contains(" [200 samples, 0 events]\r\n"));
    assert!(text.contains(" [400 samples, 1 events]\r\n"));
    assert!(text.contains(" [1200 samples, 2 events]\r\n"));
    assert_eq!(
        text.lines().filter(|l| l.starts_with("  X:")).count() as u32,
        run.active_samples
    );
}

#[test]
fn sampling_speeds_up_only_during_events() {
    let run = run_demo();
    let fast = run
        .pauses
        .iter()
        .filter(|&&d| d == sample_interval(true))
        .count() as u32;

    assert_eq!(run.pauses.len() as u32, SIM_SAMPLE_COUNT);
    // The exit sample of each event already pauses at the idle rate.
    assert_eq!(fast, run.active_samples - run.summaries.len() as u32);
}
