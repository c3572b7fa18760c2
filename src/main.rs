// QuakeWatch: Firmware Entry Point
//
// Boot sequence:
//   1. Initialise logging.
//   2. Claim the sensor and UART register blocks.
//   3. Print the startup banner.
//   4. Run the monitor task forever on its own thread.
//
// Host builds run the same loop against a scripted quake scenario for a
// fixed number of samples and then exit.

use std::thread;

use anyhow::anyhow;

use quakewatch::config::*;
use quakewatch::drivers::accel::Accelerometer;
use quakewatch::report::Console;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------
fn main() -> anyhow::Result<()> {
    init_logging();
    log::info!("QuakeWatch firmware starting");

    let monitor = thread::Builder::new()
        .name("monitor".into())
        .stack_size(STACK_MONITOR)
        .spawn(run)?;

    monitor
        .join()
        .map_err(|_| anyhow!("monitor task panicked"))?
}

// ---------------------------------------------------------------------------
// Target: ESP-IDF (RISC-V)
// ---------------------------------------------------------------------------
#[cfg(target_os = "espidf")]
fn init_logging() {
    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
}

#[cfg(target_os = "espidf")]
fn run() -> anyhow::Result<()> {
    use quakewatch::drivers::registers::MmioBlock;
    use quakewatch::drivers::timer::FreeRtosPacer;
    use quakewatch::drivers::uart::Uart;
    use quakewatch::tasks::monitor::monitor_task;

    // SAFETY: both blocks are fixed peripherals on this board and this is
    // the only place they are claimed.
    let (sensor, uart) = unsafe { (MmioBlock::new(SENSOR_BASE), MmioBlock::new(UART_BASE)) };

    monitor_task(
        Accelerometer::new(sensor),
        Console::new(Uart::new(uart)),
        FreeRtosPacer,
    )
}

// ---------------------------------------------------------------------------
// Target: host simulation
// ---------------------------------------------------------------------------
#[cfg(not(target_os = "espidf"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(target_os = "espidf"))]
fn run() -> anyhow::Result<()> {
    use quakewatch::drivers::sim::{QuakeScenario, ScriptedSensor};
    use quakewatch::drivers::timer::ThreadPacer;
    use quakewatch::tasks::monitor::Monitor;

    let sensor = ScriptedSensor::new(QuakeScenario::demo(SIM_NOISE_SEED));
    let mut console = Console::new(std::io::stdout().lock());
    console.startup()?;

    let mut monitor = Monitor::new(Accelerometer::new(sensor), console, ThreadPacer);
    monitor.run_for(SIM_SAMPLE_COUNT)?;

    log::info!(
        "Simulation finished: {} samples, {} events, max magnitude {}",
        monitor.samples(),
        monitor.detector().total_events(),
        monitor.detector().max_recorded()
    );
    Ok(())
}
