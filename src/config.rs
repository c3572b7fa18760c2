// QuakeWatch: Hardware & System Configuration
// Target: RISC-V board with a memory-mapped 3-axis accelerometer block

// ---------------------------------------------------------------------------
// Memory Map
// ---------------------------------------------------------------------------
pub const UART_BASE: usize = 0x1000_0000;
pub const SENSOR_BASE: usize = 0x2000_0000;

// ---------------------------------------------------------------------------
// Sensor Register Offsets (all 32-bit, native width)
// ---------------------------------------------------------------------------
pub const REG_X_AXIS: usize = 0x00;
pub const REG_Y_AXIS: usize = 0x04;
pub const REG_Z_AXIS: usize = 0x08;
pub const REG_STATUS: usize = 0x0C;
pub const REG_PEAK: usize = 0x10;    // write 0 to reset, read accumulated peak
pub const REG_COUNTER: usize = 0x14;

// ---------------------------------------------------------------------------
// Status Register Bits
// ---------------------------------------------------------------------------
pub const STATUS_DATA_READY: u32 = 0x01;
pub const STATUS_QUAKE_ACTIVE: u32 = 0x02;
pub const STATUS_THRESHOLD: u32 = 0x04;

// ---------------------------------------------------------------------------
// Magnitude
// ---------------------------------------------------------------------------
pub const GRAVITY_BASELINE: i32 = 1000; // one g in sensor units, Z axis only

// ---------------------------------------------------------------------------
// Classification Thresholds (inclusive lower bounds)
// ---------------------------------------------------------------------------
pub const THRESHOLD_MINOR: u32 = 30;
pub const THRESHOLD_MODERATE: u32 = 60;
pub const THRESHOLD_SEVERE: u32 = 100;
pub const THRESHOLD_EXTREME: u32 = 150;

// ---------------------------------------------------------------------------
// STA/LTA Detection
// ---------------------------------------------------------------------------
pub const MAGNITUDE_WINDOW: usize = 32;  // LTA span, ring capacity
pub const STA_WINDOW: usize = 4;
pub const WINDOW_BASELINE_FILL: u32 = 5; // suppresses boot-time triggers
pub const RATIO_ENTER: u32 = 3;
pub const RATIO_EXIT: u32 = 2;

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_MONITOR: usize = 8192;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------
pub const IDLE_SAMPLE_INTERVAL_MS: u64 = 50;  // ~20 Hz while quiet
pub const EVENT_SAMPLE_INTERVAL_MS: u64 = 10; // ~100 Hz during an event
pub const HEARTBEAT_INTERVAL: u32 = 20;       // samples per '.'
pub const HEARTBEAT_SUMMARY_INTERVAL: u32 = HEARTBEAT_INTERVAL * 10;

// ---------------------------------------------------------------------------
// Host Simulation
// ---------------------------------------------------------------------------
pub const SIM_SAMPLE_COUNT: u32 = 1200;
pub const SIM_NOISE_SEED: u32 = 0x5EED_1234;
