// QuakeWatch: Simulated Sensor Block
//
// Host stand-in for the accelerometer peripheral.  Behaves like the real
// register block: reading X latches a new conversion, bumps the hardware
// counter and feeds the peak accumulator; writing 0 to the peak register
// clears it.

use crate::config::*;
use crate::drivers::accel::magnitude;
use crate::drivers::registers::RegisterBlock;

#[derive(Debug, Clone, Default)]
pub struct SimulatedSensor {
    x: i32,
    y: i32,
    z: i32,
    status: u32,
    peak: u32,
    counter: u32,
    peak_resets: u32,
}

impl SimulatedSensor {
    /// Sensor at rest: one g on Z, data ready.
    pub fn new() -> Self {
        Self {
            z: GRAVITY_BASELINE,
            status: STATUS_DATA_READY,
            ..Default::default()
        }
    }

    pub fn set_axes(&mut self, x: i32, y: i32, z: i32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn set_status(&mut self, status: u32) {
        self.status = status;
    }

    /// Number of times firmware wrote the peak register.
    pub fn peak_resets(&self) -> u32 {
        self.peak_resets
    }
}

impl RegisterBlock for SimulatedSensor {
    fn read(&mut self, offset: usize) -> u32 {
        match offset {
            REG_X_AXIS => {
                self.counter = self.counter.wrapping_add(1);
                self.peak = self.peak.max(magnitude(self.x, self.y, self.z));
                self.x as u32
            }
            REG_Y_AXIS => self.y as u32,
            REG_Z_AXIS => self.z as u32,
            REG_STATUS => self.status,
            REG_PEAK => self.peak,
            REG_COUNTER => self.counter,
            _ => 0,
        }
    }

    fn write(&mut self, offset: usize, value: u32) {
        if offset == REG_PEAK && value == 0 {
            self.peak = 0;
            self.peak_resets += 1;
        } else {
            log::warn!("sim: ignored write {:#x} to offset {:#04x}", value, offset);
        }
    }
}

// ---------------------------------------------------------------------------
// Scripted ground motion
// ---------------------------------------------------------------------------

/// One shaking episode: onset sample, P-wave length, S-wave length, coda
/// length, and S-wave amplitude in sensor units.
#[derive(Debug, Clone, Copy)]
pub struct Quake {
    pub onset: u32,
    pub p_len: u32,
    pub s_len: u32,
    pub coda_len: u32,
    pub amplitude: i32,
}

impl Quake {
    fn end(&self) -> u32 {
        self.onset + self.p_len + self.s_len + self.coda_len
    }

    /// Envelope amplitude at sample `n`, 0 outside the episode.
    fn envelope(&self, n: u32) -> i32 {
        if n < self.onset || n >= self.end() {
            return 0;
        }
        let t = (n - self.onset) as i32;
        let (p, s, coda) = (self.p_len as i32, self.s_len as i32, self.coda_len as i32);
        let p_amp = self.amplitude / 4;

        if t < p {
            p_amp * (t + 1) / p
        } else if t < p + s {
            self.amplitude
        } else {
            self.amplitude * (p + s + coda - t) / coda.max(1)
        }
    }
}

/// Deterministic background noise plus a list of quakes.
pub struct QuakeScenario {
    quakes: Vec<Quake>,
    sample: u32,
    rng: u32,
}

impl QuakeScenario {
    pub fn new(seed: u32, quakes: Vec<Quake>) -> Self {
        Self {
            quakes,
            sample: 0,
            rng: seed.max(1),
        }
    }

    /// A moderate-to-extreme main shock followed by a minor aftershock.
    pub fn demo(seed: u32) -> Self {
        Self::new(
            seed,
            vec![
                Quake { onset: 240, p_len: 20, s_len: 40, coda_len: 60, amplitude: 170 },
                Quake { onset: 820, p_len: 10, s_len: 15, coda_len: 25, amplitude: 45 },
            ],
        )
    }

    // xorshift32
    fn noise(&mut self) -> i32 {
        let mut v = self.rng;
        v ^= v << 13;
        v ^= v >> 17;
        v ^= v << 5;
        self.rng = v;
        (v % 5) as i32 - 2
    }

    /// Advance one sample and return the raw axis values.
    pub fn next_axes(&mut self) -> (i32, i32, i32) {
        let n = self.sample;
        self.sample += 1;

        let amp = self.quakes.iter().map(|q| q.envelope(n)).max().unwrap_or(0);
        // Alternate the sign of the shaking each sample, split over X and Z.
        let sign = if n % 2 == 0 { 1 } else { -1 };
        let x = sign * amp * 3 / 5 + self.noise();
        let y = self.noise();
        let z = GRAVITY_BASELINE - sign * amp * 4 / 5 + self.noise();
        (x, y, z)
    }

    pub fn is_shaking(&self) -> bool {
        self.quakes
            .iter()
            .any(|q| q.envelope(self.sample.saturating_sub(1)) > 0)
    }
}

/// Simulated block that latches a new scripted sample on every X read.
pub struct ScriptedSensor {
    sensor: SimulatedSensor,
    scenario: QuakeScenario,
}

impl ScriptedSensor {
    pub fn new(scenario: QuakeScenario) -> Self {
        Self {
            sensor: SimulatedSensor::new(),
            scenario,
        }
    }
}

impl RegisterBlock for ScriptedSensor {
    fn read(&mut self, offset: usize) -> u32 {
        if offset == REG_X_AXIS {
            let (x, y, z) = self.scenario.next_axes();
            self.sensor.set_axes(x, y, z);

            let mut status = STATUS_DATA_READY;
            if self.scenario.is_shaking() {
                status |= STATUS_QUAKE_ACTIVE;
            }
            if magnitude(x, y, z) >= THRESHOLD_MINOR {
                status |= STATUS_THRESHOLD;
            }
            self.sensor.set_status(status);
        }
        self.sensor.read(offset)
    }

    fn write(&mut self, offset: usize, value: u32) {
        self.sensor.write(offset, value)
    }
}
