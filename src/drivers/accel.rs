// QuakeWatch: 3-Axis Accelerometer Driver
//
// Register-level reader for the seismic sensor block.  Produces one
// `AccelReading` per call with the magnitude already derived.

use crate::config::*;
use crate::drivers::registers::RegisterBlock;
use crate::events::AccelReading;

pub struct Accelerometer<R> {
    regs: R,
}

impl<R: RegisterBlock> Accelerometer<R> {
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Read X, Y, Z and status (in that order) and derive the magnitude.
    pub fn read(&mut self) -> AccelReading {
        let x = self.regs.read(REG_X_AXIS) as i32;
        let y = self.regs.read(REG_Y_AXIS) as i32;
        let z = self.regs.read(REG_Z_AXIS) as i32;
        let status = self.regs.read(REG_STATUS);

        AccelReading {
            x,
            y,
            z,
            magnitude: magnitude(x, y, z),
            status,
        }
    }

    /// Clear the hardware peak accumulator.
    pub fn reset_peak(&mut self) {
        self.regs.write(REG_PEAK, 0);
    }

    /// Peak accumulated by the hardware since the last reset.
    pub fn peak(&mut self) -> u32 {
        self.regs.read(REG_PEAK)
    }

    pub fn sample_counter(&mut self) -> u32 {
        self.regs.read(REG_COUNTER)
    }

    #[cfg(test)]
    pub fn registers(&mut self) -> &mut R {
        &mut self.regs
    }
}

/// Distance of `(x, y, z)` from the rest vector `(0, 0, GRAVITY_BASELINE)`.
///
/// The squared deltas are summed in 32 bits and wrap, so deltas beyond
/// roughly 37,000 units per axis produce a meaningless magnitude.
pub fn magnitude(x: i32, y: i32, z: i32) -> u32 {
    let dx = x.unsigned_abs();
    let dy = y.unsigned_abs();
    let dz = z.wrapping_sub(GRAVITY_BASELINE).unsigned_abs();

    let sum = dx
        .wrapping_mul(dx)
        .wrapping_add(dy.wrapping_mul(dy))
        .wrapping_add(dz.wrapping_mul(dz));
    isqrt(sum)
}

/// Floor square root by Newton's iteration, starting from `n`.
pub fn isqrt(n: u32) -> u32 {
    if n == 0 {
        return 0;
    }

    // (n + 1) / 2 without overflowing at u32::MAX
    let mut x = n;
    let mut y = n / 2 + (n & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
