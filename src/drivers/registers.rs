// QuakeWatch: Register Block Access
//
// Every peripheral in this firmware is a block of 32-bit registers.  Drivers
// talk to it through `RegisterBlock` so the detector can run against the
// simulated block on a host.

/// Word-wide register access at byte offsets from a block base.
pub trait RegisterBlock {
    fn read(&mut self, offset: usize) -> u32;
    fn write(&mut self, offset: usize, value: u32);
}

impl<R: RegisterBlock + ?Sized> RegisterBlock for &mut R {
    fn read(&mut self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    fn write(&mut self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}

/// Memory-mapped register block at a fixed physical address.
pub struct MmioBlock {
    base: usize,
}

impl MmioBlock {
    /// # Safety
    /// `base` must be the address of a mapped peripheral whose registers are
    /// valid for volatile 32-bit access at every offset the caller uses, and
    /// no other owner may exist for the same block.
    pub unsafe fn new(base: usize) -> Self {
        Self { base }
    }
}

impl RegisterBlock for MmioBlock {
    fn read(&mut self, offset: usize) -> u32 {
        // SAFETY: guaranteed by the contract of `MmioBlock::new`.
        unsafe { core::ptr::read_volatile((self.base + offset) as *const u32) }
    }

    fn write(&mut self, offset: usize, value: u32) {
        // SAFETY: guaranteed by the contract of `MmioBlock::new`.
        unsafe { core::ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }
}
