// QuakeWatch: UART Console Sink
//
// The console UART takes one byte per write to its data register.  There is
// no FIFO status to poll on this board, so writes never block or fail.

use std::io;

use crate::drivers::registers::RegisterBlock;

const REG_DATA: usize = 0x00;

pub struct Uart<R> {
    regs: R,
}

impl<R: RegisterBlock> Uart<R> {
    pub fn new(regs: R) -> Self {
        Self { regs }
    }
}

impl<R: RegisterBlock> io::Write for Uart<R> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            self.regs.write(REG_DATA, byte as u32);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Default)]
    struct Capture {
        bytes: Vec<(usize, u32)>,
    }

    impl RegisterBlock for Capture {
        fn read(&mut self, _offset: usize) -> u32 {
            0
        }

        fn write(&mut self, offset: usize, value: u32) {
            self.bytes.push((offset, value));
        }
    }

    #[test]
    fn each_byte_is_one_data_register_write() {
        let mut capture = Capture::default();
        let mut uart = Uart::new(&mut capture);
        write!(uart, "ok\r\n").unwrap();

        assert_eq!(
            capture.bytes,
            vec![(0, b'o' as u32), (0, b'k' as u32), (0, b'\r' as u32), (0, b'\n' as u32)]
        );
    }
}
