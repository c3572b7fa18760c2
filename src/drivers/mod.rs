pub mod accel;
pub mod registers;
pub mod sim;
pub mod timer;
pub mod uart;
