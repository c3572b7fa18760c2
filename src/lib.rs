// QuakeWatch: seismic monitor firmware library
//
// Samples a memory-mapped 3-axis accelerometer, tracks a rolling STA/LTA
// ratio and turns strong or sudden motion into discrete earthquake events
// reported over the console UART.

pub mod config;
pub mod detector;
pub mod drivers;
pub mod events;
pub mod report;
pub mod tasks;
