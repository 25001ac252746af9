//! Linux GPIO and spidev ioctl request codes, computed the way the kernel
//! headers pack them, plus the table the `ioctl-codes` binary prints.

pub mod error;
pub mod gpio_constants;
pub mod ioctl;
pub mod report;
pub mod spi_constants;
