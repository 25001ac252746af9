// Table of reported request codes and the line format they are printed in

use std::fmt;
use std::io::Write;

use log::debug;

use crate::error::Result;
use crate::gpio_constants::*;
use crate::spi_constants::*;

/// Width the name column is padded to.
pub const NAME_WIDTH: usize = 40;

/// A named request code, as it appears in C source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantEntry {
    pub name: &'static str,
    pub value: u32,
}

impl fmt::Display for ConstantEntry {
    // e.g. "SPI_IOC_RD_MODE                         = 0x80016B01"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$}= 0x{:08X}",
            self.name,
            self.value,
            width = NAME_WIDTH
        )
    }
}

// Name the entry after the expression that produced it
macro_rules! entry {
    ($name:ident) => {
        ConstantEntry {
            name: stringify!($name),
            value: $name,
        }
    };
    ($name:ident($arg:literal)) => {
        ConstantEntry {
            name: concat!(stringify!($name), "(", stringify!($arg), ")"),
            value: $name($arg),
        }
    };
}

/// Every reported code, in output order.
pub static ENTRIES: &[ConstantEntry] = &[
    entry!(GPIO_GET_CHIPINFO_IOCTL),
    entry!(GPIO_GET_LINEINFO_IOCTL),
    entry!(GPIO_GET_LINEHANDLE_IOCTL),
    entry!(GPIO_GET_LINEEVENT_IOCTL),
    entry!(GPIOHANDLE_GET_LINE_VALUES_IOCTL),
    entry!(GPIOHANDLE_SET_LINE_VALUES_IOCTL),
    entry!(SPI_IOC_MESSAGE(0)),
    entry!(SPI_IOC_MESSAGE(1)),
    entry!(SPI_IOC_MESSAGE(2)),
    entry!(SPI_IOC_MESSAGE(16)),
    entry!(SPI_IOC_RD_MODE),
    entry!(SPI_IOC_WR_MODE),
    entry!(SPI_IOC_RD_LSB_FIRST),
    entry!(SPI_IOC_WR_LSB_FIRST),
    entry!(SPI_IOC_RD_BITS_PER_WORD),
    entry!(SPI_IOC_WR_BITS_PER_WORD),
    entry!(SPI_IOC_RD_MAX_SPEED_HZ),
    entry!(SPI_IOC_WR_MAX_SPEED_HZ),
    entry!(SPI_IOC_RD_MODE32),
    entry!(SPI_IOC_WR_MODE32),
];

/// Write one line per entry to `out`, then flush it.
pub fn write_report<W: Write>(out: &mut W) -> Result<()> {
    debug!("Writing {} ioctl codes", ENTRIES.len());

    for entry in ENTRIES {
        writeln!(out, "{entry}")?;
    }
    out.flush()?;
    Ok(())
}
