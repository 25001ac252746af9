// spidev request codes, from linux/spi/spidev.h

use core::mem::size_of;

use nix::{request_code_read, request_code_write};

use crate::ioctl::_IOC_SIZEBITS;

pub const SPI_IOC_MAGIC: u32 = b'k' as u32;

/// One segment of a full-duplex transfer (struct spi_ioc_transfer).
#[repr(C)]
pub struct SpiIocTransfer {
    pub tx_buf: u64,
    pub rx_buf: u64,
    pub len: u32,
    pub speed_hz: u32,
    pub delay_usecs: u16,
    pub bits_per_word: u8,
    pub cs_change: u8,
    pub tx_nbits: u8,
    pub rx_nbits: u8,
    pub word_delay_usecs: u8,
    pub pad: u8,
}

const _: () = assert!(size_of::<SpiIocTransfer>() == 32);

/// Payload size of an `n` segment message, or 0 when it can't be encoded.
#[allow(non_snake_case)]
pub const fn SPI_MSGSIZE(n: usize) -> usize {
    let size = n.saturating_mul(size_of::<SpiIocTransfer>());
    if size < (1 << _IOC_SIZEBITS) {
        size
    } else {
        0
    }
}

/// Request code for submitting `n` transfers in one call.
#[allow(non_snake_case)]
pub const fn SPI_IOC_MESSAGE(n: usize) -> u32 {
    request_code_write!(SPI_IOC_MAGIC, 0, SPI_MSGSIZE(n)) as u32
}

// ---- CLOCK MODE (u8, SPI_MODE_0..3 plus flags) ----
pub const SPI_IOC_RD_MODE: u32 = request_code_read!(SPI_IOC_MAGIC, 1, size_of::<u8>()) as u32;
pub const SPI_IOC_WR_MODE: u32 = request_code_write!(SPI_IOC_MAGIC, 1, size_of::<u8>()) as u32;

// ---- BIT ORDER ----
pub const SPI_IOC_RD_LSB_FIRST: u32 = request_code_read!(SPI_IOC_MAGIC, 2, size_of::<u8>()) as u32;
pub const SPI_IOC_WR_LSB_FIRST: u32 = request_code_write!(SPI_IOC_MAGIC, 2, size_of::<u8>()) as u32;

// ---- WORD SIZE ----
pub const SPI_IOC_RD_BITS_PER_WORD: u32 =
    request_code_read!(SPI_IOC_MAGIC, 3, size_of::<u8>()) as u32;
pub const SPI_IOC_WR_BITS_PER_WORD: u32 =
    request_code_write!(SPI_IOC_MAGIC, 3, size_of::<u8>()) as u32;

// ---- CLOCK SPEED (Hz) ----
pub const SPI_IOC_RD_MAX_SPEED_HZ: u32 =
    request_code_read!(SPI_IOC_MAGIC, 4, size_of::<u32>()) as u32;
pub const SPI_IOC_WR_MAX_SPEED_HZ: u32 =
    request_code_write!(SPI_IOC_MAGIC, 4, size_of::<u32>()) as u32;

// ---- FULL MODE WORD (u32) ----
pub const SPI_IOC_RD_MODE32: u32 = request_code_read!(SPI_IOC_MAGIC, 5, size_of::<u32>()) as u32;
pub const SPI_IOC_WR_MODE32: u32 = request_code_write!(SPI_IOC_MAGIC, 5, size_of::<u32>()) as u32;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ioctl::{
        _IOC_DIR, _IOC_DIRMASK, _IOC_DIRSHIFT, _IOC_NR, _IOC_READ, _IOC_SIZE, _IOC_SIZEMASK,
        _IOC_SIZESHIFT, _IOC_WRITE,
    };

    #[test]
    fn message_size_scales_with_count() {
        for n in [0, 1, 2, 16] {
            assert_eq!(_IOC_SIZE(SPI_IOC_MESSAGE(n)), n * 32);
            assert_eq!(_IOC_NR(SPI_IOC_MESSAGE(n)), 0);
            assert_eq!(_IOC_DIR(SPI_IOC_MESSAGE(n)), _IOC_WRITE);
        }
    }

    #[test]
    fn message_codes_differ_only_in_size() {
        let size_field = _IOC_SIZEMASK << _IOC_SIZESHIFT;
        let base = SPI_IOC_MESSAGE(0);

        for n in [1, 2, 16] {
            let cmd = SPI_IOC_MESSAGE(n);
            assert_ne!(cmd, base);
            assert_eq!(cmd & !size_field, base);
        }
        assert!(SPI_IOC_MESSAGE(16) > SPI_IOC_MESSAGE(2));
        assert!(SPI_IOC_MESSAGE(2) > SPI_IOC_MESSAGE(1));
    }

    #[test]
    fn oversize_message_encodes_zero_size() {
        let too_many = (1 << _IOC_SIZEBITS) / 32;

        assert_eq!(SPI_MSGSIZE(too_many), 0);
        assert_eq!(SPI_IOC_MESSAGE(too_many), SPI_IOC_MESSAGE(0));
        assert_eq!(SPI_MSGSIZE(usize::MAX), 0);
    }

    #[test]
    fn read_write_pairs() {
        let dir_mask = _IOC_DIRMASK << _IOC_DIRSHIFT;
        for (rd, wr) in [
            (SPI_IOC_RD_MODE, SPI_IOC_WR_MODE),
            (SPI_IOC_RD_LSB_FIRST, SPI_IOC_WR_LSB_FIRST),
            (SPI_IOC_RD_BITS_PER_WORD, SPI_IOC_WR_BITS_PER_WORD),
            (SPI_IOC_RD_MAX_SPEED_HZ, SPI_IOC_WR_MAX_SPEED_HZ),
            (SPI_IOC_RD_MODE32, SPI_IOC_WR_MODE32),
        ] {
            assert_eq!(_IOC_DIR(rd), _IOC_READ);
            assert_eq!(_IOC_DIR(wr), _IOC_WRITE);
            assert_eq!(rd & !dir_mask, wr & !dir_mask);
        }
    }

    #[cfg(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "arm",
        target_arch = "x86",
        target_arch = "riscv64"
    ))]
    #[test]
    fn matches_published_values() {
        for n in [0, 1, 2, 16] {
            assert_eq!(SPI_IOC_MESSAGE(n), 0x4000_6B00 + (((n as u32) * 32) << 16));
        }
        assert_eq!(SPI_IOC_MESSAGE(16), 0x4200_6B00);

        assert_eq!(SPI_IOC_RD_MODE, 0x8001_6B01);
        assert_eq!(SPI_IOC_WR_MODE, 0x4001_6B01);
        assert_eq!(SPI_IOC_RD_LSB_FIRST, 0x8001_6B02);
        assert_eq!(SPI_IOC_WR_LSB_FIRST, 0x4001_6B02);
        assert_eq!(SPI_IOC_RD_BITS_PER_WORD, 0x8001_6B03);
        assert_eq!(SPI_IOC_WR_BITS_PER_WORD, 0x4001_6B03);
        assert_eq!(SPI_IOC_RD_MAX_SPEED_HZ, 0x8004_6B04);
        assert_eq!(SPI_IOC_WR_MAX_SPEED_HZ, 0x4004_6B04);
        assert_eq!(SPI_IOC_RD_MODE32, 0x8004_6B05);
        assert_eq!(SPI_IOC_WR_MODE32, 0x4004_6B05);
    }
}
