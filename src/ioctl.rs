// Field decoders for ioctl request codes
//
// nix builds request codes but has no way to take one apart again. These
// read the fields back out using the same per-arch layout nix encodes with,
// so dir and size are 2/14 bits on most targets and 3/13 on powerpc, mips
// and sparc.
#![allow(non_snake_case)]

use nix::sys::ioctl;

pub const _IOC_NONE: u32 = ioctl::NONE as u32;
pub const _IOC_READ: u32 = ioctl::READ as u32;
pub const _IOC_WRITE: u32 = ioctl::WRITE as u32;

pub const _IOC_SIZEBITS: u32 = ioctl::SIZEBITS as u32;
pub const _IOC_DIRBITS: u32 = ioctl::DIRBITS as u32;

pub const _IOC_NRMASK: u32 = ioctl::NRMASK as u32;
pub const _IOC_TYPEMASK: u32 = ioctl::TYPEMASK as u32;
pub const _IOC_SIZEMASK: u32 = ioctl::SIZEMASK as u32;
pub const _IOC_DIRMASK: u32 = ioctl::DIRMASK as u32;

pub const _IOC_NRSHIFT: u32 = ioctl::NRSHIFT as u32;
pub const _IOC_TYPESHIFT: u32 = ioctl::TYPESHIFT as u32;
pub const _IOC_SIZESHIFT: u32 = ioctl::SIZESHIFT as u32;
pub const _IOC_DIRSHIFT: u32 = ioctl::DIRSHIFT as u32;

/// Get the direction bits of an ioctl number.
pub const fn _IOC_DIR(cmd: u32) -> u32 {
    (cmd >> _IOC_DIRSHIFT) & _IOC_DIRMASK
}

/// Get the type byte of an ioctl number.
pub const fn _IOC_TYPE(cmd: u32) -> u32 {
    (cmd >> _IOC_TYPESHIFT) & _IOC_TYPEMASK
}

/// Get the command number of an ioctl number.
pub const fn _IOC_NR(cmd: u32) -> u32 {
    (cmd >> _IOC_NRSHIFT) & _IOC_NRMASK
}

/// Get the payload size of an ioctl number.
pub const fn _IOC_SIZE(cmd: u32) -> usize {
    ((cmd >> _IOC_SIZESHIFT) & _IOC_SIZEMASK) as usize
}
