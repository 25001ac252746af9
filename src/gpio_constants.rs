// GPIO character device (v1 ABI) request codes, from linux/gpio.h
//
// The structs only exist so size_of gives the same payload sizes the kernel
// header encodes. Nothing here is ever passed to a real ioctl.

use core::mem::size_of;

use nix::{request_code_read, request_code_readwrite};

pub const GPIO_IOC_MAGIC: u32 = 0xB4;
pub const GPIOHANDLES_MAX: usize = 64;
pub const GPIO_MAX_NAME_SIZE: usize = 32;

// struct gpiochip_info
#[repr(C)]
pub struct GpioChipInfo {
    pub name: [u8; GPIO_MAX_NAME_SIZE],
    pub label: [u8; GPIO_MAX_NAME_SIZE],
    pub lines: u32,
}

// struct gpioline_info
#[repr(C)]
pub struct GpioLineInfo {
    pub line_offset: u32,
    pub flags: u32,
    pub name: [u8; GPIO_MAX_NAME_SIZE],
    pub consumer: [u8; GPIO_MAX_NAME_SIZE],
}

// struct gpiohandle_request
#[repr(C)]
pub struct GpioHandleRequest {
    pub lineoffsets: [u32; GPIOHANDLES_MAX],
    pub flags: u32,
    pub default_values: [u8; GPIOHANDLES_MAX],
    pub consumer_label: [u8; GPIO_MAX_NAME_SIZE],
    pub lines: u32,
    pub fd: i32,
}

// struct gpioevent_request
#[repr(C)]
pub struct GpioEventRequest {
    pub lineoffset: u32,
    pub handleflags: u32,
    pub eventflags: u32,
    pub consumer_label: [u8; GPIO_MAX_NAME_SIZE],
    pub fd: i32,
}

// struct gpiohandle_data
#[repr(C)]
pub struct GpioHandleData {
    pub values: [u8; GPIOHANDLES_MAX],
}

// Sizes fixed by the uapi header, a mismatch here means the codes below are wrong
const _: () = assert!(size_of::<GpioChipInfo>() == 68);
const _: () = assert!(size_of::<GpioLineInfo>() == 72);
const _: () = assert!(size_of::<GpioHandleRequest>() == 364);
const _: () = assert!(size_of::<GpioEventRequest>() == 48);
const _: () = assert!(size_of::<GpioHandleData>() == 64);

// ---- CHIP ----
pub const GPIO_GET_CHIPINFO_IOCTL: u32 =
    request_code_read!(GPIO_IOC_MAGIC, 0x01, size_of::<GpioChipInfo>()) as u32;
pub const GPIO_GET_LINEINFO_IOCTL: u32 =
    request_code_readwrite!(GPIO_IOC_MAGIC, 0x02, size_of::<GpioLineInfo>()) as u32;
pub const GPIO_GET_LINEHANDLE_IOCTL: u32 =
    request_code_readwrite!(GPIO_IOC_MAGIC, 0x03, size_of::<GpioHandleRequest>()) as u32;
pub const GPIO_GET_LINEEVENT_IOCTL: u32 =
    request_code_readwrite!(GPIO_IOC_MAGIC, 0x04, size_of::<GpioEventRequest>()) as u32;

// ---- LINE HANDLE ----
pub const GPIOHANDLE_GET_LINE_VALUES_IOCTL: u32 =
    request_code_readwrite!(GPIO_IOC_MAGIC, 0x08, size_of::<GpioHandleData>()) as u32;
pub const GPIOHANDLE_SET_LINE_VALUES_IOCTL: u32 =
    request_code_readwrite!(GPIO_IOC_MAGIC, 0x09, size_of::<GpioHandleData>()) as u32;
