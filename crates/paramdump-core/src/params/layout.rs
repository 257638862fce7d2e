pub const MAGIC: &[u8; 8] = b"\xff\xff\x00\x00\x00\x00\x00\x00";

pub const GROUP_TAG_OFFSET: usize = 8;
pub const GROUP_LEN_OFFSET: usize = 9;
pub const VALUES_OFFSET: usize = 13;

pub const GROUP_TAG: u8 = 0x20;
pub const GROUP_LEN_WIDTH: usize = 4;

pub const TAG_UINT8: u8 = 0x01;
pub const TAG_INT8: u8 = 0x02;
pub const TAG_UINT16: u8 = 0x03;
pub const TAG_INT16: u8 = 0x04;
pub const TAG_UINT32: u8 = 0x05;
pub const TAG_INT32: u8 = 0x06;
pub const TAG_FLOAT32: u8 = 0x07;
pub const TAG_STR: u8 = 0x08;

pub const MIN_LEN: usize = VALUES_OFFSET;
