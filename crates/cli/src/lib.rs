//! Command implementations shared by the `eeprom-dump` and
//! `libtoupcam-patch` binaries

pub mod cmd;
pub mod util;
