// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The fixed palette used by the mini shorthands (eg: [`crate::mini::red()`]) and by the
//! pretty printer to color each kind of value.

use crate::RgbValue;

pub const RED: RgbValue = RgbValue::from_u8(0xff, 0x53, 0x47);
pub const GREEN: RgbValue = RgbValue::from_u8(0x57, 0xab, 0x57);
pub const BLUE: RgbValue = RgbValue::from_u8(0x4c, 0x4c, 0xe0);
pub const YELLOW: RgbValue = RgbValue::from_u8(0xe2, 0xe2, 0x70);
pub const MAGENTA: RgbValue = RgbValue::from_u8(0xd4, 0x26, 0xd4);
pub const CYAN: RgbValue = RgbValue::from_u8(0x2f, 0xde, 0xde);
pub const ORANGE: RgbValue = RgbValue::from_u8(0xff, 0x7f, 0x50);
pub const PURPLE: RgbValue = RgbValue::from_u8(0x95, 0x42, 0xe7);
pub const GRAY: RgbValue = RgbValue::from_u8(0x80, 0x80, 0x80);
