//! Palette - Raw hex values
//!
//! Kept free of GPUI types so style tables in `domain` can reference them.

pub const WHITE: u32 = 0xffffff;
pub const BLACK: u32 = 0x000000;

pub const ZINC_50: u32 = 0xfafafa;
pub const ZINC_100: u32 = 0xf4f4f5;
pub const ZINC_200: u32 = 0xe4e4e7;
pub const ZINC_300: u32 = 0xd4d4d8;
pub const ZINC_500: u32 = 0x71717a;
pub const ZINC_600: u32 = 0x52525b;
pub const ZINC_900: u32 = 0x18181b;

pub const INDIGO_200: u32 = 0xc7d2fe;
pub const INDIGO_600: u32 = 0x4f46e5;
pub const FUCHSIA_200: u32 = 0xf5d0fe;
pub const FUCHSIA_600: u32 = 0xc026d3;
pub const ROSE_200: u32 = 0xfecdd3;
pub const ROSE_600: u32 = 0xe11d48;

/// Black at 90% opacity over white, the hover tone of the primary button
pub const NEAR_BLACK: u32 = 0x1a1a1a;
