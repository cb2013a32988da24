// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Color-buffer format, number type, and channel swap.
//!
//! The render-backend analog of the texture path.  The color blender is a
//! narrower machine than the texture unit: no block compression, no
//! subsampled packings, and no scaled number types at all.

use crate::formats::description::{Colorspace, NumericType, PixelFormatDescriptor};
use crate::hw::Generation;
use crate::swizzle::Swizzle;

/// CB_COLOR_INFO.FORMAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CbFormat {
    F8 = 1,
    F16 = 2,
    F8_8 = 3,
    F32 = 4,
    F16_16 = 5,
    F10_11_11 = 6,
    F11_11_10 = 7,
    F10_10_10_2 = 8,
    F2_10_10_10 = 9,
    F8_8_8_8 = 10,
    F32_32 = 11,
    F16_16_16_16 = 12,
    F32_32_32_32 = 14,
    F5_6_5 = 16,
    F1_5_5_5 = 17,
    F5_5_5_1 = 18,
    F4_4_4_4 = 19,
    F5_9_9_9 = 24,
}

/// CB_COLOR_INFO.NUMBER_TYPE.  The scaled encodings exist in the register
/// space but no blender implements them, so they are unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CbNumberType {
    Unorm = 0,
    Snorm = 1,
    Uint = 4,
    Sint = 5,
    Srgb = 6,
    Float = 7,
}

/// CB_COLOR_INFO.COMP_SWAP: which stored channel feeds which blender lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CbSwap {
    Std = 0,
    Alt = 1,
    StdRev = 2,
    AltRev = 3,
}

/// Map an abstract format to the color-buffer format code.
///
/// Block-compressed layouts and undocumented mixed packings return `None` on
/// every generation; 5_9_9_9 gained a code on GFX10.3.
pub fn color_buffer_format(
    generation: Generation,
    desc: &PixelFormatDescriptor,
) -> Option<CbFormat> {
    if desc.zs().is_some() || desc.layout() != crate::formats::Layout::Plain {
        return None;
    }
    if desc.is_shared_exponent() {
        return (generation >= Generation::Gfx10_3).then_some(CbFormat::F5_9_9_9);
    }
    if desc.is_packed_float_10_11_11() {
        return Some(CbFormat::F10_11_11);
    }
    if let Some(sizes) = desc.packed_sizes() {
        return match sizes {
            [5, 6, 5, 0] => Some(CbFormat::F5_6_5),
            [5, 5, 5, 1] => Some(CbFormat::F1_5_5_5),
            [1, 5, 5, 5] => Some(CbFormat::F5_5_5_1),
            [10, 10, 10, 2] => Some(CbFormat::F2_10_10_10),
            [2, 10, 10, 10] => Some(CbFormat::F10_10_10_2),
            _ => None,
        };
    }
    let size = desc.uniform_channel_size()?;
    match (size, desc.channel_count()) {
        (4, 4) => Some(CbFormat::F4_4_4_4),
        (8, 1) => Some(CbFormat::F8),
        (8, 2) => Some(CbFormat::F8_8),
        (8, 4) => Some(CbFormat::F8_8_8_8),
        (16, 1) => Some(CbFormat::F16),
        (16, 2) => Some(CbFormat::F16_16),
        (16, 4) => Some(CbFormat::F16_16_16_16),
        (32, 1) => Some(CbFormat::F32),
        (32, 2) => Some(CbFormat::F32_32),
        (32, 4) => Some(CbFormat::F32_32_32_32),
        _ => None,
    }
}

/// Classify the blender number type.
///
/// Scaled channels (unnormalized, non-integer, non-float) have no blender
/// representation and are rejected outright.
pub fn color_number_type(desc: &PixelFormatDescriptor) -> Option<CbNumberType> {
    if desc.colorspace() == Colorspace::Srgb {
        return Some(CbNumberType::Srgb);
    }
    let ch = desc.significant_channel()?;
    match ch.ty {
        NumericType::Float => Some(CbNumberType::Float),
        NumericType::Signed => {
            if ch.pure_integer {
                Some(CbNumberType::Sint)
            } else if ch.normalized {
                Some(CbNumberType::Snorm)
            } else {
                None
            }
        }
        NumericType::Unsigned => {
            if ch.pure_integer {
                Some(CbNumberType::Uint)
            } else if ch.normalized {
                Some(CbNumberType::Unorm)
            } else {
                None
            }
        }
        NumericType::Fixed => None,
    }
}

/// Derive the channel swap from the format swizzle.
///
/// For four-channel formats the middle two channels identify the order; the
/// outer channels may be padding.
pub fn color_swap(desc: &PixelFormatDescriptor) -> Option<CbSwap> {
    let sw = desc.swizzle().0;
    let at = |i: usize, s: Swizzle| sw[i] == s;
    match desc.channel_count() {
        1 => {
            if at(0, Swizzle::X) {
                Some(CbSwap::Std)
            } else if at(3, Swizzle::X) {
                //alpha-only: A8
                Some(CbSwap::AltRev)
            } else {
                None
            }
        }
        2 => {
            if at(0, Swizzle::X) && at(1, Swizzle::Y) {
                Some(CbSwap::Std)
            } else if at(0, Swizzle::Y) && at(1, Swizzle::X) {
                Some(CbSwap::StdRev)
            } else if at(0, Swizzle::X) && at(3, Swizzle::Y) {
                Some(CbSwap::Alt)
            } else if at(0, Swizzle::Y) && at(3, Swizzle::X) {
                Some(CbSwap::AltRev)
            } else {
                None
            }
        }
        3 => {
            if at(0, Swizzle::X) {
                Some(CbSwap::Std)
            } else if at(0, Swizzle::Z) {
                Some(CbSwap::StdRev)
            } else {
                None
            }
        }
        4 => {
            if at(1, Swizzle::Y) && at(2, Swizzle::Z) {
                Some(CbSwap::Std) //XYZW
            } else if at(1, Swizzle::Z) && at(2, Swizzle::Y) {
                Some(CbSwap::StdRev) //WZYX
            } else if at(1, Swizzle::Y) && at(2, Swizzle::X) {
                Some(CbSwap::Alt) //ZYXW
            } else if at(1, Swizzle::Z) && at(2, Swizzle::W) {
                Some(CbSwap::AltRev) //YZWX
            } else {
                None
            }
        }
        _ => None,
    }
}
