// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture number/data format classification (split fields, pre-GFX10).
//!
//! Wider domain than the buffer path: depth/stencil pairings, block
//! compression, subsampled packings, and 4/64-bit plain widths all have
//! image representations.  GFX10+ replaces the split fields with a combined
//! code; see [`crate::formats::gfx10`].

use crate::formats::description::{Layout, NumericType, PixelFormatDescriptor, ZsFormat};
use crate::hw::DeviceCapabilities;
use crate::swizzle::Swizzle;

/// IMG_DATA_FORMAT.  Values are the register-database encoding shared by
/// GFX6 through GFX9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TexDataFormat {
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
    F32_32_32 = 13,
    F32_32_32_32 = 14,
    F5_6_5 = 16,
    F1_5_5_5 = 17,
    F5_5_5_1 = 18,
    F4_4_4_4 = 19,
    F8_24 = 20,
    F24_8 = 21,
    FX24_8_32 = 22,
    F4_4 = 23,
    GbGr = 32,
    BgRg = 33,
    F5_9_9_9 = 34,
    Bc1 = 35,
    Bc2 = 36,
    Bc3 = 37,
    Bc4 = 38,
    Bc5 = 39,
    Bc6 = 40,
    Bc7 = 41,
    Etc2Rgb8 = 42,
    Etc2Rgb8A1 = 43,
    Etc2Rgba8 = 44,
    Etc2R11 = 45,
    Etc2Rg11 = 46,
}

/// IMG_NUM_FORMAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TexNumFormat {
    Unorm = 0,
    Snorm = 1,
    Uscaled = 2,
    Sscaled = 3,
    Uint = 4,
    Sint = 5,
    Float = 7,
    Srgb = 9,
}

/// Border-color channel-placement class, packed by the GFX10+ image
/// descriptor so the fixed border colors land in the right channels after
/// the format swizzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BorderColorSwizzle {
    Xyzw = 0,
    Xwyz = 1,
    Wzyx = 2,
    Wxyz = 3,
    Zyxw = 4,
    Yxwz = 5,
}

/// Classify where the format's swizzle puts each border-color channel.
///
/// Only the alpha position truly matters for the fixed border colors (the
/// RGB values are all equal), which is why two of the alpha-first classes
/// are interchangeable.
pub fn border_color_swizzle(desc: &PixelFormatDescriptor) -> BorderColorSwizzle {
    let sw = desc.swizzle().0;
    if sw[3] == Swizzle::X {
        if sw[2] == Swizzle::Y {
            BorderColorSwizzle::Wzyx
        } else {
            BorderColorSwizzle::Wxyz
        }
    } else if sw[0] == Swizzle::X {
        if sw[1] == Swizzle::Y {
            BorderColorSwizzle::Xyzw
        } else {
            BorderColorSwizzle::Xwyz
        }
    } else if sw[1] == Swizzle::X {
        BorderColorSwizzle::Yxwz
    } else if sw[2] == Swizzle::X {
        BorderColorSwizzle::Zyxw
    } else {
        BorderColorSwizzle::Xyzw
    }
}

fn zs_formats(zs: ZsFormat) -> (TexDataFormat, TexNumFormat) {
    match zs {
        ZsFormat::S8 => (TexDataFormat::F8, TexNumFormat::Uint),
        ZsFormat::Z16 => (TexDataFormat::F16, TexNumFormat::Unorm),
        //data formats name the MSB first: padding/stencil rides above Z24
        ZsFormat::Z24X8 | ZsFormat::Z24S8 => (TexDataFormat::F8_24, TexNumFormat::Unorm),
        ZsFormat::X8Z24 | ZsFormat::S8Z24 => (TexDataFormat::F24_8, TexNumFormat::Unorm),
        ZsFormat::X24S8 => (TexDataFormat::F8_24, TexNumFormat::Uint),
        ZsFormat::Z32Float => (TexDataFormat::F32, TexNumFormat::Float),
        ZsFormat::Z32FloatS8X24 => (TexDataFormat::FX24_8_32, TexNumFormat::Float),
        ZsFormat::X32S8 => (TexDataFormat::FX24_8_32, TexNumFormat::Uint),
    }
}

pub(crate) fn generic_num_format(desc: &PixelFormatDescriptor) -> TexNumFormat {
    if desc.colorspace() == crate::formats::Colorspace::Srgb {
        return TexNumFormat::Srgb;
    }
    let Some(ch) = desc.significant_channel() else {
        return TexNumFormat::Float;
    };
    match ch.ty {
        NumericType::Signed | NumericType::Fixed => {
            if ch.normalized {
                TexNumFormat::Snorm
            } else if ch.pure_integer {
                TexNumFormat::Sint
            } else {
                TexNumFormat::Sscaled
            }
        }
        NumericType::Unsigned => {
            if ch.normalized {
                TexNumFormat::Unorm
            } else if ch.pure_integer {
                TexNumFormat::Uint
            } else {
                TexNumFormat::Uscaled
            }
        }
        NumericType::Float => TexNumFormat::Float,
    }
}

/// The chip-family exception table: Carrizo parts mis-sample pure-integer
/// 4_4_4_4 and 5_5_5_1/1_5_5_5.  There is no derivable rule here; the
/// affected packings are listed literally.
pub(crate) fn rejected_by_erratum(caps: &DeviceCapabilities, desc: &PixelFormatDescriptor) -> bool {
    if !caps.rejects_small_integer_formats() {
        return false;
    }
    let Some(ch) = desc.significant_channel() else {
        return false;
    };
    if !ch.pure_integer {
        return false;
    }
    let four_by_four =
        matches!(desc.uniform_channel_size(), Some(4)) && desc.channel_count() == 4;
    let packed_1bit_alpha = matches!(
        desc.packed_sizes(),
        Some([1, 5, 5, 5]) | Some([5, 5, 5, 1])
    );
    four_by_four || packed_1bit_alpha
}

/// Map an abstract format to the split (data, number) image format pair.
///
/// `None` means no hardware representation on this device — including the
/// per-chip erratum rejections, which depend on `caps` rather than the
/// format alone.
pub fn texture_formats(
    caps: &DeviceCapabilities,
    desc: &PixelFormatDescriptor,
) -> Option<(TexDataFormat, TexNumFormat)> {
    if let Some(zs) = desc.zs() {
        return Some(zs_formats(zs));
    }

    let num = generic_num_format(desc);
    match desc.layout() {
        Layout::SubsampledGbGr => return Some((TexDataFormat::GbGr, num)),
        Layout::SubsampledBgRg => return Some((TexDataFormat::BgRg, num)),
        Layout::Bc1 => return Some((TexDataFormat::Bc1, num)),
        Layout::Bc2 => return Some((TexDataFormat::Bc2, num)),
        Layout::Bc3 => return Some((TexDataFormat::Bc3, num)),
        Layout::Bc4 => return Some((TexDataFormat::Bc4, num)),
        Layout::Bc5 => return Some((TexDataFormat::Bc5, num)),
        //signed BC6 is BC6 data + SNORM number format
        Layout::Bc6 => return Some((TexDataFormat::Bc6, num)),
        Layout::Bc7 => return Some((TexDataFormat::Bc7, num)),
        Layout::Etc2Rgb8
        | Layout::Etc2Rgb8A1
        | Layout::Etc2Rgba8
        | Layout::Etc2R11
        | Layout::Etc2Rg11 => {
            if !caps.has(crate::hw::DeviceFlags::HAS_ETC2) {
                return None;
            }
            let data = match desc.layout() {
                Layout::Etc2Rgb8 => TexDataFormat::Etc2Rgb8,
                Layout::Etc2Rgb8A1 => TexDataFormat::Etc2Rgb8A1,
                Layout::Etc2Rgba8 => TexDataFormat::Etc2Rgba8,
                Layout::Etc2R11 => TexDataFormat::Etc2R11,
                Layout::Etc2Rg11 => TexDataFormat::Etc2Rg11,
                _ => unreachable!(),
            };
            return Some((data, num));
        }
        Layout::Plain => {}
    }

    if desc.is_shared_exponent() {
        return Some((TexDataFormat::F5_9_9_9, TexNumFormat::Float));
    }
    if desc.is_packed_float_10_11_11() {
        return Some((TexDataFormat::F10_11_11, TexNumFormat::Float));
    }
    if rejected_by_erratum(caps, desc) {
        return None;
    }

    let data = if let Some(sizes) = desc.packed_sizes() {
        match sizes {
            [5, 6, 5, 0] => TexDataFormat::F5_6_5,
            //MSB-first naming again: a 1-bit alpha stored on top is 1_5_5_5
            [5, 5, 5, 1] => TexDataFormat::F1_5_5_5,
            [1, 5, 5, 5] => TexDataFormat::F5_5_5_1,
            [10, 10, 10, 2] => TexDataFormat::F2_10_10_10,
            [2, 10, 10, 10] => TexDataFormat::F10_10_10_2,
            _ => return None,
        }
    } else {
        let size = desc.uniform_channel_size()?;
        match (size, desc.channel_count()) {
            (4, 2) => TexDataFormat::F4_4,
            (4, 4) => TexDataFormat::F4_4_4_4,
            (8, 1) => TexDataFormat::F8,
            (8, 2) => TexDataFormat::F8_8,
            (8, 4) => TexDataFormat::F8_8_8_8,
            (16, 1) => TexDataFormat::F16,
            (16, 2) => TexDataFormat::F16_16,
            (16, 4) => TexDataFormat::F16_16_16_16,
            (32, 1) => TexDataFormat::F32,
            (32, 2) => TexDataFormat::F32_32,
            (32, 3) => TexDataFormat::F32_32_32,
            (32, 4) => TexDataFormat::F32_32_32_32,
            //64-bit channels sample as pairs of 32
            (64, 1) => TexDataFormat::F32_32,
            (64, 2) => TexDataFormat::F32_32_32_32,
            _ => return None,
        }
    };
    Some((data, num))
}
