// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The GFX10+ combined hardware format code.
//!
//! From GFX10 on, buffer and image descriptors carry one code that names the
//! channel layout *and* the number format together, replacing the split
//! data/number fields of earlier generations.  The numbering below is the
//! register-database encoding; it fits the 7-bit FORMAT fields everywhere it
//! is packed.

use crate::formats::description::{Layout, PixelFormatDescriptor, ZsFormat};
use crate::formats::texture::{self, TexNumFormat};

/// Combined GFX10+ format code.
///
/// Only the codes this crate can actually emit are named; the block
/// boundaries (8-class at 1, 32-class at 20, image-only codes from 76 up)
/// follow the hardware numbering so the table stays auditable against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Gfx10Format {
    F8Unorm = 1,
    F8Snorm = 2,
    F8Uscaled = 3,
    F8Sscaled = 4,
    F8Uint = 5,
    F8Sint = 6,
    F16Unorm = 7,
    F16Snorm = 8,
    F16Uscaled = 9,
    F16Sscaled = 10,
    F16Uint = 11,
    F16Sint = 12,
    F16Float = 13,
    F8_8Unorm = 14,
    F8_8Snorm = 15,
    F8_8Uscaled = 16,
    F8_8Sscaled = 17,
    F8_8Uint = 18,
    F8_8Sint = 19,
    F32Uint = 20,
    F32Sint = 21,
    F32Float = 22,
    F16_16Unorm = 23,
    F16_16Snorm = 24,
    F16_16Uscaled = 25,
    F16_16Sscaled = 26,
    F16_16Uint = 27,
    F16_16Sint = 28,
    F16_16Float = 29,
    F10_11_11Float = 35,
    F11_11_10Float = 41,
    F10_10_10_2Unorm = 42,
    F10_10_10_2Snorm = 43,
    F10_10_10_2Uscaled = 44,
    F10_10_10_2Sscaled = 45,
    F10_10_10_2Uint = 46,
    F10_10_10_2Sint = 47,
    F2_10_10_10Unorm = 48,
    F2_10_10_10Snorm = 49,
    F2_10_10_10Uscaled = 50,
    F2_10_10_10Sscaled = 51,
    F2_10_10_10Uint = 52,
    F2_10_10_10Sint = 53,
    F8_8_8_8Unorm = 54,
    F8_8_8_8Snorm = 55,
    F8_8_8_8Uscaled = 56,
    F8_8_8_8Sscaled = 57,
    F8_8_8_8Uint = 58,
    F8_8_8_8Sint = 59,
    F32_32Uint = 60,
    F32_32Sint = 61,
    F32_32Float = 62,
    F16_16_16_16Unorm = 63,
    F16_16_16_16Snorm = 64,
    F16_16_16_16Uscaled = 65,
    F16_16_16_16Sscaled = 66,
    F16_16_16_16Uint = 67,
    F16_16_16_16Sint = 68,
    F16_16_16_16Float = 69,
    F32_32_32Uint = 70,
    F32_32_32Sint = 71,
    F32_32_32Float = 72,
    F32_32_32_32Uint = 73,
    F32_32_32_32Sint = 74,
    F32_32_32_32Float = 75,
    //image-only codes from here down
    F5_6_5Unorm = 76,
    F1_5_5_5Unorm = 77,
    F5_5_5_1Unorm = 78,
    F4_4_4_4Unorm = 79,
    F4_4Unorm = 80,
    F8Srgb = 81,
    F8_8Srgb = 82,
    F8_8_8_8Srgb = 83,
    FX24_8_32Uint = 84,
    FX24_8_32Float = 85,
    F5_9_9_9Float = 86,
    GbGrUnorm = 87,
    BgRgUnorm = 88,
    Bc1Unorm = 89,
    Bc1Srgb = 90,
    Bc2Unorm = 91,
    Bc2Srgb = 92,
    Bc3Unorm = 93,
    Bc3Srgb = 94,
    Bc4Unorm = 95,
    Bc4Snorm = 96,
    Bc5Unorm = 97,
    Bc5Snorm = 98,
    Bc6Ufloat = 99,
    Bc6Sfloat = 100,
    Bc7Unorm = 101,
    Bc7Srgb = 102,
    /// Depth-upgrade clamp variant of 32_FLOAT; the GFX10.x enumerant.
    F32FloatClampGfx10 = 103,
    /// Depth-upgrade clamp variant of 32_FLOAT; re-keyed on GFX11+.
    F32FloatClampGfx11 = 104,
    Fmask8S2F1 = 105,
    Fmask8S4F1 = 106,
    Fmask8S8F1 = 107,
    Fmask8S2F2 = 108,
    Fmask8S4F2 = 109,
    Fmask8S4F4 = 110,
    Fmask16S16F1 = 111,
    Fmask16S8F2 = 112,
    Fmask32S16F2 = 113,
    Fmask32S8F4 = 114,
    Fmask32S8F8 = 115,
    Fmask64S16F4 = 116,
    Fmask64S16F8 = 117,
}

fn zs_format(zs: ZsFormat) -> Option<Gfx10Format> {
    //24-bit depth is gone from GFX10 on; those pairings have no code
    match zs {
        ZsFormat::S8 => Some(Gfx10Format::F8Uint),
        ZsFormat::Z16 => Some(Gfx10Format::F16Unorm),
        ZsFormat::Z32Float => Some(Gfx10Format::F32Float),
        ZsFormat::Z32FloatS8X24 => Some(Gfx10Format::FX24_8_32Float),
        ZsFormat::X32S8 => Some(Gfx10Format::FX24_8_32Uint),
        ZsFormat::Z24X8
        | ZsFormat::X8Z24
        | ZsFormat::Z24S8
        | ZsFormat::S8Z24
        | ZsFormat::X24S8 => None,
    }
}

/// Map an abstract format to the combined GFX10+ code.
pub fn gfx10_hw_format(desc: &PixelFormatDescriptor) -> Option<Gfx10Format> {
    use Gfx10Format as F;
    use TexNumFormat as N;

    if let Some(zs) = desc.zs() {
        return zs_format(zs);
    }

    let num = texture::generic_num_format(desc);
    match desc.layout() {
        Layout::SubsampledGbGr => return Some(F::GbGrUnorm),
        Layout::SubsampledBgRg => return Some(F::BgRgUnorm),
        Layout::Bc1 => return bc(num, F::Bc1Unorm, Some(F::Bc1Srgb), None),
        Layout::Bc2 => return bc(num, F::Bc2Unorm, Some(F::Bc2Srgb), None),
        Layout::Bc3 => return bc(num, F::Bc3Unorm, Some(F::Bc3Srgb), None),
        Layout::Bc4 => return bc(num, F::Bc4Unorm, None, Some(F::Bc4Snorm)),
        Layout::Bc5 => return bc(num, F::Bc5Unorm, None, Some(F::Bc5Snorm)),
        Layout::Bc6 => {
            return match num {
                N::Float => Some(F::Bc6Ufloat),
                N::Snorm => Some(F::Bc6Sfloat),
                _ => None,
            };
        }
        Layout::Bc7 => return bc(num, F::Bc7Unorm, Some(F::Bc7Srgb), None),
        //no GFX10+ part decodes ETC2 natively
        Layout::Etc2Rgb8
        | Layout::Etc2Rgb8A1
        | Layout::Etc2Rgba8
        | Layout::Etc2R11
        | Layout::Etc2Rg11 => return None,
        Layout::Plain => {}
    }

    if desc.is_shared_exponent() {
        return Some(F::F5_9_9_9Float);
    }
    if desc.is_packed_float_10_11_11() {
        return Some(F::F10_11_11Float);
    }

    if let Some(sizes) = desc.packed_sizes() {
        return match (sizes, num) {
            ([5, 6, 5, 0], N::Unorm) => Some(F::F5_6_5Unorm),
            ([5, 5, 5, 1], N::Unorm) => Some(F::F1_5_5_5Unorm),
            ([1, 5, 5, 5], N::Unorm) => Some(F::F5_5_5_1Unorm),
            ([10, 10, 10, 2], n) => pick6(
                n,
                [
                    F::F2_10_10_10Unorm,
                    F::F2_10_10_10Snorm,
                    F::F2_10_10_10Uscaled,
                    F::F2_10_10_10Sscaled,
                    F::F2_10_10_10Uint,
                    F::F2_10_10_10Sint,
                ],
            ),
            ([2, 10, 10, 10], n) => pick6(
                n,
                [
                    F::F10_10_10_2Unorm,
                    F::F10_10_10_2Snorm,
                    F::F10_10_10_2Uscaled,
                    F::F10_10_10_2Sscaled,
                    F::F10_10_10_2Uint,
                    F::F10_10_10_2Sint,
                ],
            ),
            _ => None,
        };
    }

    let size = desc.uniform_channel_size()?;
    match (size, desc.channel_count(), num) {
        (4, 2, N::Unorm) => Some(F::F4_4Unorm),
        (4, 4, N::Unorm) => Some(F::F4_4_4_4Unorm),
        (8, 1, N::Srgb) => Some(F::F8Srgb),
        (8, 2, N::Srgb) => Some(F::F8_8Srgb),
        (8, 4, N::Srgb) => Some(F::F8_8_8_8Srgb),
        (8, 1, n) => pick6(
            n,
            [
                F::F8Unorm,
                F::F8Snorm,
                F::F8Uscaled,
                F::F8Sscaled,
                F::F8Uint,
                F::F8Sint,
            ],
        ),
        (8, 2, n) => pick6(
            n,
            [
                F::F8_8Unorm,
                F::F8_8Snorm,
                F::F8_8Uscaled,
                F::F8_8Sscaled,
                F::F8_8Uint,
                F::F8_8Sint,
            ],
        ),
        (8, 4, n) => pick6(
            n,
            [
                F::F8_8_8_8Unorm,
                F::F8_8_8_8Snorm,
                F::F8_8_8_8Uscaled,
                F::F8_8_8_8Sscaled,
                F::F8_8_8_8Uint,
                F::F8_8_8_8Sint,
            ],
        ),
        (16, 1, N::Float) => Some(F::F16Float),
        (16, 2, N::Float) => Some(F::F16_16Float),
        (16, 4, N::Float) => Some(F::F16_16_16_16Float),
        (16, 1, n) => pick6(
            n,
            [
                F::F16Unorm,
                F::F16Snorm,
                F::F16Uscaled,
                F::F16Sscaled,
                F::F16Uint,
                F::F16Sint,
            ],
        ),
        (16, 2, n) => pick6(
            n,
            [
                F::F16_16Unorm,
                F::F16_16Snorm,
                F::F16_16Uscaled,
                F::F16_16Sscaled,
                F::F16_16Uint,
                F::F16_16Sint,
            ],
        ),
        (16, 4, n) => pick6(
            n,
            [
                F::F16_16_16_16Unorm,
                F::F16_16_16_16Snorm,
                F::F16_16_16_16Uscaled,
                F::F16_16_16_16Sscaled,
                F::F16_16_16_16Uint,
                F::F16_16_16_16Sint,
            ],
        ),
        (32, 1, n) => pick32(n, F::F32Uint, F::F32Sint, F::F32Float),
        (32, 2, n) | (64, 1, n) => pick32(n, F::F32_32Uint, F::F32_32Sint, F::F32_32Float),
        (32, 3, n) => pick32(n, F::F32_32_32Uint, F::F32_32_32Sint, F::F32_32_32Float),
        (32, 4, n) | (64, 2, n) => pick32(
            n,
            F::F32_32_32_32Uint,
            F::F32_32_32_32Sint,
            F::F32_32_32_32Float,
        ),
        _ => None,
    }
}

fn bc(
    num: TexNumFormat,
    unorm: Gfx10Format,
    srgb: Option<Gfx10Format>,
    snorm: Option<Gfx10Format>,
) -> Option<Gfx10Format> {
    match num {
        TexNumFormat::Unorm => Some(unorm),
        TexNumFormat::Srgb => srgb,
        TexNumFormat::Snorm => snorm,
        _ => None,
    }
}

fn pick6(num: TexNumFormat, block: [Gfx10Format; 6]) -> Option<Gfx10Format> {
    match num {
        TexNumFormat::Unorm => Some(block[0]),
        TexNumFormat::Snorm => Some(block[1]),
        TexNumFormat::Uscaled => Some(block[2]),
        TexNumFormat::Sscaled => Some(block[3]),
        TexNumFormat::Uint => Some(block[4]),
        TexNumFormat::Sint => Some(block[5]),
        TexNumFormat::Float | TexNumFormat::Srgb => None,
    }
}

fn pick32(
    num: TexNumFormat,
    uint: Gfx10Format,
    sint: Gfx10Format,
    float: Gfx10Format,
) -> Option<Gfx10Format> {
    //32-bit classes only exist in the integer and float interpretations
    match num {
        TexNumFormat::Uint => Some(uint),
        TexNumFormat::Sint => Some(sint),
        TexNumFormat::Float => Some(float),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::catalog;

    #[test]
    fn common_codes() {
        assert_eq!(
            gfx10_hw_format(&catalog::R8G8B8A8_UNORM),
            Some(Gfx10Format::F8_8_8_8Unorm)
        );
        assert_eq!(
            gfx10_hw_format(&catalog::R8G8B8A8_SRGB),
            Some(Gfx10Format::F8_8_8_8Srgb)
        );
        assert_eq!(
            gfx10_hw_format(&catalog::R16G16B16A16_FLOAT),
            Some(Gfx10Format::F16_16_16_16Float)
        );
        assert_eq!(
            gfx10_hw_format(&catalog::R11G11B10_FLOAT),
            Some(Gfx10Format::F10_11_11Float)
        );
        assert_eq!(
            gfx10_hw_format(&catalog::R10G10B10A2_UNORM),
            Some(Gfx10Format::F2_10_10_10Unorm)
        );
    }

    #[test]
    fn retired_formats() {
        //24-bit depth and ETC2 have no GFX10 codes
        assert_eq!(gfx10_hw_format(&catalog::Z24S8_UNORM), None);
        assert_eq!(gfx10_hw_format(&catalog::ETC2_RGB8), None);
        assert_eq!(gfx10_hw_format(&catalog::Z32_FLOAT), Some(Gfx10Format::F32Float));
    }

    #[test]
    fn sixty_four_bit_pairs() {
        assert_eq!(
            gfx10_hw_format(&catalog::R64_UINT),
            Some(Gfx10Format::F32_32Uint)
        );
        assert_eq!(
            gfx10_hw_format(&catalog::R64G64_UINT),
            Some(Gfx10Format::F32_32_32_32Uint)
        );
    }
}
