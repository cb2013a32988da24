// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The 8-word FMASK descriptor (GFX6..GFX10.3; retired on GFX11).
//!
//! The fragment-mask surface is addressed like a single-sampled uint image
//! whose format encodes the (samples, storage samples) pair.  Three
//! enumerant families express the same 13-pair table: GFX6..8 use dedicated
//! data formats with a UINT number format, GFX9 uses one FMASK data format
//! plus a per-pair number format, GFX10.x uses combined format codes.

use crate::bittricks::field;
use crate::descriptors::IMAGE_DESC_DWORDS;
use crate::descriptors::image::ResourceType;
use crate::formats::Gfx10Format;
use crate::hw::Generation;
use crate::swizzle::{Swizzle, SwizzleSet};

/// GFX6..8 FMASK data formats, named FMASK{bits}_S{samples}_F{fragments}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Gfx6FmaskDataFormat {
    Fmask8S2F1 = 47,
    Fmask8S4F1 = 48,
    Fmask8S8F1 = 49,
    Fmask8S2F2 = 50,
    Fmask8S4F2 = 51,
    Fmask8S4F4 = 52,
    Fmask16S16F1 = 53,
    Fmask16S8F2 = 54,
    Fmask32S16F2 = 55,
    Fmask32S8F4 = 56,
    Fmask32S8F8 = 57,
    Fmask64S16F4 = 58,
    Fmask64S16F8 = 59,
}

/// GFX9 re-keys the pair into the number-format space (the data format is
/// the single FMASK code), named FMASK_{bits}_{samples}_{fragments}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Gfx9FmaskNumFormat {
    Fmask8_2_1 = 0,
    Fmask8_2_2 = 1,
    Fmask8_4_1 = 2,
    Fmask8_4_2 = 3,
    Fmask8_4_4 = 4,
    Fmask8_8_1 = 5,
    Fmask16_8_2 = 6,
    Fmask16_16_1 = 7,
    Fmask32_8_4 = 8,
    Fmask32_8_8 = 9,
    Fmask32_16_2 = 10,
    Fmask64_16_4 = 11,
    Fmask64_16_8 = 12,
}

/// GFX9 IMG_DATA_FORMAT code that switches the number-format field into the
/// FMASK table.
pub const GFX9_DATA_FORMAT_FMASK: u32 = 47;

const UINT_NUM_FORMAT: u32 = 4;

/// Semantic FMASK-view inputs.
#[derive(Debug, Clone, Copy)]
pub struct FmaskViewState {
    /// 256-byte aligned surface address.  Static here, unlike color data:
    /// the FMASK allocation never rebinds separately from its view.
    pub va: u64,
    pub width: u32,
    pub height: u32,
    pub first_layer: u32,
    pub last_layer: u32,
    pub num_samples: u32,
    pub num_storage_samples: u32,
    /// Tiling index (legacy) or swizzle mode (GFX9+).
    pub swizzle_mode: u32,
}

fn gfx6_data_format(samples: u32, fragments: u32) -> Gfx6FmaskDataFormat {
    use Gfx6FmaskDataFormat as F;
    match (samples, fragments) {
        (2, 1) => F::Fmask8S2F1,
        (2, 2) => F::Fmask8S2F2,
        (4, 1) => F::Fmask8S4F1,
        (4, 2) => F::Fmask8S4F2,
        (4, 4) => F::Fmask8S4F4,
        (8, 1) => F::Fmask8S8F1,
        (8, 2) => F::Fmask16S8F2,
        (8, 4) => F::Fmask32S8F4,
        (8, 8) => F::Fmask32S8F8,
        (16, 1) => F::Fmask16S16F1,
        (16, 2) => F::Fmask32S16F2,
        (16, 4) => F::Fmask64S16F4,
        (16, 8) => F::Fmask64S16F8,
        _ => unreachable!("no FMASK format for {samples}x{fragments}"),
    }
}

fn gfx9_num_format(samples: u32, fragments: u32) -> Gfx9FmaskNumFormat {
    use Gfx9FmaskNumFormat as F;
    match (samples, fragments) {
        (2, 1) => F::Fmask8_2_1,
        (2, 2) => F::Fmask8_2_2,
        (4, 1) => F::Fmask8_4_1,
        (4, 2) => F::Fmask8_4_2,
        (4, 4) => F::Fmask8_4_4,
        (8, 1) => F::Fmask8_8_1,
        (8, 2) => F::Fmask16_8_2,
        (8, 4) => F::Fmask32_8_4,
        (8, 8) => F::Fmask32_8_8,
        (16, 1) => F::Fmask16_16_1,
        (16, 2) => F::Fmask32_16_2,
        (16, 4) => F::Fmask64_16_4,
        (16, 8) => F::Fmask64_16_8,
        _ => unreachable!("no FMASK format for {samples}x{fragments}"),
    }
}

fn gfx10_format(samples: u32, fragments: u32) -> Gfx10Format {
    use Gfx10Format as F;
    match (samples, fragments) {
        (2, 1) => F::Fmask8S2F1,
        (2, 2) => F::Fmask8S2F2,
        (4, 1) => F::Fmask8S4F1,
        (4, 2) => F::Fmask8S4F2,
        (4, 4) => F::Fmask8S4F4,
        (8, 1) => F::Fmask8S8F1,
        (8, 2) => F::Fmask16S8F2,
        (8, 4) => F::Fmask32S8F4,
        (8, 8) => F::Fmask32S8F8,
        (16, 1) => F::Fmask16S16F1,
        (16, 2) => F::Fmask32S16F2,
        (16, 4) => F::Fmask64S16F4,
        (16, 8) => F::Fmask64S16F8,
        _ => unreachable!("no FMASK format for {samples}x{fragments}"),
    }
}

/// Build the 8-word FMASK descriptor.
///
/// Contract: `generation` must predate GFX11 (FMASK is retired there), and
/// the sample pair must be one of the 13 the hardware defines — both are
/// caller preconditions, violated only by defective callers, so both fail
/// hard rather than returning an error.
pub fn build_fmask_descriptor(
    generation: Generation,
    state: &FmaskViewState,
) -> [u32; IMAGE_DESC_DWORDS] {
    assert!(generation.has_fmask(), "FMASK is retired on gfx11+");
    let samples = state.num_samples.max(1);
    let fragments = state.num_storage_samples.max(1);

    //the fragment mask reads as an X-replicated uint image
    let dst_sel = SwizzleSet([Swizzle::X; 4]).dst_sel_packed();
    let resource_type = if state.last_layer > 0 {
        ResourceType::Image2DArray
    } else {
        ResourceType::Image2D
    };

    let mut desc = [0u32; IMAGE_DESC_DWORDS];
    desc[0] = (state.va >> 8) as u32;
    desc[1] = field((state.va >> 40) as u32, 0, 8);
    if generation >= Generation::Gfx10 {
        desc[1] |= field(gfx10_format(samples, fragments) as u32, 20, 7);
        let width = state.width - 1;
        desc[1] |= field(width, 30, 2);
        desc[2] = field(width >> 2, 0, 14) | field(state.height - 1, 16, 14) | field(1, 30, 1);
        desc[3] = dst_sel
            | field(state.swizzle_mode, 20, 5)
            | field(resource_type as u32, 28, 4);
        desc[4] = field(state.last_layer, 0, 13) | field(state.first_layer, 16, 13);
    } else {
        let (data, num) = if generation == Generation::Gfx9 {
            (
                GFX9_DATA_FORMAT_FMASK,
                gfx9_num_format(samples, fragments) as u32,
            )
        } else {
            (
                gfx6_data_format(samples, fragments) as u32,
                UINT_NUM_FORMAT,
            )
        };
        desc[1] |= field(data, 20, 6) | field(num, 26, 4);
        desc[2] =
            field(state.width - 1, 0, 14) | field(state.height - 1, 14, 14) | field(4, 29, 3);
        desc[3] = dst_sel
            | field(state.swizzle_mode, 20, 5)
            | field(resource_type as u32, 28, 4);
        desc[4] = field(state.last_layer, 0, 13);
        desc[5] = field(state.first_layer, 0, 13);
        if generation < Generation::Gfx9 {
            desc[5] |= field(state.last_layer, 13, 13);
        }
    }
    desc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(samples: u32, storage: u32) -> FmaskViewState {
        FmaskViewState {
            va: 0x40000,
            width: 800,
            height: 600,
            first_layer: 0,
            last_layer: 0,
            num_samples: samples,
            num_storage_samples: storage,
            swizzle_mode: 0,
        }
    }

    #[test]
    fn pair_4_2_across_families() {
        //the same logical pair selects a different enumerant family per
        //generation
        let gfx9 = build_fmask_descriptor(Generation::Gfx9, &view(4, 2));
        assert_eq!((gfx9[1] >> 20) & 0x3F, GFX9_DATA_FORMAT_FMASK);
        assert_eq!(
            (gfx9[1] >> 26) & 0xF,
            Gfx9FmaskNumFormat::Fmask8_4_2 as u32
        );
        let gfx10 = build_fmask_descriptor(Generation::Gfx10, &view(4, 2));
        assert_eq!((gfx10[1] >> 20) & 0x7F, Gfx10Format::Fmask8S4F2 as u32);
        let gfx8 = build_fmask_descriptor(Generation::Gfx8, &view(4, 2));
        assert_eq!(
            (gfx8[1] >> 20) & 0x3F,
            Gfx6FmaskDataFormat::Fmask8S4F2 as u32
        );
        assert_eq!((gfx8[1] >> 26) & 0xF, UINT_NUM_FORMAT);
    }

    #[test]
    fn all_thirteen_pairs_build() {
        let pairs = [
            (2, 1),
            (2, 2),
            (4, 1),
            (4, 2),
            (4, 4),
            (8, 1),
            (8, 2),
            (8, 4),
            (8, 8),
            (16, 1),
            (16, 2),
            (16, 4),
            (16, 8),
        ];
        for (s, f) in pairs {
            for generation in [Generation::Gfx6, Generation::Gfx9, Generation::Gfx10_3] {
                let _ = build_fmask_descriptor(generation, &view(s, f));
            }
        }
    }

    #[test]
    #[should_panic(expected = "no FMASK format")]
    fn unlisted_pair_is_contract_violation() {
        let _ = build_fmask_descriptor(Generation::Gfx9, &view(16, 16));
    }

    #[test]
    #[should_panic(expected = "retired")]
    fn gfx11_rejects_fmask() {
        let _ = build_fmask_descriptor(Generation::Gfx11, &view(4, 2));
    }
}
