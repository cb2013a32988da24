// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The 4-word sampler descriptor.
//!
//! Word layouts by generation:
//!
//! Word 0 (all generations): CLAMP_X [2:0], CLAMP_Y [5:3], CLAMP_Z [8:6],
//! MAX_ANISO_RATIO [11:9], DEPTH_COMPARE_FUNC [14:12], FORCE_UNNORMALIZED
//! [15], ANISO_THRESHOLD [18:16], ANISO_BIAS [26:21], TRUNC_COORD [27],
//! DISABLE_CUBE_WRAP [28], FILTER_MODE [30:29], COMPAT_MODE [31].
//!
//! Word 1: MIN_LOD/MAX_LOD as unsigned 8-bit-fraction fixed point —
//! 12-bit fields at [11:0]/[23:12] with PERF_MIP [27:24] before GFX12;
//! 13-bit fields at [12:0]/[25:13] with PERF_MIP [29:26] on GFX12, which
//! widened the integer part.
//!
//! Word 2: LOD_BIAS as signed fixed point — 14 bits at [13:0] before GFX10
//! with XY_MAG_FILTER [21:20], XY_MIN_FILTER [23:22], Z_FILTER [25:24],
//! MIP_FILTER [27:26], MIP_POINT_PRECLAMP [28], DISABLE_LSB_CEIL [29],
//! FILTER_PREC_FIX [30], ANISO_OVERRIDE [31]; 16 bits at [15:0] on GFX10+
//! with the filters shifted up to [17:16]/[19:18]/[21:20]/[23:22] and
//! ANISO_OVERRIDE at [24].
//!
//! Word 3: BORDER_COLOR_PTR [11:0] before GFX11, [15:0] on GFX11+ (the
//! palette grew); BORDER_COLOR_TYPE [31:30] everywhere.

use crate::bittricks::{field, signed_fixed, unsigned_fixed};
use crate::descriptors::RESOURCE_DESC_DWORDS;
use crate::hw::Generation;

/// Coordinate clamp/wrap mode, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TexClamp {
    Wrap = 0,
    Mirror = 1,
    ClampLastTexel = 2,
    MirrorOnceLastTexel = 3,
    ClampHalfBorder = 4,
    MirrorOnceHalfBorder = 5,
    ClampBorder = 6,
    MirrorOnceBorder = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DepthCompareFunc {
    Never = 0,
    Less = 1,
    Equal = 2,
    LessEqual = 3,
    Greater = 4,
    NotEqual = 5,
    GreaterEqual = 6,
    Always = 7,
}

/// Minification/magnification filter in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum XyFilter {
    Point = 0,
    Bilinear = 1,
    AnisoPoint = 2,
    AnisoLinear = 3,
}

/// Filter along the Z axis of 3D resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ZFilter {
    None = 0,
    Point = 1,
    Linear = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MipFilter {
    None = 0,
    Point = 1,
    Linear = 2,
}

/// Reduction mode: how the filter footprint collapses to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ReductionMode {
    WeightedAverage = 0,
    Min = 1,
    Max = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BorderColorType {
    TransparentBlack = 0,
    OpaqueBlack = 1,
    OpaqueWhite = 2,
    /// Indexes the border-color palette through the pointer field.
    Register = 3,
}

/// Semantic sampler inputs.  Plain data; owns nothing.
#[derive(Debug, Clone, Copy)]
pub struct SamplerState {
    pub clamp_u: TexClamp,
    pub clamp_v: TexClamp,
    pub clamp_w: TexClamp,
    /// log2 of the anisotropy ratio, 0..=4.  Threshold, bias, and perf-mip
    /// are all derived from this one value.
    pub max_aniso_ratio: u32,
    pub depth_compare: DepthCompareFunc,
    pub unnormalized_coords: bool,
    /// False disables seamless cube-map filtering.
    pub cube_wrap: bool,
    /// Truncate (round-to-zero) coordinate conversion.
    pub trunc_coord: bool,
    pub reduction: ReductionMode,
    pub mag_filter: XyFilter,
    pub min_filter: XyFilter,
    pub z_filter: ZFilter,
    pub mip_filter: MipFilter,
    /// Sample only the base level when anisotropic.
    pub aniso_single_level: bool,
    pub min_lod: f32,
    pub max_lod: f32,
    pub lod_bias: f32,
    pub border_color: BorderColorType,
    pub border_color_ptr: u32,
}

/// Build the 4-word sampler descriptor for `generation`.
pub fn build_sampler_descriptor(
    generation: Generation,
    state: &SamplerState,
) -> [u32; RESOURCE_DESC_DWORDS] {
    let perf_mip = if state.max_aniso_ratio > 0 {
        state.max_aniso_ratio + 6
    } else {
        0
    };
    //only these two generations want the compatibility interpolation mode
    let compat_mode = matches!(generation, Generation::Gfx8 | Generation::Gfx9);

    let word0 = field(state.clamp_u as u32, 0, 3)
        | field(state.clamp_v as u32, 3, 3)
        | field(state.clamp_w as u32, 6, 3)
        | field(state.max_aniso_ratio, 9, 3)
        | field(state.depth_compare as u32, 12, 3)
        | field(state.unnormalized_coords as u32, 15, 1)
        | field(state.max_aniso_ratio >> 1, 16, 3)
        | field(state.max_aniso_ratio, 21, 6)
        | field(state.trunc_coord as u32, 27, 1)
        | field(!state.cube_wrap as u32, 28, 1)
        | field(state.reduction as u32, 29, 2)
        | field(compat_mode as u32, 31, 1);

    let word1 = if generation >= Generation::Gfx12 {
        //wider integer part: [0, 17] in 13-bit fields
        let min = unsigned_fixed(state.min_lod.clamp(0.0, 17.0), 8);
        let max = unsigned_fixed(state.max_lod.clamp(0.0, 17.0), 8);
        field(min, 0, 13) | field(max, 13, 13) | field(perf_mip, 26, 4)
    } else {
        let min = unsigned_fixed(state.min_lod.clamp(0.0, 15.0), 8);
        let max = unsigned_fixed(state.max_lod.clamp(0.0, 15.0), 8);
        field(min, 0, 12) | field(max, 12, 12) | field(perf_mip, 24, 4)
    };

    let word2 = if generation >= Generation::Gfx10 {
        let bias = signed_fixed(state.lod_bias.clamp(-32.0, 32.0), 8);
        field(bias, 0, 16)
            | field(state.mag_filter as u32, 16, 2)
            | field(state.min_filter as u32, 18, 2)
            | field(state.z_filter as u32, 20, 2)
            | field(state.mip_filter as u32, 22, 2)
            | field(!state.aniso_single_level as u32, 24, 1)
    } else {
        let bias = signed_fixed(state.lod_bias.clamp(-16.0, 16.0), 8);
        let aniso_override = generation >= Generation::Gfx8 && !state.aniso_single_level;
        field(bias, 0, 14)
            | field(state.mag_filter as u32, 20, 2)
            | field(state.min_filter as u32, 22, 2)
            | field(state.z_filter as u32, 24, 2)
            | field(state.mip_filter as u32, 26, 2)
            | field((generation <= Generation::Gfx8) as u32, 29, 1)
            | field(1, 30, 1) //FILTER_PREC_FIX, unconditional before GFX10
            | field(aniso_override as u32, 31, 1)
    };

    let word3 = if generation >= Generation::Gfx11 {
        field(state.border_color_ptr, 0, 16) | field(state.border_color as u32, 30, 2)
    } else {
        field(state.border_color_ptr, 0, 12) | field(state.border_color as u32, 30, 2)
    };

    [word0, word1, word2, word3]
}
