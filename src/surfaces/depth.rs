// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Depth-stencil surface register state.
//!
//! Register field layouts used here:
//!
//! - `db_z_info`: FORMAT [1:0], NUM_SAMPLES [3:2] (log2),
//!   DECOMPRESS_ON_N_ZPLANES [19:16] (GFX8+, mutable), SW_MODE [24:20],
//!   TILE_SURFACE_ENABLE [27] (mutable: HTILE).
//! - `db_stencil_info`: FORMAT [0], SW_MODE [24:20].
//! - `db_depth_view`: SLICE_START [10:0], SLICE_MAX [23:13], MIPID [27:24].
//! - `db_depth_size`: X_MAX [15:0], Y_MAX [31:16].
//! - `db_htile_surface`: PIPE_ALIGNED [0] (mutable).
//! - GFX12 splits hierarchical Z/stencil into per-aspect auxiliary
//!   surfaces: `hiz_info`/`his_info` carry ENABLE [0] and SW_MODE [8:4].

use crate::bittricks::{field, unfield};
use crate::formats::{DbFormat, PixelFormatDescriptor, depth_buffer_format};
use crate::hw::{DeviceCapabilities, DeviceFlags, Generation};

/// A GFX12 hierarchical-Z or hierarchical-stencil surface.
#[derive(Debug, Clone, Copy)]
pub struct AuxSurface {
    pub va: u64,
    pub swizzle_mode: u32,
}

/// Static shape of a depth-stencil target.
#[derive(Debug, Clone, Copy)]
pub struct DepthSurfaceState<'a> {
    pub format: &'a PixelFormatDescriptor,
    pub width: u32,
    pub height: u32,
    pub level: u32,
    pub first_layer: u32,
    pub last_layer: u32,
    pub num_samples: u32,
    pub swizzle_mode: u32,
    pub stencil_present: bool,
    pub stencil_swizzle_mode: u32,
    /// GFX12 only; ignored elsewhere.
    pub hiz: Option<AuxSurface>,
    /// GFX12 only; ignored elsewhere.
    pub his: Option<AuxSurface>,
}

/// Named register values consumed by the state emitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthSurfaceRegs {
    pub db_z_info: u32,
    pub db_stencil_info: u32,
    pub db_depth_view: u32,
    pub db_depth_size: u32,
    pub db_htile_surface: u32,
    pub db_depth_base: u64,
    pub db_stencil_base: u64,
    pub db_htile_base: u64,
    pub hiz_info: u32,
    pub his_info: u32,
    pub hiz_base: u64,
    pub his_base: u64,
}

/// Per-draw dynamic fields.
#[derive(Debug, Clone, Copy)]
pub struct MutableDepthState {
    pub depth_va: u64,
    pub stencil_va: u64,
    pub htile_va: u64,
    pub htile_enabled: bool,
    pub htile_pipe_aligned: bool,
    /// 256-sample iteration granule (GFX10+); feeds the erratum branch of
    /// the Z-planes heuristic.
    pub iterate_256: bool,
}

/// Build the static depth-surface registers.
pub fn init_ds_surface(
    caps: &DeviceCapabilities,
    state: &DepthSurfaceState<'_>,
) -> DepthSurfaceRegs {
    let format = depth_buffer_format(state.format).map_or(0, |f| f as u32);
    let log_samples = state.num_samples.max(1).ilog2();

    let mut regs = DepthSurfaceRegs {
        db_z_info: field(format, 0, 2)
            | field(log_samples, 2, 2)
            | field(state.swizzle_mode, 20, 5),
        db_stencil_info: field(state.stencil_present as u32, 0, 1)
            | field(state.stencil_swizzle_mode, 20, 5),
        db_depth_view: field(state.first_layer, 0, 11)
            | field(state.last_layer, 13, 11)
            | field(state.level, 24, 4),
        db_depth_size: field(state.width - 1, 0, 16) | field(state.height - 1, 16, 16),
        ..Default::default()
    };

    if caps.generation() >= Generation::Gfx12 {
        if let Some(hiz) = &state.hiz {
            regs.hiz_info = field(1, 0, 1) | field(hiz.swizzle_mode, 4, 5);
            regs.hiz_base = hiz.va;
        }
        if let Some(his) = &state.his {
            regs.his_info = field(1, 0, 1) | field(his.swizzle_mode, 4, 5);
            regs.his_base = his.va;
        }
    }
    regs
}

/// The Z-plane decompression threshold.
///
/// No closed form — this is the literal table: 32-bit depth decompresses at
/// 4 planes, multisampled 16-bit at 2, one plane under the
/// two-planes-iterate-256 hang with 4xAA, with a +1 bias on GFX9 and later.
/// GFX8 writes the unbiased values and zeroes the field entirely for 16-bit
/// depth when the chip cannot compress it.
fn decompress_on_n_zplanes(
    caps: &DeviceCapabilities,
    format: u32,
    log_samples: u32,
    iterate_256: bool,
) -> u32 {
    let is_d16 = format == DbFormat::Z16 as u32;
    if caps.generation() >= Generation::Gfx9 {
        let mut planes = 4;
        if is_d16 && log_samples > 0 {
            planes = 2;
        }
        if caps.has(DeviceFlags::TWO_PLANES_ITERATE256_BUG) && iterate_256 && log_samples == 2 {
            planes = 1;
        }
        planes + 1
    } else if is_d16 {
        if caps.has(DeviceFlags::NO_D16_COMPRESSION) {
            0
        } else {
            2
        }
    } else {
        4
    }
}

/// Patch the per-draw fields of depth-surface registers.
///
/// Reads the format and sample count back out of the static words rather
/// than taking them again, so a patch cannot disagree with the init.
pub fn set_mutable_ds_surface_fields(
    caps: &DeviceCapabilities,
    state: &MutableDepthState,
    regs: &mut DepthSurfaceRegs,
) {
    regs.db_depth_base = state.depth_va;
    regs.db_stencil_base = state.stencil_va;

    regs.db_z_info &= !(field(0xF, 16, 4) | field(1, 27, 1));
    regs.db_htile_surface = 0;
    regs.db_htile_base = 0;
    if state.htile_enabled {
        let format = unfield(regs.db_z_info, 0, 2);
        let log_samples = unfield(regs.db_z_info, 2, 2);
        regs.db_z_info |= field(1, 27, 1);
        //the field only exists from GFX8 on
        if caps.generation() >= Generation::Gfx8 {
            let planes = decompress_on_n_zplanes(caps, format, log_samples, state.iterate_256);
            regs.db_z_info |= field(planes, 16, 4);
        }
        regs.db_htile_surface = field(state.htile_pipe_aligned as u32, 0, 1);
        regs.db_htile_base = state.htile_va;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::catalog;
    use crate::hw::ChipFamily;

    fn caps(generation: Generation) -> DeviceCapabilities {
        DeviceCapabilities::new(generation, ChipFamily::Other, DeviceFlags::empty())
    }

    fn ds_state(format: &PixelFormatDescriptor, samples: u32) -> DepthSurfaceState<'_> {
        DepthSurfaceState {
            format,
            width: 1920,
            height: 1080,
            level: 0,
            first_layer: 0,
            last_layer: 0,
            num_samples: samples,
            swizzle_mode: 10,
            stencil_present: false,
            stencil_swizzle_mode: 0,
            hiz: None,
            his: None,
        }
    }

    fn patch(htile: bool, iterate_256: bool) -> MutableDepthState {
        MutableDepthState {
            depth_va: 0x100000,
            stencil_va: 0x200000,
            htile_va: 0x300000,
            htile_enabled: htile,
            htile_pipe_aligned: true,
            iterate_256,
        }
    }

    fn zplanes_field(regs: &DepthSurfaceRegs) -> u32 {
        (regs.db_z_info >> 16) & 0xF
    }

    #[test]
    fn zplanes_table() {
        //32-bit depth on GFX9+: 4 planes + 1 bias
        let c = caps(Generation::Gfx9);
        let mut regs = init_ds_surface(&c, &ds_state(&catalog::Z32_FLOAT, 1));
        set_mutable_ds_surface_fields(&c, &patch(true, false), &mut regs);
        assert_eq!(zplanes_field(&regs), 5);

        //multisampled 16-bit depth drops to 2 + 1
        let mut regs = init_ds_surface(&c, &ds_state(&catalog::Z16_UNORM, 4));
        set_mutable_ds_surface_fields(&c, &patch(true, false), &mut regs);
        assert_eq!(zplanes_field(&regs), 3);

        //the two-planes-iterate-256 hang: 4xAA + ITERATE_256 pins it to 1+1
        let buggy = caps(Generation::Gfx10);
        let mut regs = init_ds_surface(&buggy, &ds_state(&catalog::Z32_FLOAT, 4));
        set_mutable_ds_surface_fields(&buggy, &patch(true, true), &mut regs);
        assert_eq!(zplanes_field(&regs), 2);
        //without ITERATE_256 the erratum does not apply
        let mut regs = init_ds_surface(&buggy, &ds_state(&catalog::Z32_FLOAT, 4));
        set_mutable_ds_surface_fields(&buggy, &patch(true, false), &mut regs);
        assert_eq!(zplanes_field(&regs), 5);

        //GFX8 is unbiased, and d16 compression can be fused off
        let gfx8 = caps(Generation::Gfx8);
        let mut regs = init_ds_surface(&gfx8, &ds_state(&catalog::Z16_UNORM, 1));
        set_mutable_ds_surface_fields(&gfx8, &patch(true, false), &mut regs);
        assert_eq!(zplanes_field(&regs), 2);
        let no_d16 = DeviceCapabilities::new(
            Generation::Gfx8,
            ChipFamily::Other,
            DeviceFlags::NO_D16_COMPRESSION,
        );
        let mut regs = init_ds_surface(&no_d16, &ds_state(&catalog::Z16_UNORM, 1));
        set_mutable_ds_surface_fields(&no_d16, &patch(true, false), &mut regs);
        assert_eq!(zplanes_field(&regs), 0);
    }

    #[test]
    fn htile_fields_zero_when_disabled() {
        let c = caps(Generation::Gfx10);
        let mut regs = init_ds_surface(&c, &ds_state(&catalog::Z32_FLOAT, 1));
        set_mutable_ds_surface_fields(&c, &patch(false, false), &mut regs);
        assert_eq!(zplanes_field(&regs), 0);
        assert_eq!((regs.db_z_info >> 27) & 1, 0);
        assert_eq!(regs.db_htile_base, 0);
        assert_eq!(regs.db_htile_surface, 0);
        //and the toggle is reversible: enabling then disabling clears
        set_mutable_ds_surface_fields(&c, &patch(true, false), &mut regs);
        set_mutable_ds_surface_fields(&c, &patch(false, false), &mut regs);
        assert_eq!((regs.db_z_info >> 27) & 1, 0);
        assert_eq!(zplanes_field(&regs), 0);
    }

    #[test]
    fn gfx12_aux_surfaces() {
        let mut state = ds_state(&catalog::Z32_FLOAT, 1);
        state.hiz = Some(AuxSurface {
            va: 0x1000,
            swizzle_mode: 4,
        });
        let gfx12 = caps(Generation::Gfx12);
        let regs = init_ds_surface(&gfx12, &state);
        assert_eq!(regs.hiz_info & 1, 1);
        assert_eq!((regs.hiz_info >> 4) & 0x1F, 4);
        assert_eq!(regs.hiz_base, 0x1000);
        assert_eq!(regs.his_info, 0);
        //pre-GFX12 the aux fields stay zero even when supplied
        let regs = init_ds_surface(&caps(Generation::Gfx11), &state);
        assert_eq!(regs.hiz_info, 0);
        assert_eq!(regs.hiz_base, 0);
    }

    #[test]
    fn static_fields() {
        let c = caps(Generation::Gfx9);
        let regs = init_ds_surface(&c, &ds_state(&catalog::Z16_UNORM, 4));
        assert_eq!(regs.db_z_info & 0x3, DbFormat::Z16 as u32);
        assert_eq!((regs.db_z_info >> 2) & 0x3, 2, "log2 samples");
        assert_eq!((regs.db_z_info >> 20) & 0x1F, 10, "swizzle mode");
        assert_eq!(regs.db_depth_size, (1079 << 16) | 1919);
    }
}
