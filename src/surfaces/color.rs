// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Color-buffer surface register state.
//!
//! Register field layouts used here:
//!
//! - `cb_color_info`: FORMAT [6:2], NUMBER_TYPE [10:8], COMP_SWAP [12:11],
//!   FAST_CLEAR [13] (mutable: CMASK), COMPRESSION [14] (mutable: FMASK),
//!   DCC_ENABLE [15] (mutable).
//! - `cb_color_attrib`: TILE_MODE [4:0] (pre-GFX10), NUM_SAMPLES [14:12]
//!   (log2), NUM_FRAGMENTS [16:15] (log2).
//! - `cb_color_attrib2` (GFX9+): MIP0_WIDTH-1 [13:0], MIP0_HEIGHT-1 [27:14].
//! - `cb_color_attrib3` (GFX10+): COLOR_SW_MODE [4:0].
//! - `cb_color_view`: SLICE_START [10:0], SLICE_MAX [23:13].
//! - `cb_color_pitch`/`cb_color_slice` (pre-GFX9): TILE_MAX in 8x8/64-pixel
//!   units.

use crate::bittricks::field;
use crate::formats::{
    PixelFormatDescriptor, color_buffer_format, color_number_type, color_swap,
};
use crate::hw::{DeviceCapabilities, Generation};

/// Static shape of a color render target.
#[derive(Debug, Clone, Copy)]
pub struct ColorSurfaceState<'a> {
    pub format: &'a PixelFormatDescriptor,
    pub width: u32,
    pub height: u32,
    pub first_layer: u32,
    pub last_layer: u32,
    pub num_samples: u32,
    pub num_storage_samples: u32,
    pub swizzle_mode: u32,
    /// Row pitch in pixels; only the pre-GFX9 tile registers consume it.
    pub pitch: u32,
}

/// Named register values consumed by the state emitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorSurfaceRegs {
    pub cb_color_info: u32,
    pub cb_color_attrib: u32,
    pub cb_color_attrib2: u32,
    pub cb_color_attrib3: u32,
    pub cb_color_view: u32,
    pub cb_color_pitch: u32,
    pub cb_color_slice: u32,
    pub cb_color_base: u64,
    pub cb_color_cmask: u64,
    pub cb_color_fmask: u64,
    pub cb_dcc_base: u64,
}

/// Per-draw dynamic fields.
#[derive(Debug, Clone, Copy)]
pub struct MutableColorState {
    pub color_va: u64,
    pub cmask_va: u64,
    pub fmask_va: u64,
    pub dcc_va: u64,
    /// CMASK-backed fast clear.
    pub fast_clear_enabled: bool,
    /// FMASK compression for multisampled surfaces.
    pub fmask_compression_enabled: bool,
    pub dcc_enabled: bool,
}

/// Build the static color-surface registers.
pub fn init_cb_surface(
    caps: &DeviceCapabilities,
    state: &ColorSurfaceState<'_>,
) -> ColorSurfaceRegs {
    let generation = caps.generation();
    let format = color_buffer_format(generation, state.format).map_or(0, |f| f as u32);
    let number_type = color_number_type(state.format).map_or(0, |n| n as u32);
    let swap = color_swap(state.format).map_or(0, |s| s as u32);
    let log_samples = state.num_samples.max(1).ilog2();
    let log_fragments = state.num_storage_samples.max(1).ilog2();

    let mut regs = ColorSurfaceRegs {
        cb_color_info: field(format, 2, 5) | field(number_type, 8, 3) | field(swap, 11, 2),
        cb_color_attrib: field(log_samples, 12, 3) | field(log_fragments, 15, 2),
        cb_color_view: field(state.first_layer, 0, 11) | field(state.last_layer, 13, 11),
        ..Default::default()
    };

    if generation >= Generation::Gfx10 {
        regs.cb_color_attrib3 = field(state.swizzle_mode, 0, 5);
    } else {
        regs.cb_color_attrib |= field(state.swizzle_mode, 0, 5);
    }
    if generation >= Generation::Gfx9 {
        regs.cb_color_attrib2 =
            field(state.width - 1, 0, 14) | field(state.height - 1, 14, 14);
    } else {
        //tile units: pitch in 8-pixel groups, slice in 64-pixel groups
        regs.cb_color_pitch = field(state.pitch / 8 - 1, 0, 11);
        regs.cb_color_slice = field(state.pitch * state.height / 64 - 1, 0, 22);
    }
    regs
}

/// Patch the per-draw dynamic fields of color-surface registers.
///
/// Auxiliary addresses stay zero unless the matching enable is set, so a
/// disabled compression path can never leak a stale pointer.
pub fn set_mutable_cb_surface_fields(
    caps: &DeviceCapabilities,
    state: &MutableColorState,
    regs: &mut ColorSurfaceRegs,
) {
    regs.cb_color_base = state.color_va;

    regs.cb_color_info &= !(field(1, 13, 1) | field(1, 14, 1) | field(1, 15, 1));
    regs.cb_color_cmask = 0;
    regs.cb_color_fmask = 0;
    regs.cb_dcc_base = 0;
    //CMASK and FMASK retire together with the FMASK descriptor; GFX11+
    //fast clears ride on DCC instead
    let has_msaa_meta = caps.generation().has_fmask();
    if state.fast_clear_enabled && has_msaa_meta {
        regs.cb_color_info |= field(1, 13, 1);
        regs.cb_color_cmask = state.cmask_va;
    }
    if state.fmask_compression_enabled && has_msaa_meta {
        regs.cb_color_info |= field(1, 14, 1);
        regs.cb_color_fmask = state.fmask_va;
    }
    if state.dcc_enabled {
        regs.cb_color_info |= field(1, 15, 1);
        regs.cb_dcc_base = state.dcc_va;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{CbFormat, CbNumberType, CbSwap, catalog};
    use crate::hw::{ChipFamily, DeviceCapabilities, DeviceFlags};

    fn caps(generation: Generation) -> DeviceCapabilities {
        DeviceCapabilities::new(generation, ChipFamily::Other, DeviceFlags::empty())
    }

    fn cb_state(format: &PixelFormatDescriptor) -> ColorSurfaceState<'_> {
        ColorSurfaceState {
            format,
            width: 1024,
            height: 768,
            first_layer: 0,
            last_layer: 3,
            num_samples: 4,
            num_storage_samples: 2,
            swizzle_mode: 12,
            pitch: 1024,
        }
    }

    #[test]
    fn static_format_fields() {
        let regs = init_cb_surface(&caps(Generation::Gfx9), &cb_state(&catalog::B8G8R8A8_SRGB));
        assert_eq!((regs.cb_color_info >> 2) & 0x1F, CbFormat::F8_8_8_8 as u32);
        assert_eq!((regs.cb_color_info >> 8) & 0x7, CbNumberType::Srgb as u32);
        assert_eq!((regs.cb_color_info >> 11) & 0x3, CbSwap::Alt as u32);
        assert_eq!((regs.cb_color_attrib >> 12) & 0x7, 2, "log2 samples");
        assert_eq!((regs.cb_color_attrib >> 15) & 0x3, 1, "log2 fragments");
        assert_eq!(regs.cb_color_attrib2, (767 << 14) | 1023);
    }

    #[test]
    fn tiling_field_home_per_generation() {
        let state = cb_state(&catalog::R8G8B8A8_UNORM);
        let legacy = init_cb_surface(&caps(Generation::Gfx8), &state);
        assert_eq!(legacy.cb_color_attrib & 0x1F, 12);
        assert_eq!(legacy.cb_color_attrib3, 0);
        assert_eq!(legacy.cb_color_pitch, 1024 / 8 - 1);
        let gfx10 = init_cb_surface(&caps(Generation::Gfx10), &state);
        assert_eq!(gfx10.cb_color_attrib3 & 0x1F, 12);
        assert_eq!(gfx10.cb_color_attrib & 0x1F, 0);
        assert_eq!(gfx10.cb_color_pitch, 0);
    }

    #[test]
    fn mutable_enables_gate_addresses() {
        let c = caps(Generation::Gfx9);
        let mut regs = init_cb_surface(&c, &cb_state(&catalog::R8G8B8A8_UNORM));
        let mut patch = MutableColorState {
            color_va: 0x11000,
            cmask_va: 0x22000,
            fmask_va: 0x33000,
            dcc_va: 0x44000,
            fast_clear_enabled: false,
            fmask_compression_enabled: false,
            dcc_enabled: false,
        };
        set_mutable_cb_surface_fields(&c, &patch, &mut regs);
        assert_eq!(regs.cb_color_base, 0x11000);
        assert_eq!(regs.cb_color_cmask, 0);
        assert_eq!(regs.cb_color_fmask, 0);
        assert_eq!(regs.cb_dcc_base, 0);
        assert_eq!((regs.cb_color_info >> 13) & 0x7, 0);

        patch.fast_clear_enabled = true;
        patch.dcc_enabled = true;
        set_mutable_cb_surface_fields(&c, &patch, &mut regs);
        assert_eq!(regs.cb_color_cmask, 0x22000);
        assert_eq!(regs.cb_dcc_base, 0x44000);
        assert_eq!(regs.cb_color_fmask, 0, "fmask still disabled");
        assert_eq!((regs.cb_color_info >> 13) & 1, 1);
        assert_eq!((regs.cb_color_info >> 15) & 1, 1);

        //re-disabling clears both the bit and the pointer
        patch.dcc_enabled = false;
        set_mutable_cb_surface_fields(&c, &patch, &mut regs);
        assert_eq!(regs.cb_dcc_base, 0);
        assert_eq!((regs.cb_color_info >> 15) & 1, 0);
    }

    #[test]
    fn msaa_metadata_retired_on_gfx11() {
        let c = caps(Generation::Gfx11);
        let mut regs = init_cb_surface(&c, &cb_state(&catalog::R8G8B8A8_UNORM));
        let patch = MutableColorState {
            color_va: 0x11000,
            cmask_va: 0x22000,
            fmask_va: 0x33000,
            dcc_va: 0x44000,
            fast_clear_enabled: true,
            fmask_compression_enabled: true,
            dcc_enabled: true,
        };
        set_mutable_cb_surface_fields(&c, &patch, &mut regs);
        assert_eq!(regs.cb_color_cmask, 0);
        assert_eq!(regs.cb_color_fmask, 0);
        assert_eq!((regs.cb_color_info >> 13) & 0x3, 0);
        assert_eq!(regs.cb_dcc_base, 0x44000, "DCC path still live");
    }

    #[test]
    fn deterministic() {
        let c = caps(Generation::Gfx10_3);
        let state = cb_state(&catalog::R16G16B16A16_FLOAT);
        assert_eq!(init_cb_surface(&c, &state), init_cb_surface(&c, &state));
    }
}
