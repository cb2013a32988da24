// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The 8-word image descriptor: three structurally distinct families.
//!
//! Dispatch: GFX12, GFX10/10.3/11, legacy (GFX6..GFX9).  The families do not
//! share word layouts; each is documented at its builder.  What they do
//! share: format resolution (with the upgraded-depth substitution), the
//! DST_SEL group, and the compression post-step.
//!
//! The *static* builder leaves every address field zero.
//! [`set_mutable_texture_fields`] patches addresses, tiling, and compression
//! metadata into an already-built descriptor, because those change on rebind
//! without the shape changing.

use crate::bittricks::{field, unsigned_fixed};
use crate::descriptors::IMAGE_DESC_DWORDS;
use crate::formats::{
    Gfx10Format, Layout, PixelFormatDescriptor, ZsFormat, border_color_swizzle, gfx10_hw_format,
    texture_formats,
};
use crate::hw::{DeviceCapabilities, Generation};
use crate::swizzle::SwizzleSet;

/// Hardware resource-type codes (word 3 TYPE field, all generations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ResourceType {
    Image1D = 8,
    Image2D = 9,
    Image3D = 10,
    Cube = 11,
    Image1DArray = 12,
    Image2DArray = 13,
    Image2DMsaa = 14,
    Image2DMsaaArray = 15,
}

impl ResourceType {
    pub const fn is_3d(self) -> bool {
        matches!(self, ResourceType::Image3D)
    }
}

/// Compression-metadata parameters.  Only present when DCC is enabled for
/// the view; absent means every compression field stays zero.
#[derive(Debug, Clone, Copy)]
pub struct DccParams {
    /// Code 0..=3, 64B..512B.
    pub max_uncompressed_block_size: u32,
    /// Code 0..=3, 64B..512B; position is generation-specific.
    pub max_compressed_block_size: u32,
    /// Whether alpha rides in the most significant channel for clear-color
    /// purposes.
    pub alpha_is_on_msb: bool,
}

/// Static shape of a texture view.  Plain data, no GPU memory ownership.
#[derive(Debug, Clone, Copy)]
pub struct TextureViewState<'a> {
    pub format: &'a PixelFormatDescriptor,
    pub resource_type: ResourceType,
    pub width: u32,
    pub height: u32,
    /// Total depth for 3D resources, total layer count for arrays.
    pub depth: u32,
    /// Row pitch in elements (legacy word 4).
    pub pitch: u32,
    /// View mip range.
    pub base_level: u32,
    pub last_level: u32,
    /// Total mip count of the underlying image (GFX10+ MAX_MIP).
    pub num_levels: u32,
    pub first_layer: u32,
    pub last_layer: u32,
    pub num_samples: u32,
    pub min_lod: f32,
    pub swizzle: SwizzleSet,
    /// The view asked for the clamped float-32 depth upgrade and carries no
    /// stencil channel.
    pub upgraded_depth: bool,
    /// The underlying image is block-compressed (the view format may not be).
    pub image_block_compressed: bool,
    /// Anisotropic filtering is constrained to the base level.
    pub aniso_single_level: bool,
    pub dcc: Option<DccParams>,
}

/// Dynamic (rebindable) portion of an image descriptor.
#[derive(Debug, Clone, Copy)]
pub struct MutableTextureState {
    /// 256-byte aligned base address.
    pub va: u64,
    /// Bank/pipe swizzle in 256-byte units, ORed into the address low bits.
    pub tile_swizzle: u32,
    /// Tiling table index, pre-GFX10.
    pub tiling_index: u32,
    /// Swizzle mode, GFX10+.
    pub swizzle_mode: u32,
    pub is_linear: bool,
    /// Linear row pitch in elements, for the GFX10.3+ non-block-aligned
    /// override; zero when unused.
    pub pitch: u32,
    pub dcc_enabled: bool,
    /// Compression-metadata address (256-byte aligned).
    pub dcc_va: u64,
}

fn resolve_combined_format(generation: Generation, state: &TextureViewState<'_>) -> u32 {
    //depth-only views may ask for the clamp variant of 32_FLOAT; the
    //enumerant was re-keyed on GFX11
    if state.upgraded_depth && state.format.zs() == Some(ZsFormat::Z32Float) {
        return if generation >= Generation::Gfx11 {
            Gfx10Format::F32FloatClampGfx11 as u32
        } else {
            Gfx10Format::F32FloatClampGfx10 as u32
        };
    }
    gfx10_hw_format(state.format).map_or(0, |f| f as u32)
}

/// Mip range actually encoded: multisampled resources have no mip chain, the
/// field pair is reused for the sample count.
fn encoded_mip_range(state: &TextureViewState<'_>) -> (u32, u32) {
    if state.num_samples > 1 {
        (0, state.num_samples.ilog2())
    } else {
        (state.base_level, state.last_level)
    }
}

fn encoded_max_mip(state: &TextureViewState<'_>) -> u32 {
    if state.num_samples > 1 {
        state.num_samples.ilog2()
    } else {
        state.num_levels.max(1) - 1
    }
}

/// Compression post-step, shared by all three families once the base fields
/// are in place.  Field positions: COMPRESSION_EN/ALPHA_IS_ON_MSB/
/// MAX_UNCOMPRESSED/MAX_COMPRESSED at [12]/[13]/[15:14]/[17:16] of word 6 on
/// legacy parts, [16]/[17]/[19:18]/[21:20] from GFX10 on.
fn apply_dcc(generation: Generation, dcc: &DccParams, desc: &mut [u32; IMAGE_DESC_DWORDS]) {
    let base = if generation >= Generation::Gfx10 { 16 } else { 12 };
    desc[6] |= field(1, base, 1)
        | field(dcc.alpha_is_on_msb as u32, base + 1, 1)
        | field(dcc.max_uncompressed_block_size, base + 2, 2)
        | field(dcc.max_compressed_block_size, base + 4, 2);
}

/// Legacy family, GFX6..GFX9.
///
/// Word 1: MIN_LOD [19:8] (4.8 fixed), DATA_FORMAT [25:20], NUM_FORMAT
/// [29:26].  Word 2: WIDTH-1 [13:0], HEIGHT-1 [27:14], PERF_MOD [31:29].
/// Word 3: DST_SEL [11:0], BASE_LEVEL [15:12], LAST_LEVEL [19:16],
/// TILING_INDEX [24:20] (mutable), TYPE [31:28].  Word 4: DEPTH [12:0],
/// PITCH-1 [26:13].  Word 5: BASE_ARRAY [12:0], LAST_ARRAY [25:13]
/// (pre-GFX9 only — GFX9 folds the last layer into DEPTH instead).
fn build_legacy(
    caps: &DeviceCapabilities,
    state: &TextureViewState<'_>,
) -> [u32; IMAGE_DESC_DWORDS] {
    let generation = caps.generation();
    let (data, num) = texture_formats(caps, state.format)
        .map_or((0, 0), |(d, n)| (d as u32, n as u32));
    let (base_level, last_level) = encoded_mip_range(state);

    //GFX9 stores "last accessible": depth-1 for 3D, the last layer for
    //arrays.  Earlier parts store total depth minus one and keep a separate
    //last-array field.
    let depth_field = if generation == Generation::Gfx9 {
        if state.resource_type.is_3d() {
            state.depth - 1
        } else {
            state.last_layer
        }
    } else {
        state.depth - 1
    };

    let mut desc = [0u32; IMAGE_DESC_DWORDS];
    desc[1] = field(unsigned_fixed(state.min_lod.clamp(0.0, 15.0), 8), 8, 12)
        | field(data, 20, 6)
        | field(num, 26, 4);
    desc[2] = field(state.width - 1, 0, 14) | field(state.height - 1, 14, 14) | field(4, 29, 3);
    desc[3] = state.swizzle.dst_sel_packed()
        | field(base_level, 12, 4)
        | field(last_level, 16, 4)
        | field(state.resource_type as u32, 28, 4);
    desc[4] = field(depth_field, 0, 13) | field(state.pitch.max(1) - 1, 13, 14);
    desc[5] = field(state.first_layer, 0, 13);
    if generation < Generation::Gfx9 {
        desc[5] |= field(state.last_layer, 13, 13);
    }

    //The last word is unread by hardware here.  When anisotropy is pinned
    //to the base level on single-sampled views, the shader uses it to clear
    //sampler word 0 bits, so prime it with the matching pattern.
    if generation <= Generation::Gfx7 && state.aniso_single_level && state.num_samples <= 1 {
        desc[7] = if state.base_level == state.last_level {
            !(0x7u32 << 9) //clears MAX_ANISO_RATIO
        } else {
            0xFFFF_FFFF
        };
    }

    if let Some(dcc) = &state.dcc {
        apply_dcc(generation, dcc, &mut desc);
    }
    desc
}

/// GFX10/10.3/11 family.
///
/// Word 1: BASE_ADDRESS_HI [7:0] (mutable), then MIN_LOD [19:8] on
/// GFX10/10.3 *or* MAX_MIP [11:8] on GFX11 (the compression and border-color
/// fields displaced MIN_LOD, which moves to words 5/6), FORMAT [26:20],
/// WIDTH_LO [31:30].  Word 2: WIDTH_HI [13:0], HEIGHT-1 [29:16],
/// RESOURCE_LEVEL [30] (GFX10.x only).  Word 3: DST_SEL [11:0], BASE_LEVEL
/// [15:12], LAST_LEVEL [19:16], SW_MODE [24:20] (mutable), BC_SWIZZLE
/// [27:25], TYPE [31:28].  Word 4: DEPTH [12:0], BASE_ARRAY [28:16].
/// Word 5: MAX_MIP [16:13] on GFX10/10.3, MIN_LOD_LO [31:27] on GFX11.
/// Word 6: MIN_LOD_HI [6:0] on GFX11, compression fields per [`apply_dcc`].
fn build_gfx10(
    caps: &DeviceCapabilities,
    state: &TextureViewState<'_>,
) -> [u32; IMAGE_DESC_DWORDS] {
    let generation = caps.generation();
    let format = resolve_combined_format(generation, state);
    let (base_level, last_level) = encoded_mip_range(state);
    let max_mip = encoded_max_mip(state);
    let min_lod = unsigned_fixed(state.min_lod.clamp(0.0, 15.0), 8);
    let bc_swizzle = border_color_swizzle(state.format) as u32;

    let width = state.width - 1;
    let depth_field = if state.resource_type.is_3d() {
        state.depth - 1
    } else {
        state.last_layer
    };

    let mut desc = [0u32; IMAGE_DESC_DWORDS];
    desc[1] = field(format, 20, 7) | field(width, 30, 2);
    desc[2] = field(width >> 2, 0, 14) | field(state.height - 1, 16, 14);
    if generation >= Generation::Gfx11 {
        desc[1] |= field(max_mip, 8, 4);
        desc[5] = field(min_lod, 27, 5);
        desc[6] = field(min_lod >> 5, 0, 7);
    } else {
        desc[1] |= field(min_lod, 8, 12);
        desc[2] |= field(1, 30, 1); //RESOURCE_LEVEL, retired on GFX11
        desc[5] = field(max_mip, 13, 4);
    }
    desc[3] = state.swizzle.dst_sel_packed()
        | field(base_level, 12, 4)
        | field(last_level, 16, 4)
        | field(bc_swizzle, 25, 3)
        | field(state.resource_type as u32, 28, 4);
    desc[4] = field(depth_field, 0, 13) | field(state.first_layer, 16, 13);

    if let Some(dcc) = &state.dcc {
        apply_dcc(generation, dcc, &mut desc);
    }
    desc
}

/// GFX12 family.
///
/// The mip chain description moved entirely into word 1: BASE_ADDRESS_HI
/// [7:0] (mutable), MAX_MIP [11:8], BASE_LEVEL [15:12], FORMAT [26:20],
/// WIDTH_LO [31:30].  Word 2: WIDTH_HI [13:0], HEIGHT-1 [29:16].  Word 3:
/// DST_SEL [11:0], NO_EDGE_CLAMP [12], LAST_LEVEL [19:16], SW_MODE [24:20]
/// (mutable), BC_SWIZZLE [27:25], TYPE [31:28].  Word 4 as GFX10.
fn build_gfx12(
    caps: &DeviceCapabilities,
    state: &TextureViewState<'_>,
) -> [u32; IMAGE_DESC_DWORDS] {
    let generation = caps.generation();
    let format = resolve_combined_format(generation, state);
    let (base_level, last_level) = encoded_mip_range(state);
    let max_mip = encoded_max_mip(state);
    let bc_swizzle = border_color_swizzle(state.format) as u32;

    //a reinterpreting view (uncompressed view of a block-compressed image)
    //must not clamp texels to the block-aligned edge
    let no_edge_clamp = state.image_block_compressed && state.format.layout() == Layout::Plain;

    let width = state.width - 1;
    let depth_field = if state.resource_type.is_3d() {
        state.depth - 1
    } else {
        state.last_layer
    };

    let mut desc = [0u32; IMAGE_DESC_DWORDS];
    desc[1] = field(format, 20, 7)
        | field(max_mip, 8, 4)
        | field(base_level, 12, 4)
        | field(width, 30, 2);
    desc[2] = field(width >> 2, 0, 14) | field(state.height - 1, 16, 14);
    desc[3] = state.swizzle.dst_sel_packed()
        | field(no_edge_clamp as u32, 12, 1)
        | field(last_level, 16, 4)
        | field(bc_swizzle, 25, 3)
        | field(state.resource_type as u32, 28, 4);
    desc[4] = field(depth_field, 0, 13) | field(state.first_layer, 16, 13);

    if let Some(dcc) = &state.dcc {
        apply_dcc(generation, dcc, &mut desc);
    }
    desc
}

/// Build the static 8-word image descriptor.
///
/// Exactly one family builder runs per call; the families are disjoint and
/// cover Gfx6..Gfx12.
pub fn build_texture_descriptor(
    caps: &DeviceCapabilities,
    state: &TextureViewState<'_>,
) -> [u32; IMAGE_DESC_DWORDS] {
    let generation = caps.generation();
    if generation >= Generation::Gfx12 {
        build_gfx12(caps, state)
    } else if generation >= Generation::Gfx10 {
        build_gfx10(caps, state)
    } else {
        build_legacy(caps, state)
    }
}

/// Patch the dynamic fields of an already-built descriptor.
///
/// Rebinding changes the address, the tiling arrangement, and the
/// compression metadata without touching the shape, so this never rebuilds
/// the static fields — it masks and rewrites exactly its own.
pub fn set_mutable_texture_fields(
    caps: &DeviceCapabilities,
    state: &MutableTextureState,
    desc: &mut [u32; IMAGE_DESC_DWORDS],
) {
    let generation = caps.generation();
    desc[0] = (state.va >> 8) as u32 | field(state.tile_swizzle, 0, 8);
    desc[1] = (desc[1] & !0xFF) | field((state.va >> 40) as u32, 0, 8);

    if generation >= Generation::Gfx10 {
        desc[3] = (desc[3] & !(0x1F << 20)) | field(state.swizzle_mode, 20, 5);
        if generation >= Generation::Gfx10_3 && state.is_linear && state.pitch != 0 {
            //non-block-aligned linear pitch takes over DEPTH and BASE_ARRAY
            desc[4] = field(state.pitch - 1, 0, 29);
        }
    } else {
        desc[3] = (desc[3] & !(0x1F << 20)) | field(state.tiling_index, 20, 5);
    }

    //GFX12 compression is transparent; there is no metadata surface to point
    //at on that generation
    if state.dcc_enabled && generation < Generation::Gfx12 {
        desc[7] = (state.dcc_va >> 8) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::catalog;
    use crate::hw::{ChipFamily, DeviceFlags};

    fn caps(generation: Generation) -> DeviceCapabilities {
        DeviceCapabilities::new(generation, ChipFamily::Other, DeviceFlags::empty())
    }

    fn view_2d(format: &PixelFormatDescriptor) -> TextureViewState<'_> {
        TextureViewState {
            format,
            resource_type: ResourceType::Image2DArray,
            width: 1024,
            height: 512,
            depth: 6,
            pitch: 1024,
            base_level: 0,
            last_level: 3,
            num_levels: 10,
            first_layer: 2,
            last_layer: 5,
            num_samples: 1,
            min_lod: 0.0,
            swizzle: SwizzleSet::IDENTITY,
            upgraded_depth: false,
            image_block_compressed: false,
            aniso_single_level: false,
            dcc: None,
        }
    }

    #[test]
    fn depth_field_semantics_gfx6_vs_gfx9() {
        let state = view_2d(&catalog::R8G8B8A8_UNORM);
        let legacy = build_texture_descriptor(&caps(Generation::Gfx6), &state);
        //pre-GFX9: total depth - 1 plus a separate last-array field
        assert_eq!(legacy[4] & 0x1FFF, 5);
        assert_eq!((legacy[5] >> 13) & 0x1FFF, 5);
        let gfx9 = build_texture_descriptor(&caps(Generation::Gfx9), &state);
        //GFX9 arrays: DEPTH holds the last accessible layer
        assert_eq!(gfx9[4] & 0x1FFF, 5);
        assert_eq!((gfx9[5] >> 13) & 0x1FFF, 0, "no last-array field on GFX9");

        let mut volume = state;
        volume.resource_type = ResourceType::Image3D;
        volume.depth = 64;
        let gfx9_3d = build_texture_descriptor(&caps(Generation::Gfx9), &volume);
        assert_eq!(gfx9_3d[4] & 0x1FFF, 63);
    }

    #[test]
    fn msaa_forces_mip_fields() {
        let mut state = view_2d(&catalog::R8G8B8A8_UNORM);
        state.resource_type = ResourceType::Image2DMsaaArray;
        state.num_samples = 8;
        let desc = build_texture_descriptor(&caps(Generation::Gfx8), &state);
        assert_eq!((desc[3] >> 12) & 0xF, 0, "BASE_LEVEL forced to 0");
        assert_eq!((desc[3] >> 16) & 0xF, 3, "LAST_LEVEL = log2(samples)");
    }

    #[test]
    fn aniso_poison_word_legacy_only() {
        let mut state = view_2d(&catalog::R8G8B8A8_UNORM);
        state.aniso_single_level = true;
        state.base_level = 1;
        state.last_level = 1;
        let gfx7 = build_texture_descriptor(&caps(Generation::Gfx7), &state);
        assert_eq!(gfx7[7], !(0x7 << 9));
        state.last_level = 4;
        let gfx7_mips = build_texture_descriptor(&caps(Generation::Gfx7), &state);
        assert_eq!(gfx7_mips[7], 0xFFFF_FFFF);
        let gfx8 = build_texture_descriptor(&caps(Generation::Gfx8), &state);
        assert_eq!(gfx8[7], 0, "GFX8 does not use the poison word");
    }

    #[test]
    fn gfx10_width_split_and_resource_level() {
        let state = view_2d(&catalog::R8G8B8A8_UNORM);
        let desc = build_texture_descriptor(&caps(Generation::Gfx10), &state);
        let width = 1023u32;
        assert_eq!(desc[1] >> 30, width & 0x3);
        assert_eq!(desc[2] & 0x3FFF, width >> 2);
        assert_eq!((desc[2] >> 30) & 1, 1);
        let gfx11 = build_texture_descriptor(&caps(Generation::Gfx11), &state);
        assert_eq!((gfx11[2] >> 30) & 1, 0, "RESOURCE_LEVEL retired on GFX11");
    }

    #[test]
    fn gfx11_min_lod_displacement() {
        let mut state = view_2d(&catalog::R8G8B8A8_UNORM);
        state.min_lod = 2.5;
        let min_lod_fixed: u32 = 2 * 256 + 128;
        let gfx10 = build_texture_descriptor(&caps(Generation::Gfx10), &state);
        assert_eq!((gfx10[1] >> 8) & 0xFFF, min_lod_fixed);
        assert_eq!((gfx10[5] >> 13) & 0xF, 9, "MAX_MIP in word 5");
        let gfx11 = build_texture_descriptor(&caps(Generation::Gfx11), &state);
        assert_eq!((gfx11[1] >> 8) & 0xF, 9, "MAX_MIP displaces MIN_LOD");
        assert_eq!(
            (gfx11[5] >> 27) | (((gfx11[6]) & 0x7F) << 5),
            min_lod_fixed,
            "MIN_LOD split across words 5/6"
        );
    }

    #[test]
    fn gfx12_mip_folding_and_edge_clamp() {
        let mut state = view_2d(&catalog::R8G8B8A8_UNORM);
        state.base_level = 2;
        let desc = build_texture_descriptor(&caps(Generation::Gfx12), &state);
        assert_eq!((desc[1] >> 12) & 0xF, 2, "BASE_LEVEL folded into word 1");
        assert_eq!((desc[1] >> 8) & 0xF, 9, "MAX_MIP folded into word 1");
        assert_eq!((desc[3] >> 12) & 1, 0);

        state.image_block_compressed = true;
        let reinterpreted = build_texture_descriptor(&caps(Generation::Gfx12), &state);
        assert_eq!((reinterpreted[3] >> 12) & 1, 1, "NO_EDGE_CLAMP");
        //a compressed view of the compressed image keeps edge clamping
        let bc_view = TextureViewState {
            format: &catalog::BC1_UNORM,
            image_block_compressed: true,
            ..state
        };
        let native = build_texture_descriptor(&caps(Generation::Gfx12), &bc_view);
        assert_eq!((native[3] >> 12) & 1, 0);
    }

    #[test]
    fn upgraded_depth_enumerants_differ() {
        let mut state = view_2d(&catalog::Z32_FLOAT);
        state.upgraded_depth = true;
        let gfx10 = build_texture_descriptor(&caps(Generation::Gfx10), &state);
        let gfx11 = build_texture_descriptor(&caps(Generation::Gfx11), &state);
        assert_eq!(
            (gfx10[1] >> 20) & 0x7F,
            Gfx10Format::F32FloatClampGfx10 as u32
        );
        assert_eq!(
            (gfx11[1] >> 20) & 0x7F,
            Gfx10Format::F32FloatClampGfx11 as u32
        );
    }

    #[test]
    fn compression_bits_zero_unless_enabled() {
        let state = view_2d(&catalog::R8G8B8A8_UNORM);
        for generation in Generation::ALL {
            let desc = build_texture_descriptor(&caps(generation), &state);
            assert_eq!(desc[6], 0, "{generation}: compression bits leaked");
            assert_eq!(desc[7], 0, "{generation}: metadata address leaked");
        }
        let mut dcc_state = state;
        dcc_state.dcc = Some(DccParams {
            max_uncompressed_block_size: 2,
            max_compressed_block_size: 1,
            alpha_is_on_msb: true,
        });
        let legacy = build_texture_descriptor(&caps(Generation::Gfx8), &dcc_state);
        assert_eq!((legacy[6] >> 12) & 1, 1);
        assert_eq!((legacy[6] >> 13) & 1, 1);
        let gfx11 = build_texture_descriptor(&caps(Generation::Gfx11), &dcc_state);
        assert_eq!((gfx11[6] >> 16) & 1, 1, "field block moved on GFX10+");
    }

    #[test]
    fn mutable_patch_preserves_static_fields() {
        let state = view_2d(&catalog::R8G8B8A8_UNORM);
        let caps10 = caps(Generation::Gfx10_3);
        let mut desc = build_texture_descriptor(&caps10, &state);
        let static_word3 = desc[3];
        let va: u64 = 0xAB12_3456_7800;
        let patch = MutableTextureState {
            va,
            tile_swizzle: 0x5,
            tiling_index: 0,
            swizzle_mode: 25,
            is_linear: false,
            pitch: 0,
            dcc_enabled: true,
            dcc_va: 0xABC_DEF0_0000,
        };
        set_mutable_texture_fields(&caps10, &patch, &mut desc);
        assert_eq!(desc[0], ((va >> 8) as u32) | 0x5);
        assert_eq!(desc[1] & 0xFF, 0xAB, "va high bits");
        assert_eq!((desc[3] >> 20) & 0x1F, 25, "swizzle mode");
        assert_eq!(
            desc[3] & !(0x1F << 20),
            static_word3 & !(0x1F << 20),
            "static word 3 fields untouched"
        );
        assert_eq!(desc[7], (0xABC_DEF0_0000u64 >> 8) as u32);
    }

    #[test]
    fn linear_pitch_override_gfx10_3() {
        let state = view_2d(&catalog::R8G8B8A8_UNORM);
        let patch = MutableTextureState {
            va: 0,
            tile_swizzle: 0,
            tiling_index: 0,
            swizzle_mode: 0,
            is_linear: true,
            pitch: 1280,
            dcc_enabled: false,
            dcc_va: 0,
        };
        let caps103 = caps(Generation::Gfx10_3);
        let mut desc = build_texture_descriptor(&caps103, &state);
        set_mutable_texture_fields(&caps103, &patch, &mut desc);
        assert_eq!(desc[4], 1279, "pitch-1 takes over DEPTH/BASE_ARRAY");
        //plain GFX10 has no such override
        let caps10 = caps(Generation::Gfx10);
        let mut desc = build_texture_descriptor(&caps10, &state);
        let word4 = desc[4];
        set_mutable_texture_fields(&caps10, &patch, &mut desc);
        assert_eq!(desc[4], word4);
    }
}
