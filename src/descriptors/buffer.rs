// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The 4-word buffer descriptor.
//!
//! Word 0: base address, low 32 bits.
//! Word 1: BASE_ADDRESS_HI [15:0], STRIDE [29:16]; the swizzle-enable moved
//! when GFX11 widened it — a single bit at [31] before GFX11, a two-bit
//! granularity field at [31:30] after (this crate always selects the 16-byte
//! granularity the swizzled path uses).
//! Word 2: NUM_RECORDS (the size check unit depends on the OOB policy).
//! Word 3: DST_SEL_X..W [11:0], INDEX_STRIDE [22:21], ADD_TID_ENABLE [23],
//! then before GFX10 {NUM_FORMAT [14:12], DATA_FORMAT [18:15], ELEMENT_SIZE
//! [20:19]} or from GFX10 {FORMAT [18:12], RESOURCE_LEVEL [24] (GFX10.x
//! only), OOB_SELECT [29:28]}.

use crate::bittricks::field;
use crate::descriptors::RESOURCE_DESC_DWORDS;
use crate::formats::{
    PixelFormatDescriptor, buffer_data_format, buffer_num_format, gfx10_hw_format,
};
use crate::hw::Generation;
use crate::swizzle::SwizzleSet;

/// Out-of-bounds check policy, GFX10+.
///
/// The four encodings are fixed per generation family and are not derivable;
/// the semantics below are copied from the documented behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OobSelect {
    /// Swizzle-aware structured check: out of bounds when
    /// `index * stride + offset` reaches past `NUM_RECORDS * stride`.
    StructuredWithOffset = 0,
    /// Raw check: the byte offset alone is compared against NUM_RECORDS;
    /// STRIDE is ignored entirely.
    Raw = 1,
    /// No bounds check, except zero NUM_RECORDS is always out of bounds.
    DisabledZeroRecords = 2,
    /// Structured index check: `index >= NUM_RECORDS` is out of bounds
    /// regardless of offset-vs-STRIDE.
    Structured = 3,
}

/// Element size codes for pre-GFX10 word 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ElementSize {
    B2 = 0,
    B4 = 1,
    B8 = 2,
    B16 = 3,
}

/// Index stride codes (in elements) for the swizzled addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum IndexStride {
    E8 = 0,
    E16 = 1,
    E32 = 2,
    E64 = 3,
}

/// Semantic buffer-view inputs.  The virtual address is opaque; nothing here
/// owns GPU memory.
#[derive(Debug, Clone, Copy)]
pub struct BufferViewState<'a> {
    pub va: u64,
    /// NUM_RECORDS; the unit is bytes for raw views, records for structured.
    pub size: u32,
    pub stride: u32,
    pub format: &'a PixelFormatDescriptor,
    pub swizzle: SwizzleSet,
    pub element_size: ElementSize,
    pub index_stride: IndexStride,
    pub swizzle_enable: bool,
    pub add_tid: bool,
    pub oob_select: OobSelect,
}

/// Build the 4-word buffer descriptor for `generation`.
pub fn build_buffer_descriptor(
    generation: Generation,
    state: &BufferViewState<'_>,
) -> [u32; RESOURCE_DESC_DWORDS] {
    let mut word1 = field((state.va >> 32) as u32, 0, 16) | field(state.stride, 16, 14);
    if generation >= Generation::Gfx11 {
        word1 |= field(if state.swizzle_enable { 3 } else { 0 }, 30, 2);
    } else {
        word1 |= field(state.swizzle_enable as u32, 31, 1);
    }

    let mut word3 = state.swizzle.dst_sel_packed()
        | field(state.index_stride as u32, 21, 2)
        | field(state.add_tid as u32, 23, 1);
    if generation >= Generation::Gfx10 {
        //a missing hardware format encodes as 0 (INVALID); callers are
        //expected to have rejected the view already
        let format = gfx10_hw_format(state.format).map_or(0, |f| f as u32);
        word3 |= field(format, 12, 7)
            | field((generation < Generation::Gfx11) as u32, 24, 1)
            | field(state.oob_select as u32, 28, 2);
    } else {
        let data = buffer_data_format(state.format).map_or(0, |f| f as u32);
        let num = buffer_num_format(state.format) as u32;
        word3 |= field(num, 12, 3) | field(data, 15, 4) | field(state.element_size as u32, 19, 2);
    }

    [state.va as u32, word1, state.size, word3]
}

/// Raw byte-addressed view over `size` bytes: identity swizzle, zero stride,
/// 32-bit float class, raw bounds policy.  A composition over
/// [`build_buffer_descriptor`], not a separate codec.
pub fn build_raw_buffer_descriptor(
    generation: Generation,
    va: u64,
    size: u32,
) -> [u32; RESOURCE_DESC_DWORDS] {
    let state = BufferViewState {
        va,
        size,
        stride: 0,
        format: &crate::formats::catalog::R32_FLOAT,
        swizzle: SwizzleSet::IDENTITY,
        element_size: ElementSize::B4,
        index_stride: IndexStride::E8,
        swizzle_enable: false,
        add_tid: false,
        oob_select: OobSelect::Raw,
    };
    build_buffer_descriptor(generation, &state)
}

/// The GFX11+ attribute-ring view: fixed 16-byte swizzle granularity,
/// 32-element index stride, per-thread indexing.
///
/// Calling this for an earlier generation is a contract violation — the
/// attribute ring does not exist there.
pub fn build_attribute_ring_descriptor(
    generation: Generation,
    va: u64,
    size: u32,
    stride: u32,
) -> [u32; RESOURCE_DESC_DWORDS] {
    assert!(
        generation >= Generation::Gfx11,
        "attribute ring requires gfx11+"
    );
    let state = BufferViewState {
        va,
        size,
        stride,
        format: &crate::formats::catalog::R32G32B32A32_FLOAT,
        swizzle: SwizzleSet::IDENTITY,
        element_size: ElementSize::B16,
        index_stride: IndexStride::E32,
        swizzle_enable: true,
        add_tid: true,
        oob_select: OobSelect::StructuredWithOffset,
    };
    build_buffer_descriptor(generation, &state)
}
