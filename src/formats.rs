// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Abstract pixel-format descriptions and their hardware format enumerants.
//!
//! This module is the format translator: pure lookups from an abstract,
//! channel-indexed format description to the enumerant families the hardware
//! understands.  Five independent surfaces:
//!
//! - buffer number/data formats ([`buffer`])
//! - texture number/data formats, legacy split-field and GFX10+ combined
//!   ([`texture`], [`gfx10`])
//! - color-buffer format/number-type/channel-swap ([`color`])
//! - depth-buffer format ([`depth`])
//! - border-color swizzle classification ([`border_color_swizzle`])
//!
//! # Error policy
//!
//! A combination with no hardware representation is `None`, never a panic:
//! the caller rejects the resource before a descriptor builder ever sees it.
//! [`validate_texture_format`] wraps the texture path for callers that want a
//! diagnosable error instead of a bare sentinel.

mod buffer;
mod color;
mod depth;
mod description;
mod gfx10;
mod texture;

pub use buffer::{
    BufferDataFormat, BufferNumFormat, EndianSwap, buffer_data_format, buffer_num_format,
    data_format_size_channels, endian_swap,
};
pub use color::{CbFormat, CbNumberType, CbSwap, color_buffer_format, color_number_type, color_swap};
pub use depth::{DbFormat, depth_buffer_format};
pub use description::{
    Channel, Colorspace, Layout, NumericType, PixelFormatDescriptor, ZsFormat, catalog,
};
pub use gfx10::{Gfx10Format, gfx10_hw_format};
pub use texture::{
    BorderColorSwizzle, TexDataFormat, TexNumFormat, border_color_swizzle, texture_formats,
};

use crate::hw::DeviceCapabilities;

/// Why a format has no texture representation on this device.
///
/// The translator itself speaks `Option`; this is the diagnosable wrapper for
/// validation layers that sit above it.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("channel sizes are not uniform and match no documented packing")]
    NonUniformChannelSizes,
    #[error("no hardware representation for this channel layout")]
    NoHardwareRepresentation,
    #[error("format is rejected by a chip-family erratum")]
    RejectedByErratum,
}

/// Classify why the texture translator rejected `desc`, or return the format
/// pair it produced.
pub fn validate_texture_format(
    caps: &DeviceCapabilities,
    desc: &PixelFormatDescriptor,
) -> Result<(TexDataFormat, TexNumFormat), FormatError> {
    if let Some(pair) = texture_formats(caps, desc) {
        return Ok(pair);
    }
    if texture::rejected_by_erratum(caps, desc) {
        logwise::warn_sync!("format rejected by chip-family erratum");
        return Err(FormatError::RejectedByErratum);
    }
    //mixed channel sizes are fine only as one of the documented packings
    let documented_packing = desc.is_packed_float_10_11_11()
        || desc.is_shared_exponent()
        || matches!(
            desc.packed_sizes(),
            Some([5, 6, 5, 0])
                | Some([5, 5, 5, 1])
                | Some([1, 5, 5, 5])
                | Some([10, 10, 10, 2])
                | Some([2, 10, 10, 10])
        );
    if desc.layout() == Layout::Plain
        && desc.zs().is_none()
        && desc.uniform_channel_size().is_none()
        && !documented_packing
    {
        return Err(FormatError::NonUniformChannelSizes);
    }
    Err(FormatError::NoHardwareRepresentation)
}
