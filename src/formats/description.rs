// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The abstract, channel-indexed pixel-format description.
//!
//! A [`PixelFormatDescriptor`] records what an application format *is* —
//! channel sizes, numeric behavior, colorspace, block layout — without naming
//! any hardware enumerant.  Descriptors are produced once by the
//! application-facing format lookup (an external collaborator) and treated as
//! immutable everywhere in this crate.  The [`catalog`] below covers every
//! format the translators' tables and tests exercise.

use crate::swizzle::{Swizzle, SwizzleSet};

/// Numeric behavior of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    Unsigned,
    Signed,
    Float,
    /// Fixed-point (16.16).  Only appears in vertex-buffer formats.
    Fixed,
}

/// One stored channel: bit width plus interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub size: u8,
    pub ty: NumericType,
    /// Integer storage mapped to [0,1] / [-1,1] on sample.
    pub normalized: bool,
    /// Integer storage sampled as integers (no conversion at all).
    pub pure_integer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colorspace {
    Rgb,
    Srgb,
    /// Depth/stencil.  Takes the direct-lookup path in every translator.
    Zs,
    Yuv,
}

/// Memory layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Plain,
    Bc1,
    Bc2,
    Bc3,
    Bc4,
    Bc5,
    Bc6,
    Bc7,
    Etc2Rgb8,
    Etc2Rgb8A1,
    Etc2Rgba8,
    Etc2R11,
    Etc2Rg11,
    /// 2x1-subsampled packed pair, G in the shared bytes (YUYV-style).
    SubsampledGbGr,
    /// 2x1-subsampled packed pair, G in the distinct bytes (UYVY-style).
    SubsampledBgRg,
}

/// Which depth/stencil pairing a `Colorspace::Zs` descriptor is.
///
/// The translators look these up directly; none of the channel-size logic
/// applies to depth/stencil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZsFormat {
    S8,
    Z16,
    Z24X8,
    X8Z24,
    Z24S8,
    S8Z24,
    /// Stencil aspect of a packed Z24S8, sampled alone.
    X24S8,
    Z32Float,
    Z32FloatS8X24,
    /// Stencil aspect of a packed Z32F_S8, sampled alone.
    X32S8,
}

/// Immutable description of a pixel format.
///
/// Channels are in storage order, lowest bits first; `swizzle` maps storage
/// channels to sampled RGBA.  Up to four channels; trailing `None` slots are
/// unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormatDescriptor {
    channels: [Option<Channel>; 4],
    colorspace: Colorspace,
    layout: Layout,
    swizzle: SwizzleSet,
    zs: Option<ZsFormat>,
}

impl PixelFormatDescriptor {
    /// Construct a plain (non-compressed, non-depth) descriptor.
    ///
    /// Format-lookup layers above this crate use this for formats the
    /// [`catalog`] does not name.
    pub const fn new_plain(
        channels: [Option<Channel>; 4],
        colorspace: Colorspace,
        swizzle: SwizzleSet,
    ) -> Self {
        Self {
            channels,
            colorspace,
            layout: Layout::Plain,
            swizzle,
            zs: None,
        }
    }

    pub const fn channels(&self) -> &[Option<Channel>; 4] {
        &self.channels
    }

    pub const fn colorspace(&self) -> Colorspace {
        self.colorspace
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub const fn swizzle(&self) -> SwizzleSet {
        self.swizzle
    }

    pub const fn zs(&self) -> Option<ZsFormat> {
        self.zs
    }

    pub fn channel_count(&self) -> usize {
        self.channels.iter().flatten().count()
    }

    /// Index of the first channel that actually stores data.
    ///
    /// Every classification keys off this channel; for the formats in the
    /// catalog it is channel 0, but the method tolerates leading padding.
    pub fn first_significant_channel(&self) -> Option<usize> {
        self.channels.iter().position(|c| c.is_some())
    }

    pub(crate) fn significant_channel(&self) -> Option<&Channel> {
        self.channels.iter().flatten().next()
    }

    /// The shared channel size, if all stored channels agree.
    pub fn uniform_channel_size(&self) -> Option<u8> {
        let mut sizes = self.channels.iter().flatten().map(|c| c.size);
        let first = sizes.next()?;
        sizes.all(|s| s == first).then_some(first)
    }

    /// Channel sizes in storage order, zero for unused slots.  The translators
    /// match the documented non-uniform packings against this.
    pub(crate) fn packed_sizes(&self) -> Option<[u8; 4]> {
        if self.uniform_channel_size().is_some() {
            return None;
        }
        let mut sizes = [0u8; 4];
        for (slot, ch) in sizes.iter_mut().zip(self.channels.iter()) {
            *slot = ch.map_or(0, |c| c.size);
        }
        Some(sizes)
    }

    pub(crate) fn is_packed_float_10_11_11(&self) -> bool {
        self.layout == Layout::Plain
            && self.channels[0].is_some_and(|c| c.ty == NumericType::Float && c.size == 11)
            && self.channels[2].is_some_and(|c| c.size == 10)
    }

    pub(crate) fn is_shared_exponent(&self) -> bool {
        //9-9-9 mantissas with a 5-bit shared exponent in the top slot
        self.layout == Layout::Plain
            && self.channels[0].is_some_and(|c| c.size == 9)
            && self.channels[3].is_some_and(|c| c.size == 5)
    }
}

/// Named constructors for every format the tables and tests exercise.
///
/// The real producer of descriptors is the application-facing format lookup;
/// this catalog exists so the crate's own tables and tests have fixtures that
/// cannot drift from the model.
pub mod catalog {
    use super::*;

    const fn ch(size: u8, ty: NumericType, normalized: bool, pure_integer: bool) -> Option<Channel> {
        Some(Channel {
            size,
            ty,
            normalized,
            pure_integer,
        })
    }

    const fn unorm(size: u8) -> Option<Channel> {
        ch(size, NumericType::Unsigned, true, false)
    }

    const fn uint(size: u8) -> Option<Channel> {
        ch(size, NumericType::Unsigned, false, true)
    }

    const fn sint(size: u8) -> Option<Channel> {
        ch(size, NumericType::Signed, false, true)
    }

    const fn float(size: u8) -> Option<Channel> {
        ch(size, NumericType::Float, false, false)
    }

    const X001: SwizzleSet = SwizzleSet([Swizzle::X, Swizzle::Zero, Swizzle::Zero, Swizzle::One]);
    const XY01: SwizzleSet = SwizzleSet([Swizzle::X, Swizzle::Y, Swizzle::Zero, Swizzle::One]);
    const XYZ1: SwizzleSet = SwizzleSet([Swizzle::X, Swizzle::Y, Swizzle::Z, Swizzle::One]);
    const ZYX1: SwizzleSet = SwizzleSet([Swizzle::Z, Swizzle::Y, Swizzle::X, Swizzle::One]);
    const ZYXW: SwizzleSet = SwizzleSet([Swizzle::Z, Swizzle::Y, Swizzle::X, Swizzle::W]);
    const IDENT: SwizzleSet = SwizzleSet::IDENTITY;

    const fn plain(
        channels: [Option<Channel>; 4],
        colorspace: Colorspace,
        swizzle: SwizzleSet,
    ) -> PixelFormatDescriptor {
        PixelFormatDescriptor {
            channels,
            colorspace,
            layout: Layout::Plain,
            swizzle,
            zs: None,
        }
    }

    const fn compressed(layout: Layout, colorspace: Colorspace, ty: NumericType, normalized: bool) -> PixelFormatDescriptor {
        //block formats carry one representative channel so numeric
        //classification works the same as for plain formats
        PixelFormatDescriptor {
            channels: [ch(8, ty, normalized, false), None, None, None],
            colorspace,
            layout,
            swizzle: IDENT,
            zs: None,
        }
    }

    const fn zs(zs: ZsFormat) -> PixelFormatDescriptor {
        PixelFormatDescriptor {
            channels: [None; 4],
            colorspace: Colorspace::Zs,
            layout: Layout::Plain,
            swizzle: IDENT,
            zs: Some(zs),
        }
    }

    // single/dual/quad channel, uniform sizes

    pub const R8_UNORM: PixelFormatDescriptor =
        plain([unorm(8), None, None, None], Colorspace::Rgb, X001);
    pub const R8_UINT: PixelFormatDescriptor =
        plain([uint(8), None, None, None], Colorspace::Rgb, X001);
    pub const R8G8_UNORM: PixelFormatDescriptor =
        plain([unorm(8), unorm(8), None, None], Colorspace::Rgb, XY01);
    pub const R8G8B8_UNORM: PixelFormatDescriptor =
        plain([unorm(8), unorm(8), unorm(8), None], Colorspace::Rgb, XYZ1);
    pub const R8G8B8A8_UNORM: PixelFormatDescriptor = plain(
        [unorm(8), unorm(8), unorm(8), unorm(8)],
        Colorspace::Rgb,
        IDENT,
    );
    pub const R8G8B8A8_UINT: PixelFormatDescriptor =
        plain([uint(8), uint(8), uint(8), uint(8)], Colorspace::Rgb, IDENT);
    pub const R8G8B8A8_SRGB: PixelFormatDescriptor = plain(
        [unorm(8), unorm(8), unorm(8), unorm(8)],
        Colorspace::Srgb,
        IDENT,
    );
    pub const B8G8R8A8_UNORM: PixelFormatDescriptor = plain(
        [unorm(8), unorm(8), unorm(8), unorm(8)],
        Colorspace::Rgb,
        ZYXW,
    );
    pub const B8G8R8A8_SRGB: PixelFormatDescriptor = plain(
        [unorm(8), unorm(8), unorm(8), unorm(8)],
        Colorspace::Srgb,
        ZYXW,
    );
    pub const R16_UNORM: PixelFormatDescriptor =
        plain([unorm(16), None, None, None], Colorspace::Rgb, X001);
    pub const R16_FLOAT: PixelFormatDescriptor =
        plain([float(16), None, None, None], Colorspace::Rgb, X001);
    pub const R16G16_FLOAT: PixelFormatDescriptor =
        plain([float(16), float(16), None, None], Colorspace::Rgb, XY01);
    pub const R16G16B16A16_FLOAT: PixelFormatDescriptor = plain(
        [float(16), float(16), float(16), float(16)],
        Colorspace::Rgb,
        IDENT,
    );
    pub const R16G16B16A16_UNORM: PixelFormatDescriptor = plain(
        [unorm(16), unorm(16), unorm(16), unorm(16)],
        Colorspace::Rgb,
        IDENT,
    );
    pub const R32_FLOAT: PixelFormatDescriptor =
        plain([float(32), None, None, None], Colorspace::Rgb, X001);
    pub const R32_UINT: PixelFormatDescriptor =
        plain([uint(32), None, None, None], Colorspace::Rgb, X001);
    pub const R32_SINT: PixelFormatDescriptor =
        plain([sint(32), None, None, None], Colorspace::Rgb, X001);
    pub const R32G32_FLOAT: PixelFormatDescriptor =
        plain([float(32), float(32), None, None], Colorspace::Rgb, XY01);
    pub const R32G32B32_FLOAT: PixelFormatDescriptor = plain(
        [float(32), float(32), float(32), None],
        Colorspace::Rgb,
        XYZ1,
    );
    pub const R32G32B32A32_FLOAT: PixelFormatDescriptor = plain(
        [float(32), float(32), float(32), float(32)],
        Colorspace::Rgb,
        IDENT,
    );
    pub const R32G32B32A32_UINT: PixelFormatDescriptor = plain(
        [uint(32), uint(32), uint(32), uint(32)],
        Colorspace::Rgb,
        IDENT,
    );
    /// 64-bit channels have no buffer representation; kept for the gap tests
    /// and the texture path's paired-32 handling.
    pub const R64_UINT: PixelFormatDescriptor =
        plain([uint(64), None, None, None], Colorspace::Rgb, X001);
    pub const R64G64_UINT: PixelFormatDescriptor =
        plain([uint(64), uint(64), None, None], Colorspace::Rgb, XY01);

    // documented non-uniform packings

    pub const R11G11B10_FLOAT: PixelFormatDescriptor = plain(
        [float(11), float(11), float(10), None],
        Colorspace::Rgb,
        XYZ1,
    );
    pub const R10G10B10A2_UNORM: PixelFormatDescriptor = plain(
        [unorm(10), unorm(10), unorm(10), unorm(2)],
        Colorspace::Rgb,
        IDENT,
    );
    pub const R10G10B10A2_UINT: PixelFormatDescriptor = plain(
        [uint(10), uint(10), uint(10), uint(2)],
        Colorspace::Rgb,
        IDENT,
    );
    pub const B10G10R10A2_UNORM: PixelFormatDescriptor = plain(
        [unorm(10), unorm(10), unorm(10), unorm(2)],
        Colorspace::Rgb,
        ZYXW,
    );
    pub const A2R10G10B10_UNORM: PixelFormatDescriptor = plain(
        [unorm(2), unorm(10), unorm(10), unorm(10)],
        Colorspace::Rgb,
        SwizzleSet([Swizzle::Y, Swizzle::Z, Swizzle::W, Swizzle::X]),
    );
    pub const B5G6R5_UNORM: PixelFormatDescriptor =
        plain([unorm(5), unorm(6), unorm(5), None], Colorspace::Rgb, ZYX1);
    pub const B5G5R5A1_UNORM: PixelFormatDescriptor = plain(
        [unorm(5), unorm(5), unorm(5), unorm(1)],
        Colorspace::Rgb,
        ZYXW,
    );
    pub const A1B5G5R5_UNORM: PixelFormatDescriptor = plain(
        [unorm(1), unorm(5), unorm(5), unorm(5)],
        Colorspace::Rgb,
        SwizzleSet([Swizzle::W, Swizzle::Z, Swizzle::Y, Swizzle::X]),
    );
    pub const B5G5R5A1_UINT: PixelFormatDescriptor = plain(
        [uint(5), uint(5), uint(5), uint(1)],
        Colorspace::Rgb,
        ZYXW,
    );
    pub const B4G4R4A4_UNORM: PixelFormatDescriptor = plain(
        [unorm(4), unorm(4), unorm(4), unorm(4)],
        Colorspace::Rgb,
        ZYXW,
    );
    pub const B4G4R4A4_UINT: PixelFormatDescriptor = plain(
        [uint(4), uint(4), uint(4), uint(4)],
        Colorspace::Rgb,
        ZYXW,
    );
    pub const R4G4_UNORM: PixelFormatDescriptor =
        plain([unorm(4), unorm(4), None, None], Colorspace::Rgb, XY01);
    pub const E5B9G9R9_FLOAT: PixelFormatDescriptor = plain(
        [float(9), float(9), float(9), float(5)],
        Colorspace::Rgb,
        XYZ1,
    );

    // block-compressed and subsampled

    pub const BC1_UNORM: PixelFormatDescriptor =
        compressed(Layout::Bc1, Colorspace::Rgb, NumericType::Unsigned, true);
    pub const BC1_SRGB: PixelFormatDescriptor =
        compressed(Layout::Bc1, Colorspace::Srgb, NumericType::Unsigned, true);
    pub const BC2_UNORM: PixelFormatDescriptor =
        compressed(Layout::Bc2, Colorspace::Rgb, NumericType::Unsigned, true);
    pub const BC3_SRGB: PixelFormatDescriptor =
        compressed(Layout::Bc3, Colorspace::Srgb, NumericType::Unsigned, true);
    pub const BC4_UNORM: PixelFormatDescriptor =
        compressed(Layout::Bc4, Colorspace::Rgb, NumericType::Unsigned, true);
    pub const BC4_SNORM: PixelFormatDescriptor =
        compressed(Layout::Bc4, Colorspace::Rgb, NumericType::Signed, true);
    pub const BC5_SNORM: PixelFormatDescriptor =
        compressed(Layout::Bc5, Colorspace::Rgb, NumericType::Signed, true);
    pub const BC6H_UFLOAT: PixelFormatDescriptor =
        compressed(Layout::Bc6, Colorspace::Rgb, NumericType::Float, false);
    /// Signed BC6 is selected by the SNORM number format, so the
    /// representative channel is signed-normalized rather than float.
    pub const BC6H_SFLOAT: PixelFormatDescriptor =
        compressed(Layout::Bc6, Colorspace::Rgb, NumericType::Signed, true);
    pub const BC7_UNORM: PixelFormatDescriptor =
        compressed(Layout::Bc7, Colorspace::Rgb, NumericType::Unsigned, true);
    pub const BC7_SRGB: PixelFormatDescriptor =
        compressed(Layout::Bc7, Colorspace::Srgb, NumericType::Unsigned, true);
    pub const ETC2_RGB8: PixelFormatDescriptor =
        compressed(Layout::Etc2Rgb8, Colorspace::Rgb, NumericType::Unsigned, true);
    pub const ETC2_RGBA8: PixelFormatDescriptor =
        compressed(Layout::Etc2Rgba8, Colorspace::Rgb, NumericType::Unsigned, true);
    pub const ETC2_R11_UNORM: PixelFormatDescriptor =
        compressed(Layout::Etc2R11, Colorspace::Rgb, NumericType::Unsigned, true);
    pub const G8B8G8R8_SUBSAMPLED: PixelFormatDescriptor = compressed(
        Layout::SubsampledGbGr,
        Colorspace::Yuv,
        NumericType::Unsigned,
        true,
    );
    pub const B8G8R8G8_SUBSAMPLED: PixelFormatDescriptor = compressed(
        Layout::SubsampledBgRg,
        Colorspace::Yuv,
        NumericType::Unsigned,
        true,
    );

    // depth/stencil

    pub const S8_UINT: PixelFormatDescriptor = zs(ZsFormat::S8);
    pub const Z16_UNORM: PixelFormatDescriptor = zs(ZsFormat::Z16);
    pub const Z24X8_UNORM: PixelFormatDescriptor = zs(ZsFormat::Z24X8);
    pub const X8Z24_UNORM: PixelFormatDescriptor = zs(ZsFormat::X8Z24);
    pub const Z24S8_UNORM: PixelFormatDescriptor = zs(ZsFormat::Z24S8);
    pub const S8Z24_UNORM: PixelFormatDescriptor = zs(ZsFormat::S8Z24);
    pub const X24S8_UINT: PixelFormatDescriptor = zs(ZsFormat::X24S8);
    pub const Z32_FLOAT: PixelFormatDescriptor = zs(ZsFormat::Z32Float);
    pub const Z32_FLOAT_S8X24: PixelFormatDescriptor = zs(ZsFormat::Z32FloatS8X24);
    pub const X32S8_UINT: PixelFormatDescriptor = zs(ZsFormat::X32S8);
}
