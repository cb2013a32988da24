// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Buffer number/data format classification (pre-GFX10 descriptor fields).

use crate::formats::description::{NumericType, PixelFormatDescriptor};

/// BUF_NUM_FORMAT: how fetched bits become register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BufferNumFormat {
    Unorm = 0,
    Snorm = 1,
    Uscaled = 2,
    Sscaled = 3,
    Uint = 4,
    Sint = 5,
    Float = 7,
}

/// BUF_DATA_FORMAT: channel widths and count, named most-significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BufferDataFormat {
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
}

/// Classify the number format from the first significant channel.
///
/// Total: a descriptor with no significant channel (depth/stencil never takes
/// this path) classifies as float, matching what the hardware would sample.
pub fn buffer_num_format(desc: &PixelFormatDescriptor) -> BufferNumFormat {
    if desc.is_packed_float_10_11_11() {
        return BufferNumFormat::Float;
    }
    let Some(ch) = desc.significant_channel() else {
        return BufferNumFormat::Float;
    };
    match ch.ty {
        //fixed-point vertex formats fetch like signed; 32-bit scaled has no
        //hardware conversion, the shader gets the raw integer
        NumericType::Signed | NumericType::Fixed => {
            if ch.size >= 32 || ch.pure_integer {
                BufferNumFormat::Sint
            } else if ch.normalized {
                BufferNumFormat::Snorm
            } else {
                BufferNumFormat::Sscaled
            }
        }
        NumericType::Unsigned => {
            if ch.size >= 32 || ch.pure_integer {
                BufferNumFormat::Uint
            } else if ch.normalized {
                BufferNumFormat::Unorm
            } else {
                BufferNumFormat::Uscaled
            }
        }
        NumericType::Float => BufferNumFormat::Float,
    }
}

/// Map channel sizes to a buffer data format.
///
/// All stored channels must share one size, with the 10-10-10-2 family as the
/// sole documented exception.  `None` means the combination has no hardware
/// representation (odd widths, three-channel 8/16-bit, 64-bit anything).
pub fn buffer_data_format(desc: &PixelFormatDescriptor) -> Option<BufferDataFormat> {
    if desc.is_packed_float_10_11_11() {
        //named from the MSB down, hence 10_11_11 for R11G11B10
        return Some(BufferDataFormat::F10_11_11);
    }
    if let Some(sizes) = desc.packed_sizes() {
        return match sizes {
            [10, 10, 10, 2] => Some(BufferDataFormat::F2_10_10_10),
            [2, 10, 10, 10] => Some(BufferDataFormat::F10_10_10_2),
            _ => None,
        };
    }
    let size = desc.uniform_channel_size()?;
    match (size, desc.channel_count()) {
        (8, 1) => Some(BufferDataFormat::F8),
        (8, 2) => Some(BufferDataFormat::F8_8),
        (8, 4) => Some(BufferDataFormat::F8_8_8_8),
        (16, 1) => Some(BufferDataFormat::F16),
        (16, 2) => Some(BufferDataFormat::F16_16),
        (16, 4) => Some(BufferDataFormat::F16_16_16_16),
        (32, 1) => Some(BufferDataFormat::F32),
        (32, 2) => Some(BufferDataFormat::F32_32),
        (32, 3) => Some(BufferDataFormat::F32_32_32),
        (32, 4) => Some(BufferDataFormat::F32_32_32_32),
        _ => None,
    }
}

/// Byte-swap unit for big-endian hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum EndianSwap {
    None = 0,
    Swap8In16 = 1,
    Swap8In32 = 2,
    Swap8In64 = 3,
}

/// Classify the byte-swap unit a big-endian host needs for this format.
///
/// Byte-addressed formats never swap; packed formats swap at their packed
/// word size, channel-addressed ones at the channel size.  Little-endian
/// drivers pass the result through unchanged (it is always applied by the
/// caller, and is `None` for everything they use).
pub fn endian_swap(desc: &PixelFormatDescriptor) -> EndianSwap {
    let unit = match desc.uniform_channel_size() {
        Some(size) => u32::from(size),
        //packed: swap the whole packed word
        None => desc
            .channels()
            .iter()
            .flatten()
            .map(|c| u32::from(c.size))
            .sum(),
    };
    match unit {
        16 => EndianSwap::Swap8In16,
        32 => EndianSwap::Swap8In32,
        64 => EndianSwap::Swap8In64,
        _ => EndianSwap::None,
    }
}

/// Inverse of the uniform-size table: (channel size, channel count).
///
/// Packed formats have no inverse; they are `None`.
pub fn data_format_size_channels(format: BufferDataFormat) -> Option<(u8, u8)> {
    match format {
        BufferDataFormat::F8 => Some((8, 1)),
        BufferDataFormat::F8_8 => Some((8, 2)),
        BufferDataFormat::F8_8_8_8 => Some((8, 4)),
        BufferDataFormat::F16 => Some((16, 1)),
        BufferDataFormat::F16_16 => Some((16, 2)),
        BufferDataFormat::F16_16_16_16 => Some((16, 4)),
        BufferDataFormat::F32 => Some((32, 1)),
        BufferDataFormat::F32_32 => Some((32, 2)),
        BufferDataFormat::F32_32_32 => Some((32, 3)),
        BufferDataFormat::F32_32_32_32 => Some((32, 4)),
        BufferDataFormat::F10_11_11
        | BufferDataFormat::F11_11_10
        | BufferDataFormat::F10_10_10_2
        | BufferDataFormat::F2_10_10_10 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::catalog;
    use crate::formats::description::{Channel, Colorspace};
    use crate::swizzle::SwizzleSet;

    #[test]
    fn num_classification() {
        assert_eq!(
            buffer_num_format(&catalog::R8G8B8A8_UNORM),
            BufferNumFormat::Unorm
        );
        assert_eq!(buffer_num_format(&catalog::R32_SINT), BufferNumFormat::Sint);
        //32-bit non-pure-integer still fetches as integer
        assert_eq!(buffer_num_format(&catalog::R32_UINT), BufferNumFormat::Uint);
        assert_eq!(
            buffer_num_format(&catalog::R16G16B16A16_FLOAT),
            BufferNumFormat::Float
        );
        assert_eq!(
            buffer_num_format(&catalog::R11G11B10_FLOAT),
            BufferNumFormat::Float
        );
    }

    #[test]
    fn data_table() {
        assert_eq!(
            buffer_data_format(&catalog::R8G8B8A8_UNORM),
            Some(BufferDataFormat::F8_8_8_8)
        );
        assert_eq!(
            buffer_data_format(&catalog::R32G32B32_FLOAT),
            Some(BufferDataFormat::F32_32_32)
        );
        assert_eq!(
            buffer_data_format(&catalog::R11G11B10_FLOAT),
            Some(BufferDataFormat::F10_11_11)
        );
        assert_eq!(
            buffer_data_format(&catalog::R10G10B10A2_UNORM),
            Some(BufferDataFormat::F2_10_10_10)
        );
        //documented gaps
        assert_eq!(buffer_data_format(&catalog::R8G8B8_UNORM), None);
        assert_eq!(buffer_data_format(&catalog::R64_UINT), None);
        assert_eq!(buffer_data_format(&catalog::B5G6R5_UNORM), None);
    }

    #[test]
    fn endian_units() {
        assert_eq!(endian_swap(&catalog::R8G8B8A8_UNORM), EndianSwap::None);
        assert_eq!(endian_swap(&catalog::R16G16_FLOAT), EndianSwap::Swap8In16);
        assert_eq!(endian_swap(&catalog::R32_UINT), EndianSwap::Swap8In32);
        assert_eq!(endian_swap(&catalog::R64_UINT), EndianSwap::Swap8In64);
        //packed words swap whole: 5+6+5 = 16 bits
        assert_eq!(endian_swap(&catalog::B5G6R5_UNORM), EndianSwap::Swap8In16);
        assert_eq!(
            endian_swap(&catalog::R10G10B10A2_UNORM),
            EndianSwap::Swap8In32
        );
    }

    #[test]
    fn round_trip_uniform_table() {
        //every uniform {size, count} entry must survive a round trip
        fn uniform(size: u8, count: usize) -> PixelFormatDescriptor {
            let mut channels: [Option<Channel>; 4] = [None; 4];
            for slot in channels.iter_mut().take(count) {
                *slot = Some(Channel {
                    size,
                    ty: crate::formats::NumericType::Unsigned,
                    normalized: true,
                    pure_integer: false,
                });
            }
            PixelFormatDescriptor::new_plain(channels, Colorspace::Rgb, SwizzleSet::IDENTITY)
        }
        for size in [8u8, 16, 32, 64] {
            for count in 1..=4usize {
                let desc = uniform(size, count);
                match buffer_data_format(&desc) {
                    Some(fmt) => {
                        assert_eq!(
                            data_format_size_channels(fmt),
                            Some((size, count as u8)),
                            "{fmt:?} does not round-trip"
                        );
                    }
                    //documented gaps: 3-channel 8/16-bit, all 64-bit
                    None => assert!(
                        (count == 3 && size != 32) || size == 64,
                        "unexpected gap at {size}x{count}"
                    ),
                }
            }
        }
    }
}
