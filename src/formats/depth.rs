// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Depth-buffer format: a six-entry closed table.

use crate::formats::description::{PixelFormatDescriptor, ZsFormat};

/// DB_Z_INFO.FORMAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DbFormat {
    Z16 = 1,
    Z24 = 2,
    Z32Float = 3,
}

/// Map a depth/stencil pairing to the depth-backend format.
///
/// Stencil-only pairings (and anything that is not depth/stencil at all)
/// have no depth-buffer representation.
pub fn depth_buffer_format(desc: &PixelFormatDescriptor) -> Option<DbFormat> {
    match desc.zs()? {
        ZsFormat::Z16 => Some(DbFormat::Z16),
        ZsFormat::Z24X8 | ZsFormat::X8Z24 | ZsFormat::Z24S8 | ZsFormat::S8Z24 => {
            Some(DbFormat::Z24)
        }
        ZsFormat::Z32Float | ZsFormat::Z32FloatS8X24 => Some(DbFormat::Z32Float),
        ZsFormat::S8 | ZsFormat::X24S8 | ZsFormat::X32S8 => None,
    }
}
