// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//!Hardware identity: generation tags and per-device capabilities.
//!
//! Everything in this module is constructed once per physical device and
//! read-only afterwards, so builders can share it across threads freely.
mod capabilities;
mod generation;

pub use capabilities::{ChipFamily, DeviceCapabilities, DeviceFlags};
pub use generation::Generation;
