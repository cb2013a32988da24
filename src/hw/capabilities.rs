// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Per-device capability and erratum state.

use crate::hw::Generation;

bitflags::bitflags! {
    /// Feature and erratum booleans the builders branch on.
    ///
    /// Derived flags (the erratum bits) are filled in by
    /// [`DeviceCapabilities::new`]; callers supply only the bits that come
    /// from the bus/kernel side.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DeviceFlags: u32 {
        /// DB hang when ITERATE_256 is set on two-plane 4xAA depth surfaces.
        const TWO_PLANES_ITERATE256_BUG = 1 << 0;
        /// 16-bit depth compression is unusable on this chip.
        const NO_D16_COMPRESSION = 1 << 1;
        /// ETC2 texture formats decode natively.
        const HAS_ETC2 = 1 << 2;
        /// Image load/store opcodes present (absent on some compute parts).
        const HAS_IMAGE_OPCODES = 1 << 3;
        /// Dedicated VRAM rather than carved-out system memory.
        const DEDICATED_VRAM = 1 << 4;
    }
}

/// Chip families the format erratum tables key on.
///
/// Only the families that appear in an exception table are named; everything
/// else is `Other`.  These are literal per-chip exceptions with no derivable
/// pattern, so keep this in sync with the tables rather than inferring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipFamily {
    Carrizo,
    Stoney,
    Other,
}

/// Read-only device identity handed to every builder.
///
/// Constructed once at device initialization and never mutated, so shared
/// references can cross threads without synchronization.
#[derive(Debug, Clone)]
pub struct DeviceCapabilities {
    generation: Generation,
    family: ChipFamily,
    flags: DeviceFlags,
}

impl DeviceCapabilities {
    pub fn new(generation: Generation, family: ChipFamily, flags: DeviceFlags) -> Self {
        let mut flags = flags;
        //flags implied by identity rather than probed
        if matches!(family, ChipFamily::Carrizo | ChipFamily::Stoney) {
            flags |= DeviceFlags::HAS_ETC2;
        }
        if generation == Generation::Gfx10 {
            flags |= DeviceFlags::TWO_PLANES_ITERATE256_BUG;
        }
        logwise::info_sync!(
            "DeviceCapabilities: {generation}, {family}, {flags}",
            generation = logwise::privacy::LogIt(&generation),
            family = logwise::privacy::LogIt(&family),
            flags = logwise::privacy::LogIt(&flags)
        );
        Self {
            generation,
            family,
            flags,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn family(&self) -> ChipFamily {
        self.family
    }

    pub fn has(&self, flags: DeviceFlags) -> bool {
        self.flags.contains(flags)
    }

    /// The format-erratum family check; see the texture translator.
    pub(crate) fn rejects_small_integer_formats(&self) -> bool {
        matches!(self.family, ChipFamily::Carrizo | ChipFamily::Stoney)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_flags() {
        let caps = DeviceCapabilities::new(
            Generation::Gfx8,
            ChipFamily::Stoney,
            DeviceFlags::empty(),
        );
        assert!(caps.has(DeviceFlags::HAS_ETC2));
        assert!(!caps.has(DeviceFlags::TWO_PLANES_ITERATE256_BUG));

        let caps = DeviceCapabilities::new(
            Generation::Gfx10,
            ChipFamily::Other,
            DeviceFlags::DEDICATED_VRAM,
        );
        assert!(caps.has(DeviceFlags::TWO_PLANES_ITERATE256_BUG));
        assert!(caps.has(DeviceFlags::DEDICATED_VRAM));
    }
}
