//! Trio Motion Flex-7 board preset.
//!
//! Flex-7 units are not shipped with programmed MAC addresses. Each unit
//! owns two consecutive addresses in the vendor block, selected by the
//! `trio-mac-idx` property on the Ethernet node and the unit serial number
//! stored on the root node.

use crate::config::{GeneratorConfig, ResolverConfig};
use crate::internal::constants::{DEFAULT_SERIAL_MAX, DEFAULT_SERIAL_MIN, PROP_SERIAL_NUMBER};

/// Trio Flex-7 configuration constants and helpers.
pub struct TrioFlex7;

impl TrioFlex7 {
    // =========================================================================
    // Address Generation
    // =========================================================================

    /// First address of the vendor block.
    pub const BASE_MAC: u64 = 0x001E_FBF8_0001;

    /// Addresses reserved per unit.
    pub const MACS_PER_UNIT: u64 = 2;

    /// Lowest provisioned serial number.
    pub const SERIAL_MIN: i64 = DEFAULT_SERIAL_MIN;

    /// One past the highest provisioned serial number.
    pub const SERIAL_MAX: i64 = DEFAULT_SERIAL_MAX;

    // =========================================================================
    // Device Tree Properties
    // =========================================================================

    /// Per-interface index property.
    pub const INDEX_PROPERTY: &'static str = "trio-mac-idx";

    /// Root node serial number property.
    pub const SERIAL_PROPERTY: &'static str = PROP_SERIAL_NUMBER;

    // =========================================================================
    // Board Identification
    // =========================================================================

    /// Board name.
    pub const BOARD_NAME: &'static str = "Flex-7";

    /// Board manufacturer.
    pub const MANUFACTURER: &'static str = "Trio Motion Technology";

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Generator constants for the vendor block.
    #[must_use]
    pub const fn generator_config() -> GeneratorConfig {
        GeneratorConfig::new()
            .with_base(Self::BASE_MAC)
            .with_stride(Self::MACS_PER_UNIT)
            .with_serial_range(Self::SERIAL_MIN, Self::SERIAL_MAX)
    }

    /// Resolver configuration with generation enabled.
    #[must_use]
    pub const fn resolver_config() -> ResolverConfig {
        ResolverConfig::new()
            .with_generation(true)
            .with_generator(Self::generator_config())
            .with_index_property(Self::INDEX_PROPERTY)
            .with_serial_property(Self::SERIAL_PROPERTY)
    }

    /// Highest address the block can hand out.
    #[must_use]
    pub const fn last_mac() -> u64 {
        let last_serial = (Self::SERIAL_MAX - 1) as u64;
        Self::BASE_MAC + last_serial * Self::MACS_PER_UNIT + (Self::MACS_PER_UNIT - 1)
    }

    /// Get a human-readable description of the board.
    #[must_use]
    pub const fn description() -> &'static str {
        "Trio Flex-7: serial-number derived MACs, 2 per unit, index from trio-mac-idx"
    }
}
