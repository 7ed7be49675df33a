//! Configuration types for MAC address resolution

use crate::internal::constants::{
    DEFAULT_BASE_MAC, DEFAULT_MAC_STRIDE, DEFAULT_SERIAL_MAX, DEFAULT_SERIAL_MIN,
    NVMEM_CELL_MAC_ADDRESS, PROP_MAC_INDEX, PROP_SERIAL_NUMBER,
};

// =============================================================================
// Generator Configuration
// =============================================================================

/// Parameters for deterministic address generation
///
/// `address = base + serial * stride + index`, computed modulo 2^48.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneratorConfig {
    /// OUI plus base offset, as a 48-bit value
    pub base: u64,
    /// MAC slots consumed per serial number
    pub stride: u64,
    /// Lowest valid serial number (inclusive)
    pub serial_min: i64,
    /// Highest valid serial number (exclusive)
    pub serial_max: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfig {
    /// Create a generator configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base: DEFAULT_BASE_MAC,
            stride: DEFAULT_MAC_STRIDE,
            serial_min: DEFAULT_SERIAL_MIN,
            serial_max: DEFAULT_SERIAL_MAX,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the base address
    #[must_use]
    pub const fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Set the number of MAC slots per serial number
    #[must_use]
    pub const fn with_stride(mut self, stride: u64) -> Self {
        self.stride = stride;
        self
    }

    /// Set the valid serial range `[min, max)`
    #[must_use]
    pub const fn with_serial_range(mut self, min: i64, max: i64) -> Self {
        self.serial_min = min;
        self.serial_max = max;
        self
    }

    /// Whether `serial` lies in `[serial_min, serial_max)`
    #[must_use]
    pub const fn serial_in_range(&self, serial: i64) -> bool {
        serial >= self.serial_min && serial < self.serial_max
    }
}

// =============================================================================
// Resolver Configuration
// =============================================================================

/// Complete MAC resolution configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolverConfig {
    /// Try index-based generation after `mac-address`
    pub generation_enabled: bool,
    /// Generation parameters
    pub generator: GeneratorConfig,
    /// Device property holding the interface index
    pub index_property: &'static str,
    /// Root node property holding the unit serial number
    pub serial_property: &'static str,
    /// Nvmem cell consulted as the last resort
    pub nvmem_cell: &'static str,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverConfig {
    /// Create a new configuration with defaults (generation disabled)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation_enabled: false,
            generator: GeneratorConfig::new(),
            index_property: PROP_MAC_INDEX,
            serial_property: PROP_SERIAL_NUMBER,
            nvmem_cell: NVMEM_CELL_MAC_ADDRESS,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Enable or disable index-based generation
    #[must_use]
    pub const fn with_generation(mut self, enabled: bool) -> Self {
        self.generation_enabled = enabled;
        self
    }

    /// Set the generation parameters
    #[must_use]
    pub const fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Set the interface index property name
    #[must_use]
    pub const fn with_index_property(mut self, name: &'static str) -> Self {
        self.index_property = name;
        self
    }

    /// Set the serial number property name
    #[must_use]
    pub const fn with_serial_property(mut self, name: &'static str) -> Self {
        self.serial_property = name;
        self
    }

    /// Set the nvmem cell name
    #[must_use]
    pub const fn with_nvmem_cell(mut self, name: &'static str) -> Self {
        self.nvmem_cell = name;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
