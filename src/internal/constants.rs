//! Centralized Constants
//!
//! Single source of truth for property names, address geometry and the
//! default generation parameters used across the resolvers.
//!
//! # Organization
//!
//! - **Address geometry**: MAC address length and masks
//! - **Property names**: Configuration keys consulted during resolution
//! - **Generation defaults**: Base address, stride and serial range
//! - **EUI-48 EEPROM**: Bus and word addresses for factory-programmed parts

// =============================================================================
// Address Geometry
// =============================================================================

/// MAC address length in bytes
pub const MAC_ADDR_LEN: usize = 6;

/// Mask selecting the low 48 bits of a `u64`
pub const MAC_ADDR_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;

/// Group (multicast) bit in the first octet
pub const MAC_GROUP_BIT: u8 = 0x01;

/// Locally administered bit in the first octet
pub const MAC_LOCAL_BIT: u8 = 0x02;

/// Broadcast address
pub const BROADCAST_MAC_ADDR: [u8; MAC_ADDR_LEN] = [0xFF; MAC_ADDR_LEN];

// =============================================================================
// Property Names
// =============================================================================

/// Most recently assigned address
pub const PROP_MAC_ADDRESS: &str = "mac-address";

/// Factory default address
pub const PROP_LOCAL_MAC_ADDRESS: &str = "local-mac-address";

/// Obsolete alias some device descriptions use for the MAC address
pub const PROP_ADDRESS: &str = "address";

/// Address placed by firmware that read it from nvmem
pub const PROP_NVMEM_MAC_ADDRESS: &str = "nvmem-mac-address";

/// Primary PHY mode property
pub const PROP_PHY_MODE: &str = "phy-mode";

/// Legacy PHY mode property
pub const PROP_PHY_CONNECTION_TYPE: &str = "phy-connection-type";

/// Per-interface generation index property
pub const PROP_MAC_INDEX: &str = "mac-index";

/// Unit serial number property on the root node
pub const PROP_SERIAL_NUMBER: &str = "serial-number";

/// Nvmem cell holding the MAC address
pub const NVMEM_CELL_MAC_ADDRESS: &str = "mac-address";

// =============================================================================
// Generation Defaults
// =============================================================================

/// Default base address (OUI `00:1E:FB` plus base offset)
pub const DEFAULT_BASE_MAC: u64 = 0x001E_FBF8_0001;

/// Default number of MAC slots consumed per serial number
pub const DEFAULT_MAC_STRIDE: u64 = 2;

/// Lowest valid serial number (inclusive)
pub const DEFAULT_SERIAL_MIN: i64 = 1;

/// Highest valid serial number (exclusive)
pub const DEFAULT_SERIAL_MAX: i64 = 229_375;

// =============================================================================
// EUI-48 EEPROM (24AA02E48 family)
// =============================================================================

/// 7-bit I2C bus address (A2..A0 are don't-care on these parts)
pub const EUI48_EEPROM_I2C_ADDR: u8 = 0x50;

/// Word address of the first EUI-48 byte
pub const EUI48_EEPROM_WORD_ADDR: u8 = 0xFA;
