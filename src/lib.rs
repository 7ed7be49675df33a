//! Network Device Address Resolution
//!
//! A `no_std`, `no_alloc` library that decides which MAC address and which
//! MAC-to-PHY interface mode a network device should be brought up with.
//!
//! The crate only makes decisions. Reading properties, finding the device
//! that owns an nvmem cell and talking to the hardware are delegated to
//! collaborator traits in [`hal`], so the same logic runs over a flattened
//! device tree, a board table or a test double.
//!
//! # Architecture
//!
//! 1. **MAC Layer** ([`mac`]): Prioritized provider chain plus deterministic
//!    serial-number based address generation
//! 2. **PHY Layer** ([`phy`]): `phy-mode` name to [`PhyInterfaceMode`]
//! 3. **HAL Layer** ([`hal`]): Property and nvmem collaborator traits, and an
//!    EUI-48 EEPROM backend over `embedded-hal` I2C
//!
//! ## Resolution Order
//!
//! `mac-address`, generated (when enabled), `local-mac-address`, `address`,
//! `nvmem-mac-address`, then the `mac-address` nvmem cell. Every candidate
//! must be six bytes, non-zero and unicast; an invalid one is skipped.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and defmt diagnostics
//! - `log`: Forward diagnostics to the `log` facade
//! - `smoltcp`: Enable smoltcp conversions
//!
//! # Example
//!
//! ```ignore
//! use ph_netdev_addr::{phy_mode, resolve_mac_address, Eui48Eeprom, ResolverConfig};
//!
//! let eeprom = Eui48Eeprom::new(i2c);
//! let config = ResolverConfig::new();
//!
//! let mac = resolve_mac_address(&tree, &eth0, &eeprom, &config)?;
//! let mode = phy_mode(&tree, &eth0)?;
//! ```
//!
//! # Custom Chains
//!
//! ```ignore
//! use ph_netdev_addr::mac::{MacAddressResolver, MacSourceProvider, PropertyMacProvider};
//!
//! let local = PropertyMacProvider::new("local-mac-address");
//! let chain: [&dyn MacSourceProvider<Tree>; 1] = [&local];
//! let (mac, source) = MacAddressResolver::new(&chain).resolve_with_source(&tree, &eth0)?;
//! ```

#![no_std]
#![deny(missing_docs)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod config;
pub mod diag;
pub mod error;
pub mod hal;
pub mod mac;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "smoltcp")]
#[cfg_attr(docsrs, doc(cfg(feature = "smoltcp")))]
pub mod integration;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{GeneratorConfig, ResolverConfig};
pub use diag::{Diagnostic, DiagnosticSink, LogSink, NullSink, Severity};
pub use error::{
    Error, MacError, MacResult, NvmemError, NvmemResult, PhyModeError, PhyModeResult, Result,
};
pub use hal::{ConfigPropertyStore, Eui48Eeprom, NoNvmem, NvmemCellStore};
pub use mac::{
    Candidate, DeterministicMacGenerator, MacAddress, MacAddressResolver, MacSource,
    MacSourceProvider, RejectReason, StandardProviders, resolve_mac_address, reverse_u48,
};
pub use phy::{PhyInterfaceMode, PhyModeResolver, phy_mode};

/// Shared constants.
///
/// Property names, generation defaults and EEPROM geometry, grouped here to
/// keep the top-level facade focused on types.
pub mod constants {
    pub use crate::internal::constants::{
        // Address geometry
        BROADCAST_MAC_ADDR,
        // Generation defaults
        DEFAULT_BASE_MAC,
        DEFAULT_MAC_STRIDE,
        DEFAULT_SERIAL_MAX,
        DEFAULT_SERIAL_MIN,
        // EEPROM
        EUI48_EEPROM_I2C_ADDR,
        EUI48_EEPROM_WORD_ADDR,
        MAC_ADDR_LEN,
        MAC_ADDR_MASK,
        MAC_GROUP_BIT,
        MAC_LOCAL_BIT,
        // Nvmem cells
        NVMEM_CELL_MAC_ADDRESS,
        // Device properties
        PROP_ADDRESS,
        PROP_LOCAL_MAC_ADDRESS,
        PROP_MAC_ADDRESS,
        PROP_MAC_INDEX,
        PROP_NVMEM_MAC_ADDRESS,
        PROP_PHY_CONNECTION_TYPE,
        PROP_PHY_MODE,
        PROP_SERIAL_NUMBER,
    };
}
