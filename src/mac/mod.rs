//! MAC Address Resolution
//!
//! # Modules
//!
//! - [`address`]: The [`MacAddress`] value type and validation
//! - [`generator`]: Serial-number based address generation
//! - [`provider`]: Individual address sources
//! - [`resolver`]: The prioritized provider chain
//!
//! # Example
//!
//! ```ignore
//! use ph_netdev_addr::{resolve_mac_address, boards::TrioFlex7, NoNvmem};
//!
//! let mac = resolve_mac_address(&tree, &eth0, &NoNvmem, &TrioFlex7::resolver_config())?;
//! ```

pub mod address;
pub mod generator;
pub mod provider;
pub mod resolver;

// Re-export commonly used types
pub use address::{MacAddress, ParseMacError, RejectReason, reverse_u48};
pub use generator::DeterministicMacGenerator;
pub use provider::{
    Candidate, GeneratedMacProvider, MacSource, MacSourceProvider, NvmemMacProvider,
    PropertyMacProvider,
};
pub use resolver::{MacAddressResolver, STANDARD_CHAIN_LEN, StandardProviders, resolve_mac_address};
