//! Hardware Abstraction Layer
//!
//! Collaborator traits the resolvers consume, plus concrete backends.
//!
//! # Modules
//!
//! - [`store`]: Configuration property and nvmem cell access traits
//! - [`eeprom`]: EUI-48 EEPROM nvmem backend over `embedded_hal::i2c::I2c`
//!
//! The resolvers never mutate anything reachable through these traits.
//! A backend that is not safe for concurrent reads must be synchronized by
//! the caller.

pub mod eeprom;
pub mod store;

// Re-export commonly used types
pub use eeprom::Eui48Eeprom;
pub use store::{ConfigPropertyStore, NoNvmem, NvmemCellStore};
