//! External Stack Integrations
//!
//! - **smoltcp** (`smoltcp`): Hand a resolved [`MacAddress`](crate::MacAddress)
//!   to a smoltcp interface
//!   - `From` conversions to and from `EthernetAddress`
//!   - `Config` construction
//!   - Requires `smoltcp` feature
//!
//! # Feature Flags
//!
//! - `smoltcp`: Enables smoltcp integration (`smoltcp` submodule)
//!
//! # Example
//!
//! ```ignore
//! use ph_netdev_addr::integration::smoltcp::interface_config;
//!
//! let mac = resolve_mac_address(&tree, &eth0, &eeprom, &config)?;
//! let mut iface = Interface::new(interface_config(mac), &mut device, now);
//! ```

#[cfg(feature = "smoltcp")]
pub mod smoltcp;

#[cfg(feature = "smoltcp")]
pub use smoltcp::interface_config;
