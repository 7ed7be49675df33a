//! smoltcp Network Stack Integration
#![cfg_attr(docsrs, doc(cfg(feature = "smoltcp")))]
//!
//! Conversions between [`MacAddress`] and the smoltcp wire types, and a
//! helper that builds an interface configuration from a resolved address.
//!
//! # Example
//!
//! ```ignore
//! use smoltcp::iface::{Interface, SocketSet};
//! use smoltcp::wire::{IpAddress, IpCidr};
//! use ph_netdev_addr::{resolve_mac_address, integration::smoltcp::interface_config};
//!
//! let mac = resolve_mac_address(&tree, &eth0, &eeprom, &config)?;
//! let mut iface = Interface::new(interface_config(mac), &mut device, Instant::ZERO);
//!
//! iface.update_ip_addrs(|addrs| {
//!     addrs.push(IpCidr::new(IpAddress::v4(192, 168, 1, 100), 24)).unwrap();
//! });
//! ```
//!
//! # Features
//!
//! This module is only available when the `smoltcp` feature is enabled in Cargo.toml:
//! ```toml
//! [dependencies]
//! ph-netdev-addr = { version = "0.1", features = ["smoltcp"] }
//! ```

use smoltcp::iface::Config;
use smoltcp::wire::{EthernetAddress, HardwareAddress};

use crate::mac::MacAddress;

// =============================================================================
// Conversions
// =============================================================================

impl From<MacAddress> for EthernetAddress {
    fn from(address: MacAddress) -> Self {
        EthernetAddress(address.octets())
    }
}

impl From<EthernetAddress> for MacAddress {
    fn from(address: EthernetAddress) -> Self {
        MacAddress::new(address.0)
    }
}

impl From<MacAddress> for HardwareAddress {
    fn from(address: MacAddress) -> Self {
        HardwareAddress::Ethernet(address.into())
    }
}

// =============================================================================
// Interface Configuration
// =============================================================================

/// Interface configuration for an Ethernet device using `address`
///
/// `random_seed` is left at its default; set it from a hardware RNG before
/// creating the interface.
pub fn interface_config(address: MacAddress) -> Config {
    Config::new(address.into())
}

// =============================================================================
// Unit Tests
// =============================================================================
