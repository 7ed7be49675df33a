//! PHY Interface Mode Resolution
//!
//! Maps the textual `phy-mode` property of a network device to the
//! [`PhyInterfaceMode`] the MAC must be configured for.
//!
//! # Example
//!
//! ```ignore
//! use ph_netdev_addr::phy::{phy_mode, PhyInterfaceMode};
//!
//! match phy_mode(&tree, &eth0) {
//!     Ok(mode) if mode.is_rgmii() => configure_rgmii(mode),
//!     Ok(PhyInterfaceMode::Rmii) => configure_rmii(),
//!     Ok(mode) => return Err(Unsupported(mode)),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod mode;
pub mod resolver;

pub use mode::PhyInterfaceMode;
pub use resolver::{PhyModeResolver, phy_mode};
