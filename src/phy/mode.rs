//! PHY Interface Modes
//!
//! The MAC-to-PHY interface modes known to device-tree bindings, in the
//! Linux `phy_interface_t` order. [`PhyInterfaceMode::index`] is the
//! position in that table.

use core::fmt;
use core::str::FromStr;

use crate::error::PhyModeError;

/// MAC-to-PHY interface mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PhyInterfaceMode {
    /// Not applicable; never matched by name
    #[default]
    Na = 0,
    /// Internal connection, no external interface
    Internal,
    /// Media Independent Interface
    Mii,
    /// Gigabit MII
    Gmii,
    /// Serial Gigabit MII
    Sgmii,
    /// Ten Bit Interface
    Tbi,
    /// Reverse MII (MAC acting as PHY)
    RevMii,
    /// Reduced MII
    Rmii,
    /// Reduced Gigabit MII, no internal delays
    Rgmii,
    /// RGMII with internal RX and TX delays
    RgmiiId,
    /// RGMII with internal RX delay
    RgmiiRxid,
    /// RGMII with internal TX delay
    RgmiiTxid,
    /// Reduced Ten Bit Interface
    Rtbi,
    /// Serial MII
    Smii,
    /// 10 Gigabit MII
    Xgmii,
    /// Multimedia over Coax
    Moca,
    /// Quad SGMII
    Qsgmii,
    /// Turbo RGMII
    Trgmii,
    /// 1000BASE-X
    Base1000X,
    /// 2500BASE-X
    Base2500X,
    /// Reduced XAUI
    Rxaui,
    /// 10 Gigabit Attachment Unit Interface
    Xaui,
    /// 10GBASE-KR backplane
    Base10GKr,
    /// Universal Serial XGMII
    Usxgmii,
}

impl PhyInterfaceMode {
    /// Every mode, in table order
    pub const ALL: [PhyInterfaceMode; 24] = [
        Self::Na,
        Self::Internal,
        Self::Mii,
        Self::Gmii,
        Self::Sgmii,
        Self::Tbi,
        Self::RevMii,
        Self::Rmii,
        Self::Rgmii,
        Self::RgmiiId,
        Self::RgmiiRxid,
        Self::RgmiiTxid,
        Self::Rtbi,
        Self::Smii,
        Self::Xgmii,
        Self::Moca,
        Self::Qsgmii,
        Self::Trgmii,
        Self::Base1000X,
        Self::Base2500X,
        Self::Rxaui,
        Self::Xaui,
        Self::Base10GKr,
        Self::Usxgmii,
    ];

    /// Canonical lowercase binding name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Na => "",
            Self::Internal => "internal",
            Self::Mii => "mii",
            Self::Gmii => "gmii",
            Self::Sgmii => "sgmii",
            Self::Tbi => "tbi",
            Self::RevMii => "rev-mii",
            Self::Rmii => "rmii",
            Self::Rgmii => "rgmii",
            Self::RgmiiId => "rgmii-id",
            Self::RgmiiRxid => "rgmii-rxid",
            Self::RgmiiTxid => "rgmii-txid",
            Self::Rtbi => "rtbi",
            Self::Smii => "smii",
            Self::Xgmii => "xgmii",
            Self::Moca => "moca",
            Self::Qsgmii => "qsgmii",
            Self::Trgmii => "trgmii",
            Self::Base1000X => "1000base-x",
            Self::Base2500X => "2500base-x",
            Self::Rxaui => "rxaui",
            Self::Xaui => "xaui",
            Self::Base10GKr => "10gbase-kr",
            Self::Usxgmii => "usxgmii",
        }
    }

    /// Position in the mode table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Mode at table position `index`
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Look up a mode by binding name, ignoring ASCII case
    ///
    /// The first table entry with a matching name wins. [`Na`](Self::Na)
    /// is never returned, so an empty name yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .skip(1)
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
    }

    /// Any of the four RGMII delay variants
    pub const fn is_rgmii(&self) -> bool {
        matches!(
            self,
            Self::Rgmii | Self::RgmiiId | Self::RgmiiRxid | Self::RgmiiTxid
        )
    }

    /// 802.3z fixed-speed fiber modes (1000BASE-X, 2500BASE-X)
    pub const fn is_802_3z(&self) -> bool {
        matches!(self, Self::Base1000X | Self::Base2500X)
    }
}

impl fmt::Display for PhyInterfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhyInterfaceMode {
    type Err = PhyModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(PhyModeError::UnknownMode)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
