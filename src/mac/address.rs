//! IEEE 802 MAC address type and validation

use core::fmt;
use core::str::FromStr;

use crate::internal::constants::{
    BROADCAST_MAC_ADDR, MAC_ADDR_LEN, MAC_ADDR_MASK, MAC_GROUP_BIT, MAC_LOCAL_BIT,
};

// =============================================================================
// Rejection Reasons
// =============================================================================

/// Why a candidate byte sequence is not a usable device address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RejectReason {
    /// Not exactly six bytes (carries the actual length)
    WrongLength(usize),
    /// All six bytes are zero
    Zero,
    /// Group bit set (multicast, including broadcast)
    Multicast,
}

impl RejectReason {
    /// Returns a human-readable description
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RejectReason::WrongLength(_) => "wrong length",
            RejectReason::Zero => "all-zero address",
            RejectReason::Multicast => "multicast address",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::WrongLength(len) => write!(f, "wrong length ({len} bytes)"),
            _ => f.write_str(self.as_str()),
        }
    }
}

// =============================================================================
// MAC Address
// =============================================================================

/// A 6-byte IEEE 802 hardware address in canonical (transmission) byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacAddress([u8; MAC_ADDR_LEN]);

impl MacAddress {
    /// The all-zero address
    pub const ZERO: Self = Self([0; MAC_ADDR_LEN]);

    /// The broadcast address `ff:ff:ff:ff:ff:ff`
    pub const BROADCAST: Self = Self(BROADCAST_MAC_ADDR);

    /// Create an address from its six octets
    #[must_use]
    pub const fn new(octets: [u8; MAC_ADDR_LEN]) -> Self {
        Self(octets)
    }

    /// Create an address from the low 48 bits of `value`, most significant
    /// byte first. Higher bits are ignored.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        let b = (value & MAC_ADDR_MASK).to_be_bytes();
        Self([b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// The address as a 48-bit integer, first octet most significant
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        let o = self.0;
        u64::from_be_bytes([0, 0, o[0], o[1], o[2], o[3], o[4], o[5]])
    }

    /// The six octets
    #[must_use]
    pub const fn octets(self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }

    /// Borrow the octets
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; MAC_ADDR_LEN] {
        &self.0
    }

    /// All six octets are zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let o = self.0;
        (o[0] | o[1] | o[2] | o[3] | o[4] | o[5]) == 0
    }

    /// Group bit is set
    #[must_use]
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & MAC_GROUP_BIT != 0
    }

    /// All six octets are `0xff`
    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        let o = self.0;
        (o[0] & o[1] & o[2] & o[3] & o[4] & o[5]) == 0xFF
    }

    /// Group bit is clear
    #[must_use]
    pub const fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Locally administered bit is set
    #[must_use]
    pub const fn is_locally_administered(&self) -> bool {
        self.0[0] & MAC_LOCAL_BIT != 0
    }

    /// Usable as a device address: unicast and not all-zero
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.is_multicast() && !self.is_zero()
    }

    /// The address with its six octets in reverse order
    #[must_use]
    pub const fn reversed(self) -> Self {
        let o = self.0;
        Self([o[5], o[4], o[3], o[2], o[1], o[0]])
    }

    /// Validate raw bytes as a device address.
    ///
    /// # Errors
    ///
    /// Returns the first [`RejectReason`] that applies, checked in
    /// declaration order.
    pub fn validate(bytes: &[u8]) -> Result<Self, RejectReason> {
        let addr = Self::try_from(bytes)?;
        if addr.is_zero() {
            Err(RejectReason::Zero)
        } else if addr.is_multicast() {
            Err(RejectReason::Multicast)
        } else {
            Ok(addr)
        }
    }
}

/// Reverse the byte order of the low 48 bits of `value`.
///
/// Bytes 0..=5 are swapped pairwise (0↔5, 1↔4, 2↔3). Bits above 48 are
/// cleared. Applying it twice yields the masked input.
#[must_use]
pub const fn reverse_u48(value: u64) -> u64 {
    ((value >> 40) & 0x0000_0000_0000_00FF)
        | ((value >> 24) & 0x0000_0000_0000_FF00)
        | ((value >> 8) & 0x0000_0000_00FF_0000)
        | ((value << 8) & 0x0000_0000_FF00_0000)
        | ((value << 24) & 0x0000_00FF_0000_0000)
        | ((value << 40) & 0x0000_FF00_0000_0000)
}

// =============================================================================
// Conversions
// =============================================================================

impl From<[u8; MAC_ADDR_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_ADDR_LEN]) -> Self {
        Self(octets)
    }
}

impl From<MacAddress> for [u8; MAC_ADDR_LEN] {
    fn from(addr: MacAddress) -> Self {
        addr.0
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = RejectReason;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; MAC_ADDR_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| RejectReason::WrongLength(bytes.len()))
    }
}

impl AsRef<[u8]> for MacAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

/// Error returned when a textual MAC address cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseMacError;

impl fmt::Display for ParseMacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid MAC address syntax")
    }
}

impl FromStr for MacAddress {
    type Err = ParseMacError;

    /// Parse `aa:bb:cc:dd:ee:ff` or `aa-bb-cc-dd-ee-ff` (either case).
    /// Separators must not be mixed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = match s.as_bytes().get(2) {
            Some(b':') => ':',
            Some(b'-') => '-',
            _ => return Err(ParseMacError),
        };

        let mut octets = [0u8; MAC_ADDR_LEN];
        let mut parts = s.split(sep);
        for octet in &mut octets {
            let part = parts.next().ok_or(ParseMacError)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseMacError);
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| ParseMacError)?;
        }
        if parts.next().is_some() {
            return Err(ParseMacError);
        }
        Ok(Self(octets))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
