//! PHY mode lookup from device properties

use crate::error::{PhyModeError, PhyModeResult};
use crate::hal::store::ConfigPropertyStore;
use crate::internal::constants::{PROP_PHY_CONNECTION_TYPE, PROP_PHY_MODE};
use crate::phy::mode::PhyInterfaceMode;

/// Reads a device's interface mode from its property store
///
/// The primary key is consulted first. The legacy key is only read when the
/// primary key is absent, never when it is present with an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyModeResolver {
    primary_key: &'static str,
    legacy_key: &'static str,
}

impl PhyModeResolver {
    /// Resolver for `phy-mode` with `phy-connection-type` as fallback
    pub const fn new() -> Self {
        Self {
            primary_key: PROP_PHY_MODE,
            legacy_key: PROP_PHY_CONNECTION_TYPE,
        }
    }

    /// Use different property keys
    #[must_use]
    pub const fn with_keys(mut self, primary: &'static str, legacy: &'static str) -> Self {
        self.primary_key = primary;
        self.legacy_key = legacy;
        self
    }

    /// The mode name configured for `node`, if any
    pub fn mode_name<'s, S>(&self, store: &'s S, node: &S::Node) -> Option<&'s str>
    where
        S: ConfigPropertyStore + ?Sized,
    {
        store
            .read_string(node, self.primary_key)
            .or_else(|| store.read_string(node, self.legacy_key))
    }

    /// Resolve the interface mode of `node`
    ///
    /// # Errors
    ///
    /// [`PhyModeError::MissingConfig`] when neither key is present,
    /// [`PhyModeError::UnknownMode`] when the name matches no known mode.
    pub fn resolve<S>(&self, store: &S, node: &S::Node) -> PhyModeResult<PhyInterfaceMode>
    where
        S: ConfigPropertyStore + ?Sized,
    {
        let name = self
            .mode_name(store, node)
            .ok_or(PhyModeError::MissingConfig)?;
        PhyInterfaceMode::from_name(name).ok_or(PhyModeError::UnknownMode)
    }
}

impl Default for PhyModeResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `node`'s interface mode from the standard keys
///
/// # Errors
///
/// Same as [`PhyModeResolver::resolve`].
pub fn phy_mode<S>(store: &S, node: &S::Node) -> PhyModeResult<PhyInterfaceMode>
where
    S: ConfigPropertyStore + ?Sized,
{
    PhyModeResolver::new().resolve(store, node)
}

// =============================================================================
// Unit Tests
// =============================================================================
