//! Configuration and nvmem access traits

use crate::error::{NvmemError, NvmemResult};
use crate::internal::constants::MAC_ADDR_LEN;

// =============================================================================
// Configuration Properties
// =============================================================================

/// Read-only access to per-device configuration properties
///
/// This is typically backed by a parsed device description (device tree,
/// board table, firmware-provided blob). A missing property is `None`, never
/// an error.
///
/// # Example Implementation
///
/// ```ignore
/// struct Board {
///     nodes: [NodeProps; 4],
/// }
///
/// impl ConfigPropertyStore for Board {
///     type Node = usize;
///
///     fn read_string(&self, node: &usize, key: &str) -> Option<&str> {
///         self.nodes.get(*node)?.string(key)
///     }
///
///     fn read_bytes(&self, node: &usize, key: &str) -> Option<&[u8]> {
///         self.nodes.get(*node)?.bytes(key)
///     }
///
///     fn root(&self) -> Option<&usize> {
///         Some(&0)
///     }
/// }
/// ```
pub trait ConfigPropertyStore {
    /// Handle identifying one device (node) in the store
    type Node: ?Sized;

    /// Read a string property
    fn read_string(&self, node: &Self::Node, key: &str) -> Option<&str>;

    /// Read a raw byte property
    fn read_bytes(&self, node: &Self::Node, key: &str) -> Option<&[u8]>;

    /// Read a 32-bit cell.
    ///
    /// The default decodes the first big-endian cell of a property read via
    /// [`read_bytes`](Self::read_bytes). Properties shorter than four bytes
    /// read as absent.
    fn read_u32(&self, node: &Self::Node, key: &str) -> Option<u32> {
        let cell = self.read_bytes(node, key)?.get(..4)?;
        <[u8; 4]>::try_from(cell).ok().map(u32::from_be_bytes)
    }

    /// The root node, which carries unit-wide identity such as the serial
    /// number
    fn root(&self) -> Option<&Self::Node>;
}

// =============================================================================
// Non-Volatile Memory Cells
// =============================================================================

/// Access to MAC addresses stored in non-volatile memory cells
///
/// Reading a cell first requires the device's owning platform entity.
/// Implementations are expected to complete in bounded time and to report
/// a stalled backend as [`NvmemError::Timeout`](crate::error::NvmemError::Timeout).
pub trait NvmemCellStore<S: ConfigPropertyStore + ?Sized> {
    /// Owning platform entity of a device
    type Owner;

    /// Look up the owner of `node`, if any
    fn find_owner(&self, store: &S, node: &S::Node) -> Option<Self::Owner>;

    /// Read the named MAC cell through `owner`
    ///
    /// # Errors
    ///
    /// [`NvmemError::CellNotFound`](crate::error::NvmemError::CellNotFound)
    /// when the cell does not exist, other variants for backend failures.
    fn read_mac_cell(
        &self,
        owner: &Self::Owner,
        cell_name: &str,
    ) -> NvmemResult<[u8; MAC_ADDR_LEN]>;
}

/// An nvmem store with no cells, for platforms without non-volatile memory
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNvmem;

impl<S: ConfigPropertyStore + ?Sized> NvmemCellStore<S> for NoNvmem {
    type Owner = ();

    fn find_owner(&self, _store: &S, _node: &S::Node) -> Option<()> {
        Some(())
    }

    fn read_mac_cell(&self, _owner: &(), _cell_name: &str) -> NvmemResult<[u8; MAC_ADDR_LEN]> {
        Err(NvmemError::CellNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockPropertyStore;

    #[test]
    fn read_u32_decodes_big_endian_cell() {
        let mut store = MockPropertyStore::new();
        store.set_bytes(1, "mac-index", &[0x00, 0x00, 0x01, 0x02]);

        assert_eq!(store.read_u32(&1, "mac-index"), Some(0x0102));
    }

    #[test]
    fn read_u32_uses_first_cell_of_longer_property() {
        let mut store = MockPropertyStore::new();
        store.set_bytes(1, "cells", &[0, 0, 0, 7, 0, 0, 0, 9]);

        assert_eq!(store.read_u32(&1, "cells"), Some(7));
    }

    #[test]
    fn read_u32_short_or_missing_is_absent() {
        let mut store = MockPropertyStore::new();
        store.set_bytes(1, "short", &[0x01, 0x02]);

        assert_eq!(store.read_u32(&1, "short"), None);
        assert_eq!(store.read_u32(&1, "absent"), None);
    }

    #[test]
    fn no_nvmem_has_no_cells() {
        let store = MockPropertyStore::new();
        let nvmem = NoNvmem;

        let owner = NvmemCellStore::<MockPropertyStore>::find_owner(&nvmem, &store, &1);
        assert_eq!(owner, Some(()));
        assert_eq!(
            NvmemCellStore::<MockPropertyStore>::read_mac_cell(&nvmem, &(), "mac-address"),
            Err(NvmemError::CellNotFound)
        );
    }
}
