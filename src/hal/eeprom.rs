//! EUI-48 EEPROM nvmem backend
//!
//! Microchip 24AA02E48/24AA025E48 and compatible parts ship with a globally
//! unique EUI-48 programmed into a write-protected block starting at word
//! address `0xFA`. This backend exposes that block as a single nvmem cell.

use core::cell::RefCell;

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::error::{NvmemError, NvmemResult};
use crate::hal::store::{ConfigPropertyStore, NvmemCellStore};
use crate::internal::constants::{
    EUI48_EEPROM_I2C_ADDR, EUI48_EEPROM_WORD_ADDR, MAC_ADDR_LEN, NVMEM_CELL_MAC_ADDRESS,
};

/// EUI-48 EEPROM on an I2C bus
///
/// The bus is held in a `RefCell` so the store can be read through `&self`.
/// A nested read while a transfer is in progress reports
/// [`NvmemError::Busy`].
#[derive(Debug)]
pub struct Eui48Eeprom<I2C> {
    i2c: RefCell<I2C>,
    address: u8,
    cell_name: &'static str,
}

impl<I2C: I2c> Eui48Eeprom<I2C> {
    /// Create a backend at the default bus address serving the
    /// `mac-address` cell
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c: RefCell::new(i2c),
            address: EUI48_EEPROM_I2C_ADDR,
            cell_name: NVMEM_CELL_MAC_ADDRESS,
        }
    }

    /// Use a different 7-bit bus address
    #[must_use]
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Serve the EUI-48 under a different cell name
    #[must_use]
    pub fn with_cell_name(mut self, cell_name: &'static str) -> Self {
        self.cell_name = cell_name;
        self
    }

    /// Bus address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c.into_inner()
    }

    /// Read the six EUI-48 bytes
    ///
    /// # Errors
    ///
    /// [`NvmemError::Busy`] on re-entrant use or bus arbitration loss,
    /// [`NvmemError::Io`] for any other bus error.
    pub fn read_eui48(&self) -> NvmemResult<[u8; MAC_ADDR_LEN]> {
        let mut i2c = self.i2c.try_borrow_mut().map_err(|_| NvmemError::Busy)?;
        let mut buf = [0u8; MAC_ADDR_LEN];
        i2c.write_read(self.address, &[EUI48_EEPROM_WORD_ADDR], &mut buf)
            .map_err(|e| match e.kind() {
                ErrorKind::ArbitrationLoss => NvmemError::Busy,
                _ => NvmemError::Io,
            })?;
        Ok(buf)
    }
}

impl<S, I2C> NvmemCellStore<S> for Eui48Eeprom<I2C>
where
    S: ConfigPropertyStore + ?Sized,
    I2C: I2c,
{
    type Owner = ();

    fn find_owner(&self, _store: &S, _node: &S::Node) -> Option<()> {
        Some(())
    }

    fn read_mac_cell(&self, _owner: &(), cell_name: &str) -> NvmemResult<[u8; MAC_ADDR_LEN]> {
        if cell_name != self.cell_name {
            return Err(NvmemError::CellNotFound);
        }
        self.read_eui48()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
