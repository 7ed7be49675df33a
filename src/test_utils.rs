//! Testing utilities and mock implementations
//!
//! This module provides mock collaborators for exercising the resolvers on
//! the host without a device tree, nvmem provider or I2C bus.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::error::{NvmemError, NvmemResult};
use crate::hal::store::{ConfigPropertyStore, NvmemCellStore};
use crate::internal::constants::MAC_ADDR_LEN;

/// Root node handle in [`MockPropertyStore`]
pub const ROOT: u32 = 0;

/// Device node handle used by most tests
pub const DEV: u32 = 1;

// =============================================================================
// Mock Property Store
// =============================================================================

#[derive(Debug, Clone)]
enum Prop {
    Bytes(Vec<u8>),
    Str(String),
}

/// In-memory property store keyed by `(node, key)`
///
/// # Example
///
/// ```ignore
/// let mut store = MockPropertyStore::new();
/// store.set_bytes(DEV, "local-mac-address", &[0x00, 0x1E, 0xFB, 0xF8, 0x00, 0x01]);
/// store.set_string(ROOT, "serial-number", "5");
/// ```
#[derive(Debug)]
pub struct MockPropertyStore {
    props: HashMap<(u32, String), Prop>,
    root: Option<u32>,
}

impl Default for MockPropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPropertyStore {
    /// Empty store with a root node
    pub fn new() -> Self {
        Self {
            props: HashMap::new(),
            root: Some(ROOT),
        }
    }

    /// Empty store whose root node cannot be found
    pub fn without_root() -> Self {
        Self {
            props: HashMap::new(),
            root: None,
        }
    }

    pub fn set_bytes(&mut self, node: u32, key: &str, value: &[u8]) {
        self.props
            .insert((node, key.to_string()), Prop::Bytes(value.to_vec()));
    }

    pub fn set_string(&mut self, node: u32, key: &str, value: &str) {
        self.props
            .insert((node, key.to_string()), Prop::Str(value.to_string()));
    }

    /// Store a single big-endian cell
    pub fn set_u32(&mut self, node: u32, key: &str, value: u32) {
        self.set_bytes(node, key, &value.to_be_bytes());
    }

    pub fn remove(&mut self, node: u32, key: &str) {
        self.props.remove(&(node, key.to_string()));
    }

    fn get(&self, node: u32, key: &str) -> Option<&Prop> {
        self.props.get(&(node, key.to_string()))
    }
}

impl ConfigPropertyStore for MockPropertyStore {
    type Node = u32;

    fn read_string(&self, node: &u32, key: &str) -> Option<&str> {
        match self.get(*node, key)? {
            Prop::Str(s) => Some(s.as_str()),
            Prop::Bytes(_) => None,
        }
    }

    fn read_bytes(&self, node: &u32, key: &str) -> Option<&[u8]> {
        match self.get(*node, key)? {
            Prop::Bytes(b) => Some(b.as_slice()),
            Prop::Str(s) => Some(s.as_bytes()),
        }
    }

    fn root(&self) -> Option<&u32> {
        self.root.as_ref()
    }
}

// =============================================================================
// Mock Nvmem
// =============================================================================

/// Nvmem provider serving fixed cells, or failing every read
#[derive(Debug)]
pub struct MockNvmem {
    cells: Vec<(&'static str, [u8; MAC_ADDR_LEN])>,
    has_owner: bool,
    failure: Option<NvmemError>,
    reads: Cell<usize>,
}

impl MockNvmem {
    /// Provider with an owner but no cells
    pub fn empty() -> Self {
        Self {
            cells: Vec::new(),
            has_owner: true,
            failure: None,
            reads: Cell::new(0),
        }
    }

    /// Provider serving one cell
    pub fn with_cell(name: &'static str, value: [u8; MAC_ADDR_LEN]) -> Self {
        let mut nvmem = Self::empty();
        nvmem.cells.push((name, value));
        nvmem
    }

    /// Provider whose every read fails with `error`
    pub fn failing(error: NvmemError) -> Self {
        Self {
            failure: Some(error),
            ..Self::empty()
        }
    }

    /// Make owner lookup fail
    pub fn without_owner(mut self) -> Self {
        self.has_owner = false;
        self
    }

    /// Number of cell reads attempted
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl<S: ConfigPropertyStore + ?Sized> NvmemCellStore<S> for MockNvmem {
    type Owner = ();

    fn find_owner(&self, _store: &S, _node: &S::Node) -> Option<()> {
        self.has_owner.then_some(())
    }

    fn read_mac_cell(&self, _owner: &(), cell_name: &str) -> NvmemResult<[u8; MAC_ADDR_LEN]> {
        self.reads.set(self.reads.get() + 1);
        if let Some(error) = self.failure {
            return Err(error);
        }
        self.cells
            .iter()
            .find(|(name, _)| *name == cell_name)
            .map(|(_, value)| *value)
            .ok_or(NvmemError::CellNotFound)
    }
}

// =============================================================================
// Recording Sink
// =============================================================================

/// Diagnostic sink that keeps every event for later assertions
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted so far, oldest first
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, event: Diagnostic) {
        self.events.borrow_mut().push(event);
    }
}

// =============================================================================
// Mock I2C Bus
// =============================================================================

/// Mock I2C bus backed by 256-byte devices with a word-address pointer
///
/// A write sets the device's word pointer from its first byte; a read
/// returns bytes from the pointer onward. Unknown addresses NACK.
#[derive(Debug, Default)]
pub struct MockI2c {
    /// Device memory: bus address -> contents
    devices: HashMap<u8, [u8; 256]>,
    /// Completed reads: (bus address, word address, length)
    transfers: Vec<(u8, u8, usize)>,
    /// Error returned by every transaction, if set
    failure: Option<ErrorKind>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `bytes` at `word` in the device at `address`
    pub fn load(&mut self, address: u8, word: u8, bytes: &[u8]) {
        let memory = self.devices.entry(address).or_insert([0xFF; 256]);
        for (offset, byte) in bytes.iter().enumerate() {
            memory[(usize::from(word) + offset) % 256] = *byte;
        }
    }

    /// Fail every following transaction with `kind`
    pub fn fail_with(&mut self, kind: ErrorKind) {
        self.failure = Some(kind);
    }

    pub fn transfers(&self) -> Vec<(u8, u8, usize)> {
        self.transfers.clone()
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if let Some(kind) = self.failure {
            return Err(kind);
        }
        let memory = self
            .devices
            .get(&address)
            .ok_or(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))?;

        let mut pointer = 0u8;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    if let Some(word) = bytes.first() {
                        pointer = *word;
                    }
                }
                Operation::Read(buf) => {
                    let start = pointer;
                    for byte in buf.iter_mut() {
                        *byte = memory[usize::from(pointer)];
                        pointer = pointer.wrapping_add(1);
                    }
                    self.transfers.push((address, start, buf.len()));
                }
            }
        }
        Ok(())
    }
}
