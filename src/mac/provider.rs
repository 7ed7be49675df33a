//! MAC address sources
//!
//! Each source is a [`MacSourceProvider`]. A provider either has nothing to
//! offer (`Ok(None)`), offers a [`Candidate`] that the resolver validates, or
//! fails with an error the resolver propagates unchanged. Only the nvmem
//! provider can fail.

use core::fmt;

use crate::config::ResolverConfig;
use crate::diag::DiagnosticSink;
use crate::error::{MacError, MacResult};
use crate::hal::store::{ConfigPropertyStore, NvmemCellStore};
use crate::mac::address::{MacAddress, RejectReason};
use crate::mac::generator::DeterministicMacGenerator;

// =============================================================================
// Source and Candidate
// =============================================================================

/// Where a candidate address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacSource {
    /// A device property, by key
    Property(&'static str),
    /// Index/serial based generation
    Generated,
    /// A non-volatile memory cell
    Nvmem,
}

impl fmt::Display for MacSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacSource::Property(key) => write!(f, "property \"{key}\""),
            MacSource::Generated => f.write_str("generator"),
            MacSource::Nvmem => f.write_str("nvmem"),
        }
    }
}

/// An address offered by a provider, together with its validity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Candidate {
    /// Originating source
    pub source: MacSource,
    /// The validated address, or why validation failed
    pub outcome: Result<MacAddress, RejectReason>,
}

impl Candidate {
    /// Validate raw bytes from `source`
    pub fn from_bytes(source: MacSource, bytes: &[u8]) -> Self {
        Self {
            source,
            outcome: MacAddress::validate(bytes),
        }
    }

    /// Whether the candidate is usable
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The address, if valid
    pub fn address(&self) -> Option<MacAddress> {
        self.outcome.ok()
    }
}

// =============================================================================
// Provider Trait
// =============================================================================

/// One link in the resolution chain
pub trait MacSourceProvider<S: ConfigPropertyStore + ?Sized> {
    /// The source this provider reads
    fn source(&self) -> MacSource;

    /// Offer a candidate for `node`, or `None` when this source has nothing
    ///
    /// # Errors
    ///
    /// Only for failures the caller may want to act on (nvmem backend
    /// errors, missing owner). Absence is never an error.
    fn try_resolve(&self, store: &S, node: &S::Node) -> MacResult<Option<Candidate>>;
}

// =============================================================================
// Property Provider
// =============================================================================

/// Reads a 6-byte address from a device property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMacProvider {
    key: &'static str,
}

impl PropertyMacProvider {
    /// Provider for the property named `key`
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// The property key
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl<S: ConfigPropertyStore + ?Sized> MacSourceProvider<S> for PropertyMacProvider {
    fn source(&self) -> MacSource {
        MacSource::Property(self.key)
    }

    fn try_resolve(&self, store: &S, node: &S::Node) -> MacResult<Option<Candidate>> {
        Ok(store
            .read_bytes(node, self.key)
            .map(|bytes| Candidate::from_bytes(MacSource::Property(self.key), bytes)))
    }
}

// =============================================================================
// Generated Provider
// =============================================================================

/// Synthesizes an address from the device's index property and the unit
/// serial number
///
/// Inactive unless enabled and the device carries an index property.
#[derive(Debug, Clone)]
pub struct GeneratedMacProvider<D> {
    generator: DeterministicMacGenerator<D>,
    enabled: bool,
    index_property: &'static str,
    serial_property: &'static str,
}

impl<D: DiagnosticSink> GeneratedMacProvider<D> {
    /// Build from a resolver configuration, reporting to `sink`
    pub fn from_config(config: &ResolverConfig, sink: D) -> Self {
        Self {
            generator: DeterministicMacGenerator::with_sink(config.generator, sink),
            enabled: config.generation_enabled,
            index_property: config.index_property,
            serial_property: config.serial_property,
        }
    }

    /// Whether generation is active
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The underlying generator
    pub const fn generator(&self) -> &DeterministicMacGenerator<D> {
        &self.generator
    }
}

impl<S, D> MacSourceProvider<S> for GeneratedMacProvider<D>
where
    S: ConfigPropertyStore + ?Sized,
    D: DiagnosticSink,
{
    fn source(&self) -> MacSource {
        MacSource::Generated
    }

    fn try_resolve(&self, store: &S, node: &S::Node) -> MacResult<Option<Candidate>> {
        if !self.enabled {
            return Ok(None);
        }
        let Some(index) = store.read_u32(node, self.index_property) else {
            return Ok(None);
        };

        let address = self
            .generator
            .generate_for_root(store, self.serial_property, index);
        Ok(Some(Candidate::from_bytes(
            MacSource::Generated,
            address.as_bytes(),
        )))
    }
}

// =============================================================================
// Nvmem Provider
// =============================================================================

/// Reads the address from a named nvmem cell through the device's owner
#[derive(Debug)]
pub struct NvmemMacProvider<'a, M> {
    nvmem: &'a M,
    cell_name: &'static str,
}

impl<'a, M> NvmemMacProvider<'a, M> {
    /// Provider reading `cell_name` from `nvmem`
    pub const fn new(nvmem: &'a M, cell_name: &'static str) -> Self {
        Self { nvmem, cell_name }
    }

    /// The cell name
    pub const fn cell_name(&self) -> &'static str {
        self.cell_name
    }
}

impl<S, M> MacSourceProvider<S> for NvmemMacProvider<'_, M>
where
    S: ConfigPropertyStore + ?Sized,
    M: NvmemCellStore<S>,
{
    fn source(&self) -> MacSource {
        MacSource::Nvmem
    }

    fn try_resolve(&self, store: &S, node: &S::Node) -> MacResult<Option<Candidate>> {
        let owner = self
            .nvmem
            .find_owner(store, node)
            .ok_or(MacError::NoOwner)?;

        match self.nvmem.read_mac_cell(&owner, self.cell_name) {
            Ok(bytes) => Ok(Some(Candidate::from_bytes(MacSource::Nvmem, &bytes))),
            Err(e) if e.is_miss() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
