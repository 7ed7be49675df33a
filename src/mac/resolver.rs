//! Prioritized MAC address resolution
//!
//! The resolver walks an ordered list of [`MacSourceProvider`]s and returns
//! the first valid candidate. Invalid candidates (wrong length, all-zero,
//! multicast) are reported and skipped, so a stale all-zero `mac-address`
//! left by a boot loader does not hide a good `local-mac-address`.
//!
//! The standard order is:
//!
//! 1. `mac-address` property (most recently assigned)
//! 2. index-based generation, when enabled
//! 3. `local-mac-address` property (factory default)
//! 4. `address` property (obsolete alias)
//! 5. `nvmem-mac-address` property
//! 6. the `mac-address` nvmem cell

use crate::config::ResolverConfig;
use crate::diag::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::{MacError, MacResult};
use crate::hal::store::{ConfigPropertyStore, NvmemCellStore};
use crate::internal::constants::{
    PROP_ADDRESS, PROP_LOCAL_MAC_ADDRESS, PROP_MAC_ADDRESS, PROP_NVMEM_MAC_ADDRESS,
};
use crate::mac::address::MacAddress;
use crate::mac::provider::{
    GeneratedMacProvider, MacSource, MacSourceProvider, NvmemMacProvider, PropertyMacProvider,
};

// =============================================================================
// Resolver
// =============================================================================

/// Resolves a device's MAC address from an ordered provider chain
pub struct MacAddressResolver<'p, S: ConfigPropertyStore + ?Sized, D = LogSink> {
    providers: &'p [&'p dyn MacSourceProvider<S>],
    sink: D,
}

impl<'p, S: ConfigPropertyStore + ?Sized> MacAddressResolver<'p, S, LogSink> {
    /// Create a resolver over `providers`, tried in slice order
    pub fn new(providers: &'p [&'p dyn MacSourceProvider<S>]) -> Self {
        Self {
            providers,
            sink: LogSink,
        }
    }
}

impl<'p, S, D> MacAddressResolver<'p, S, D>
where
    S: ConfigPropertyStore + ?Sized,
    D: DiagnosticSink,
{
    /// Create a resolver reporting to `sink`
    pub fn with_sink(providers: &'p [&'p dyn MacSourceProvider<S>], sink: D) -> Self {
        Self { providers, sink }
    }

    /// The provider chain
    pub fn providers(&self) -> &[&'p dyn MacSourceProvider<S>] {
        self.providers
    }

    /// Resolve the address of `node`
    ///
    /// # Errors
    ///
    /// [`MacError::NoAddressFound`] when every source misses or is invalid.
    /// Provider failures ([`MacError::NoOwner`], [`MacError::Nvmem`],
    /// [`MacError::AllocationFailure`]) abort the walk and are returned as-is.
    pub fn resolve(&self, store: &S, node: &S::Node) -> MacResult<MacAddress> {
        self.resolve_with_source(store, node)
            .map(|(address, _)| address)
    }

    /// Like [`resolve`](Self::resolve), also reporting which source won
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn resolve_with_source(
        &self,
        store: &S,
        node: &S::Node,
    ) -> MacResult<(MacAddress, MacSource)> {
        for provider in self.providers {
            let Some(candidate) = provider.try_resolve(store, node)? else {
                continue;
            };

            match candidate.outcome {
                Ok(address) => {
                    self.sink.emit(Diagnostic::AddressResolved {
                        source: candidate.source,
                        address,
                    });
                    return Ok((address, candidate.source));
                }
                Err(reason) => self.sink.emit(Diagnostic::CandidateRejected {
                    source: candidate.source,
                    reason,
                }),
            }
        }

        Err(MacError::NoAddressFound)
    }
}

// =============================================================================
// Standard Chain
// =============================================================================

/// Number of providers in the standard chain
pub const STANDARD_CHAIN_LEN: usize = 6;

/// Owns the six providers of the standard resolution order
///
/// ```ignore
/// let providers = StandardProviders::new(&config, &eeprom);
/// let chain = providers.chain();
/// let mac = MacAddressResolver::new(&chain).resolve(&tree, &node)?;
/// ```
#[derive(Debug)]
pub struct StandardProviders<'a, M, D = LogSink> {
    mac_address: PropertyMacProvider,
    generated: GeneratedMacProvider<D>,
    local_mac_address: PropertyMacProvider,
    address: PropertyMacProvider,
    nvmem_mac_address: PropertyMacProvider,
    nvmem: NvmemMacProvider<'a, M>,
}

impl<'a, M> StandardProviders<'a, M, LogSink> {
    /// Build the standard chain, with generation reporting to [`LogSink`]
    pub fn new(config: &ResolverConfig, nvmem: &'a M) -> Self {
        Self::with_sink(config, nvmem, LogSink)
    }
}

impl<'a, M, D: DiagnosticSink> StandardProviders<'a, M, D> {
    /// Build the standard chain, with generation reporting to `sink`
    pub fn with_sink(config: &ResolverConfig, nvmem: &'a M, sink: D) -> Self {
        Self {
            mac_address: PropertyMacProvider::new(PROP_MAC_ADDRESS),
            generated: GeneratedMacProvider::from_config(config, sink),
            local_mac_address: PropertyMacProvider::new(PROP_LOCAL_MAC_ADDRESS),
            address: PropertyMacProvider::new(PROP_ADDRESS),
            nvmem_mac_address: PropertyMacProvider::new(PROP_NVMEM_MAC_ADDRESS),
            nvmem: NvmemMacProvider::new(nvmem, config.nvmem_cell),
        }
    }

    /// The providers in priority order
    pub fn chain<S>(&self) -> [&dyn MacSourceProvider<S>; STANDARD_CHAIN_LEN]
    where
        S: ConfigPropertyStore + ?Sized,
        M: NvmemCellStore<S>,
    {
        [
            &self.mac_address,
            &self.generated,
            &self.local_mac_address,
            &self.address,
            &self.nvmem_mac_address,
            &self.nvmem,
        ]
    }
}

/// Resolve `node`'s address with the standard chain in one call
///
/// # Errors
///
/// Same as [`MacAddressResolver::resolve`].
pub fn resolve_mac_address<S, M>(
    store: &S,
    node: &S::Node,
    nvmem: &M,
    config: &ResolverConfig,
) -> MacResult<MacAddress>
where
    S: ConfigPropertyStore + ?Sized,
    M: NvmemCellStore<S>,
{
    let providers = StandardProviders::new(config, nvmem);
    let chain = providers.chain::<S>();
    MacAddressResolver::new(&chain).resolve(store, node)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NvmemError;
    use crate::mac::address::RejectReason;
    use crate::test_utils::{DEV, MockNvmem, MockPropertyStore, ROOT, RecordingSink};

    const MAC: [u8; 6] = [0x02, 0x11, 0x22, 0x33, 0x44, 0x55];
    const LOCAL: [u8; 6] = [0x00, 0x1E, 0xFB, 0xF8, 0x00, 0x01];
    const LEGACY: [u8; 6] = [0x02, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE];
    const HINT: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x99];
    const NVMEM: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];

    fn resolve_with(
        store: &MockPropertyStore,
        nvmem: &MockNvmem,
        config: &ResolverConfig,
        sink: &RecordingSink,
    ) -> MacResult<(MacAddress, MacSource)> {
        let providers = StandardProviders::with_sink(config, nvmem, sink);
        let chain = providers.chain::<MockPropertyStore>();
        MacAddressResolver::with_sink(&chain, sink).resolve_with_source(store, &DEV)
    }

    // =========================================================================
    // Priority Tests
    // =========================================================================

    #[test]
    fn mac_address_beats_local_mac_address() {
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "mac-address", &MAC);
        store.set_bytes(DEV, "local-mac-address", &LOCAL);

        let (address, source) =
            resolve_with(&store, &MockNvmem::empty(), &ResolverConfig::new(), &sink).unwrap();

        assert_eq!(address, MacAddress::new(MAC));
        assert_eq!(source, MacSource::Property("mac-address"));
    }

    #[test]
    fn zero_mac_address_falls_through_to_local() {
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "mac-address", &[0; 6]);
        store.set_bytes(DEV, "local-mac-address", &LOCAL);

        let (address, source) =
            resolve_with(&store, &MockNvmem::empty(), &ResolverConfig::new(), &sink).unwrap();

        assert_eq!(address, MacAddress::new(LOCAL));
        assert_eq!(source, MacSource::Property("local-mac-address"));
        assert_eq!(
            sink.events()[0],
            Diagnostic::CandidateRejected {
                source: MacSource::Property("mac-address"),
                reason: RejectReason::Zero,
            }
        );
    }

    #[test]
    fn generation_sits_between_mac_and_local() {
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "local-mac-address", &LOCAL);
        store.set_u32(DEV, "mac-index", 1);
        store.set_string(ROOT, "serial-number", "5");
        let config = ResolverConfig::new().with_generation(true);

        let (address, source) = resolve_with(&store, &MockNvmem::empty(), &config, &sink).unwrap();
        assert_eq!(source, MacSource::Generated);
        assert_eq!(address.to_u64(), 0x001E_FBF8_000C);

        store.set_bytes(DEV, "mac-address", &MAC);
        let (_, source) = resolve_with(&store, &MockNvmem::empty(), &config, &sink).unwrap();
        assert_eq!(source, MacSource::Property("mac-address"));
    }

    #[test]
    fn legacy_sources_in_order() {
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        let nvmem = MockNvmem::with_cell("mac-address", NVMEM);
        store.set_bytes(DEV, "nvmem-mac-address", &HINT);
        store.set_bytes(DEV, "address", &LEGACY);

        let (_, source) = resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink).unwrap();
        assert_eq!(source, MacSource::Property("address"));

        store.remove(DEV, "address");
        let (address, source) =
            resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink).unwrap();
        assert_eq!(source, MacSource::Property("nvmem-mac-address"));
        assert_eq!(address, MacAddress::new(HINT));

        store.remove(DEV, "nvmem-mac-address");
        let (address, source) =
            resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink).unwrap();
        assert_eq!(source, MacSource::Nvmem);
        assert_eq!(address, MacAddress::new(NVMEM));
    }

    #[test]
    fn address_with_register_window_is_skipped() {
        // `address` commonly holds a register range, not a MAC
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "address", &[0xF0, 0x00, 0x10, 0x00]);
        let nvmem = MockNvmem::with_cell("mac-address", NVMEM);

        let (_, source) = resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink).unwrap();
        assert_eq!(source, MacSource::Nvmem);
    }

    // =========================================================================
    // Failure Tests
    // =========================================================================

    #[test]
    fn nothing_anywhere_is_no_address_found() {
        let sink = RecordingSink::new();
        let store = MockPropertyStore::new();

        assert_eq!(
            resolve_with(&store, &MockNvmem::empty(), &ResolverConfig::new(), &sink),
            Err(MacError::NoAddressFound)
        );
    }

    #[test]
    fn all_sources_invalid_is_no_address_found() {
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "mac-address", &[0; 6]);
        store.set_bytes(DEV, "local-mac-address", &[0xFF; 6]);
        let nvmem = MockNvmem::with_cell("mac-address", [0x01, 0, 0x5E, 0, 0, 1]);

        assert_eq!(
            resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink),
            Err(MacError::NoAddressFound)
        );
        assert_eq!(sink.events().len(), 3);
    }

    #[test]
    fn nvmem_failure_is_propagated_distinctly() {
        let sink = RecordingSink::new();
        let store = MockPropertyStore::new();
        let nvmem = MockNvmem::failing(NvmemError::Io);

        let err = resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink).unwrap_err();
        assert_eq!(err, MacError::Nvmem(NvmemError::Io));
        assert!(err.is_retryable());
    }

    #[test]
    fn nvmem_is_not_consulted_when_property_wins() {
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "local-mac-address", &LOCAL);
        let nvmem = MockNvmem::failing(NvmemError::Io);

        let (address, _) = resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink).unwrap();
        assert_eq!(address, MacAddress::new(LOCAL));
        assert_eq!(nvmem.reads(), 0);
    }

    #[test]
    fn missing_owner_is_reported() {
        let sink = RecordingSink::new();
        let store = MockPropertyStore::new();
        let nvmem = MockNvmem::with_cell("mac-address", NVMEM).without_owner();

        assert_eq!(
            resolve_with(&store, &nvmem, &ResolverConfig::new(), &sink),
            Err(MacError::NoOwner)
        );
    }

    // =========================================================================
    // Custom Chain Tests
    // =========================================================================

    #[test]
    fn custom_chain_order_is_respected() {
        let sink = RecordingSink::new();
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "mac-address", &MAC);
        store.set_bytes(DEV, "local-mac-address", &LOCAL);

        let local = PropertyMacProvider::new("local-mac-address");
        let mac = PropertyMacProvider::new("mac-address");
        let chain: [&dyn MacSourceProvider<MockPropertyStore>; 2] = [&local, &mac];
        let resolver = MacAddressResolver::with_sink(&chain, &sink);

        assert_eq!(resolver.providers().len(), 2);
        assert_eq!(resolver.resolve(&store, &DEV), Ok(MacAddress::new(LOCAL)));
    }

    #[test]
    fn empty_chain_finds_nothing() {
        let store = MockPropertyStore::new();
        let chain: [&dyn MacSourceProvider<MockPropertyStore>; 0] = [];

        assert_eq!(
            MacAddressResolver::new(&chain).resolve(&store, &DEV),
            Err(MacError::NoAddressFound)
        );
    }

    #[test]
    fn standard_chain_order() {
        let nvmem = MockNvmem::empty();
        let providers = StandardProviders::new(&ResolverConfig::new(), &nvmem);
        let chain = providers.chain::<MockPropertyStore>();

        let sources = chain.map(|p| p.source());
        assert_eq!(
            sources,
            [
                MacSource::Property("mac-address"),
                MacSource::Generated,
                MacSource::Property("local-mac-address"),
                MacSource::Property("address"),
                MacSource::Property("nvmem-mac-address"),
                MacSource::Nvmem,
            ]
        );
    }

    #[test]
    fn one_call_helper() {
        let mut store = MockPropertyStore::new();
        store.set_bytes(DEV, "local-mac-address", &LOCAL);

        assert_eq!(
            resolve_mac_address(&store, &DEV, &MockNvmem::empty(), &ResolverConfig::new()),
            Ok(MacAddress::new(LOCAL))
        );
    }
}
