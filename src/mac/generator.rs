//! Deterministic MAC address generation
//!
//! Units that leave the factory without a programmed address derive one from
//! their serial number. Each unit owns `stride` consecutive addresses above a
//! fixed base; the interface index selects one of them:
//!
//! ```text
//! address = base + serial * stride + index        (mod 2^48)
//! ```
//!
//! Generation never fails. An unparsable or out-of-range serial number is
//! replaced by 0 and reported on the diagnostic sink, so an unprovisioned
//! unit still comes up with `base + index`. Every such unit gets the same
//! address, which is why the anomaly is reported at warn level.

use crate::config::GeneratorConfig;
use crate::diag::{Diagnostic, DiagnosticSink, LogSink};
use crate::hal::store::ConfigPropertyStore;
use crate::internal::constants::MAC_ADDR_MASK;
use crate::internal::parse::parse_auto_i64;
use crate::mac::address::MacAddress;

/// Address generator for a fixed base, stride and serial range
#[derive(Debug, Clone)]
pub struct DeterministicMacGenerator<D = LogSink> {
    config: GeneratorConfig,
    sink: D,
}

impl DeterministicMacGenerator<LogSink> {
    /// Create a generator reporting to [`LogSink`]
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            sink: LogSink,
        }
    }
}

impl<D: DiagnosticSink> DeterministicMacGenerator<D> {
    /// Create a generator reporting to `sink`
    pub const fn with_sink(config: GeneratorConfig, sink: D) -> Self {
        Self { config, sink }
    }

    /// The generation parameters
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // =========================================================================
    // Serial Number Handling
    // =========================================================================

    /// Clamp a serial number to the valid range.
    ///
    /// Values inside the configured range and the unprovisioned value 0 pass
    /// through. Anything else becomes 0 and emits
    /// [`Diagnostic::SerialOutOfRange`].
    pub fn normalize_serial(&self, serial: i64) -> i64 {
        if serial == 0 || self.config.serial_in_range(serial) {
            serial
        } else {
            self.sink.emit(Diagnostic::SerialOutOfRange { serial });
            0
        }
    }

    /// Parse and normalize a textual serial number.
    ///
    /// Accepts decimal, `0x` hex and leading-zero octal. Unparsable text
    /// becomes 0 and emits [`Diagnostic::SerialUnparsable`].
    pub fn parse_serial(&self, text: &str) -> i64 {
        match parse_auto_i64(text) {
            Some(serial) => self.normalize_serial(serial),
            None => {
                self.sink.emit(Diagnostic::SerialUnparsable);
                0
            }
        }
    }

    /// Read the serial number from the root node of `store`.
    ///
    /// A missing root or property means an unprovisioned unit and yields 0
    /// without a diagnostic.
    pub fn serial_from_root<S>(&self, store: &S, serial_property: &str) -> i64
    where
        S: ConfigPropertyStore + ?Sized,
    {
        store
            .root()
            .and_then(|root| store.read_string(root, serial_property))
            .map_or(0, |text| self.parse_serial(text))
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// The 48-bit address value for `index` and an already-normalized serial
    fn raw_value(&self, index: u32, serial: i64) -> u64 {
        self.config
            .base
            .wrapping_add((serial as u64).wrapping_mul(self.config.stride))
            .wrapping_add(u64::from(index))
            & MAC_ADDR_MASK
    }

    /// The 48-bit address value for `index` and `serial`.
    ///
    /// `serial` is normalized first.
    pub fn value(&self, index: u32, serial: i64) -> u64 {
        self.raw_value(index, self.normalize_serial(serial))
    }

    /// Generate the address for `index` and `serial` in canonical order
    pub fn generate(&self, index: u32, serial: i64) -> MacAddress {
        let address = MacAddress::from_u64(self.value(index, serial));
        self.sink.emit(Diagnostic::MacGenerated { index, address });
        address
    }

    /// Generate the address for `index` and `serial` with its six bytes
    /// reversed, for consumers that expect transmission bit order
    pub fn generate_reversed(&self, index: u32, serial: i64) -> MacAddress {
        self.generate(index, serial).reversed()
    }

    /// Generate using the serial number stored on the root node
    pub fn generate_for_root<S>(&self, store: &S, serial_property: &str, index: u32) -> MacAddress
    where
        S: ConfigPropertyStore + ?Sized,
    {
        let serial = self.serial_from_root(store, serial_property);
        self.generate(index, serial)
    }

    /// Reversed variant of [`generate_for_root`](Self::generate_for_root)
    pub fn generate_reversed_for_root<S>(
        &self,
        store: &S,
        serial_property: &str,
        index: u32,
    ) -> MacAddress
    where
        S: ConfigPropertyStore + ?Sized,
    {
        self.generate_for_root(store, serial_property, index)
            .reversed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
