//! Diagnostic side channel
//!
//! Resolution never fails because of an anomaly it can work around (an
//! out-of-range serial number, a malformed property). Those anomalies are
//! reported here instead, as [`Diagnostic`] events delivered to a
//! [`DiagnosticSink`], so the return value keeps its meaning and tests can
//! still observe what happened.
//!
//! [`LogSink`] is the default sink. It forwards events to `defmt` and/or the
//! `log` facade depending on enabled features and drops them otherwise.

use core::fmt;

use crate::mac::{MacAddress, MacSource, RejectReason};

// =============================================================================
// Events
// =============================================================================

/// Event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    /// Tracing of normal decisions
    Debug,
    /// Noteworthy but expected
    Info,
    /// Recoverable anomaly
    Warn,
}

#[cfg(feature = "log")]
impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
        }
    }
}

/// A diagnostic event emitted during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// The serial number property is not an integer; 0 is used instead
    SerialUnparsable,
    /// The serial number is outside the configured range; 0 is used instead
    SerialOutOfRange {
        /// The rejected value
        serial: i64,
    },
    /// An address was synthesized from index and serial number
    MacGenerated {
        /// Interface index
        index: u32,
        /// The generated address
        address: MacAddress,
    },
    /// A source produced bytes that are not a usable address
    CandidateRejected {
        /// Where the bytes came from
        source: MacSource,
        /// Why they were rejected
        reason: RejectReason,
    },
    /// Resolution finished with an address
    AddressResolved {
        /// The winning source
        source: MacSource,
        /// The resolved address
        address: MacAddress,
    },
}

impl Diagnostic {
    /// Severity of this event
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Diagnostic::SerialUnparsable | Diagnostic::SerialOutOfRange { .. } => Severity::Warn,
            Diagnostic::MacGenerated { .. } => Severity::Info,
            Diagnostic::CandidateRejected { .. } | Diagnostic::AddressResolved { .. } => {
                Severity::Debug
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SerialUnparsable => f.write_str("serial number unparsable, using 0"),
            Diagnostic::SerialOutOfRange { serial } => {
                write!(f, "serial number {serial} out of range, using 0")
            }
            Diagnostic::MacGenerated { index, address } => {
                write!(f, "generated MAC {index} {address}")
            }
            Diagnostic::CandidateRejected { source, reason } => {
                write!(f, "rejected {source}: {reason}")
            }
            Diagnostic::AddressResolved { source, address } => {
                write!(f, "using {address} from {source}")
            }
        }
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiver for diagnostic events.
///
/// Implementations must not block; events are fire-and-forget.
pub trait DiagnosticSink {
    /// Deliver one event
    fn emit(&self, event: Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn emit(&self, event: Diagnostic) {
        (**self).emit(event);
    }
}

/// Forwards events to `defmt` and/or `log` when those features are enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, event: Diagnostic) {
        #[cfg(feature = "log")]
        log::log!(log::Level::from(event.severity()), "{event}");

        #[cfg(feature = "defmt")]
        {
            match event.severity() {
                Severity::Debug => defmt::debug!("{}", event),
                Severity::Info => defmt::info!("{}", event),
                Severity::Warn => defmt::warn!("{}", event),
            }
        }

        #[cfg(not(any(feature = "log", feature = "defmt")))]
        let _ = event;
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _event: Diagnostic) {}
}
