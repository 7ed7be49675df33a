//! Error types for MAC address and PHY mode resolution
//!
//! Errors are organized by domain for better diagnostics:
//! - [`PhyModeError`]: PHY mode lookup failures
//! - [`NvmemError`]: Failures reported by a non-volatile memory backend
//! - [`MacError`]: MAC address resolution failures
//!
//! The unified [`Error`] enum wraps the resolver domains.
//!
//! Absence of an individual configuration source is never an error. Only
//! exhaustion of every source, or a backend failure a caller may want to
//! retry, is reported.

// =============================================================================
// PHY Mode Errors
// =============================================================================

/// PHY mode lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyModeError {
    /// Neither the primary nor the legacy mode property is present
    MissingConfig,
    /// A mode name is present but matches no known interface mode
    UnknownMode,
}

impl core::fmt::Display for PhyModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PhyModeError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PhyModeError::MissingConfig => "no phy mode configured",
            PhyModeError::UnknownMode => "unknown phy mode",
        }
    }
}

// =============================================================================
// NVMEM Errors
// =============================================================================

/// Errors reported by an [`NvmemCellStore`](crate::hal::NvmemCellStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NvmemError {
    /// The requested cell does not exist on this device
    CellNotFound,
    /// Bus or device I/O failure
    Io,
    /// The backend did not answer in time
    Timeout,
    /// The backend is in use by another caller
    Busy,
    /// The cell exists but its size or content is unusable
    InvalidCell,
    /// The backend could not allocate storage for the cell value
    OutOfMemory,
}

impl core::fmt::Display for NvmemError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NvmemError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NvmemError::CellNotFound => "nvmem cell not found",
            NvmemError::Io => "nvmem I/O error",
            NvmemError::Timeout => "nvmem timed out",
            NvmemError::Busy => "nvmem busy",
            NvmemError::InvalidCell => "invalid nvmem cell",
            NvmemError::OutOfMemory => "nvmem out of memory",
        }
    }

    /// Whether this error means "there is no address here" rather than
    /// "the backend failed"
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, NvmemError::CellNotFound | NvmemError::InvalidCell)
    }
}

// =============================================================================
// MAC Resolution Errors
// =============================================================================

/// MAC address resolution errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacError {
    /// Every source missed or failed validation. Definitive, do not retry.
    NoAddressFound,
    /// The device has no owning platform entity to read nvmem through
    NoOwner,
    /// The nvmem backend failed
    Nvmem(NvmemError),
    /// The memory-owning collaborator could not allocate the address buffer
    AllocationFailure,
}

impl core::fmt::Display for MacError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MacError::Nvmem(e) => write!(f, "nvmem: {}", e.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl MacError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MacError::NoAddressFound => "no valid MAC address found",
            MacError::NoOwner => "device has no owner",
            MacError::Nvmem(_) => "nvmem error",
            MacError::AllocationFailure => "allocation failure",
        }
    }

    /// Whether retrying the resolution may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            MacError::Nvmem(NvmemError::Io | NvmemError::Timeout | NvmemError::Busy)
                | MacError::AllocationFailure
        )
    }
}

impl From<NvmemError> for MacError {
    fn from(e: NvmemError) -> Self {
        match e {
            NvmemError::OutOfMemory => MacError::AllocationFailure,
            other => MacError::Nvmem(other),
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all resolver errors for unified error handling.
///
/// ```ignore
/// match result {
///     Err(Error::PhyMode(PhyModeError::UnknownMode)) => { /* ... */ }
///     Err(Error::Mac(MacError::NoAddressFound)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// PHY mode error
    PhyMode(PhyModeError),
    /// MAC address error
    Mac(MacError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::PhyMode(e) => write!(f, "phy mode: {e}"),
            Error::Mac(e) => write!(f, "mac: {e}"),
        }
    }
}

impl From<PhyModeError> for Error {
    fn from(e: PhyModeError) -> Self {
        Error::PhyMode(e)
    }
}

impl From<MacError> for Error {
    fn from(e: MacError) -> Self {
        Error::Mac(e)
    }
}

impl From<NvmemError> for Error {
    fn from(e: NvmemError) -> Self {
        Error::Mac(e.into())
    }
}

/// Result type alias for resolver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for PHY mode operations
pub type PhyModeResult<T> = core::result::Result<T, PhyModeError>;

/// Result type alias for nvmem backend operations
pub type NvmemResult<T> = core::result::Result<T, NvmemError>;

/// Result type alias for MAC address operations
pub type MacResult<T> = core::result::Result<T, MacError>;

// =============================================================================
// Unit Tests
// =============================================================================
