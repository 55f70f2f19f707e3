//! Error types for FAT32 boot-metadata operations

use core::fmt;

/// Result type for FAT32 boot-metadata operations
pub type Result<T> = core::result::Result<T, Fat32Error>;

/// Errors that can occur while reading or writing boot metadata
///
/// Every failure is a per-call value; nothing in this crate keeps global
/// error state or terminates the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fat32Error {
    /// I/O error reading or writing the block device
    ///
    /// Covers short transfers as well: a sector that could not be moved
    /// in full is an error, never a silently truncated buffer.
    IoError,

    /// Partition index outside the four MBR table slots (0-3)
    InvalidPartitionIndex,

    /// FSInfo sector signature fields do not match the FAT32 constants
    InvalidFsInfo,

    /// Device path does not start with `/dev/` (or `\dev/`)
    UnsupportedDevicePath,

    /// Device path has no `:` separator before the volume name
    MissingVolumeSeparator,
}

impl fmt::Display for Fat32Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError => write!(f, "I/O error on backing block device"),
            Self::InvalidPartitionIndex => write!(f, "partition index outside 0-3"),
            Self::InvalidFsInfo => write!(f, "FSInfo sector signature mismatch"),
            Self::UnsupportedDevicePath => write!(f, "unsupported device path"),
            Self::MissingVolumeSeparator => write!(f, "missing ':' separator in device path"),
        }
    }
}
