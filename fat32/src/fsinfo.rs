//! FSInfo sector layout
//!
//! The FSInfo sector caches free-cluster bookkeeping between mounts. Its
//! three signature fields are format constants; a sector that fails the
//! signature check must be treated as carrying no information.

use crate::error::{Fat32Error, Result};
use crate::sector::Sector;
use crate::types::FsInfo;

/// Lead signature value ("RRaA")
pub const LEAD_SIGNATURE: u32 = 0x4161_5252;

/// Structure signature value ("rrAa")
pub const STRUC_SIGNATURE: u32 = 0x6141_7272;

/// Trail signature value
pub const TRAIL_SIGNATURE: u32 = 0xAA55_0000;

/// Byte offset of the lead signature
pub const LEAD_OFFSET: usize = 0x000;

/// Byte offset of the structure signature
pub const STRUC_OFFSET: usize = 0x1E4;

/// Byte offset of the free-cluster count
pub const FREE_COUNT_OFFSET: usize = 0x1E8;

/// Byte offset of the next-free-cluster hint
pub const NEXT_FREE_OFFSET: usize = 0x1EC;

/// Byte offset of the trail signature
pub const TRAIL_OFFSET: usize = 0x1FC;

/// Write a freshly initialized FSInfo sector
///
/// All five fields are constants for a new volume: the three signatures
/// plus the two bookkeeping fields at their "unknown" sentinel. The
/// caller provides the base sector, normally zero-filled — the reserved
/// areas of a fresh FSInfo sector are zero.
pub fn write_fsinfo(sector: &mut Sector) {
    sector.set_u32_at(LEAD_OFFSET, LEAD_SIGNATURE);
    sector.set_u32_at(STRUC_OFFSET, STRUC_SIGNATURE);
    sector.set_u32_at(FREE_COUNT_OFFSET, FsInfo::UNKNOWN);
    sector.set_u32_at(NEXT_FREE_OFFSET, FsInfo::UNKNOWN);
    sector.set_u32_at(TRAIL_OFFSET, TRAIL_SIGNATURE);
}

/// Validate the three signatures and decode the bookkeeping fields
pub fn validate(sector: &Sector) -> Result<FsInfo> {
    if sector.u32_at(LEAD_OFFSET) != LEAD_SIGNATURE
        || sector.u32_at(STRUC_OFFSET) != STRUC_SIGNATURE
        || sector.u32_at(TRAIL_OFFSET) != TRAIL_SIGNATURE
    {
        return Err(Fat32Error::InvalidFsInfo);
    }
    Ok(FsInfo {
        free_count: sector.u32_at(FREE_COUNT_OFFSET),
        next_free: sector.u32_at(NEXT_FREE_OFFSET),
    })
}
