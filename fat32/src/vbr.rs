//! VBR geometry fields
//!
//! Only the BIOS Parameter Block fields this core owns are touched:
//! hidden-sector count and the dual-width sector count. Everything else
//! in the boot sector is preserved as found.

use crate::sector::Sector;
use crate::types::VbrGeometry;

/// Byte offset of the 16-bit sector count (volumes <= 0xFFFF sectors)
pub const TOTAL_SECTORS_16_OFFSET: usize = 0x13;

/// Byte offset of the hidden-sector count
pub const HIDDEN_SECTORS_OFFSET: usize = 0x1C;

/// Byte offset of the 32-bit sector count
pub const TOTAL_SECTORS_32_OFFSET: usize = 0x20;

/// Write hidden-sector count and sector count into a VBR sector
///
/// The sector count is stored in exactly one of its two fields: the
/// 16-bit field when `total_sectors` fits in it, otherwise zero there and
/// the true count in the 32-bit field. The other field is always zeroed
/// so a stale value cannot shadow the live one.
pub fn write_geometry(vbr: &mut Sector, hidden_sectors: u32, total_sectors: u32) {
    vbr.set_u32_at(HIDDEN_SECTORS_OFFSET, hidden_sectors);
    if total_sectors > 0xFFFF {
        vbr.set_u16_at(TOTAL_SECTORS_16_OFFSET, 0);
        vbr.set_u32_at(TOTAL_SECTORS_32_OFFSET, total_sectors);
    } else {
        vbr.set_u16_at(TOTAL_SECTORS_16_OFFSET, total_sectors as u16);
        vbr.set_u32_at(TOTAL_SECTORS_32_OFFSET, 0);
    }
}

/// Read the geometry fields back out of a VBR sector
///
/// Resolves the sector count with the standard fallback: the 16-bit
/// field when non-zero, else the 32-bit field.
pub fn geometry(vbr: &Sector) -> VbrGeometry {
    let total_16 = vbr.u16_at(TOTAL_SECTORS_16_OFFSET);
    let total_sectors = if total_16 != 0 {
        total_16 as u32
    } else {
        vbr.u32_at(TOTAL_SECTORS_32_OFFSET)
    };
    VbrGeometry {
        hidden_sectors: vbr.u32_at(HIDDEN_SECTORS_OFFSET),
        total_sectors,
    }
}
