//! Fixed-size sector buffer with little-endian field access
//!
//! Every on-disk structure in this crate is decoded from or encoded into a
//! [`Sector`]: a typed view over exactly 512 bytes with explicit
//! offset+width accessors. Structure modules never walk raw pointers.

use crate::error::{Fat32Error, Result};
use crate::types::SECTOR_SIZE;
use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;

/// One 512-byte disk sector
///
/// Offsets are byte positions within the sector; callers guarantee
/// `offset + width <= 512` (a violation is a programming error and panics
/// like any out-of-bounds index). The accessors are pure and perform no
/// I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    data: [u8; SECTOR_SIZE],
}

impl Sector {
    /// Create a zero-filled sector
    pub fn zeroed() -> Self {
        Self {
            data: [0u8; SECTOR_SIZE],
        }
    }

    /// Create a sector from raw bytes
    pub fn from_bytes(data: [u8; SECTOR_SIZE]) -> Self {
        Self { data }
    }

    /// Raw sector contents
    pub fn as_bytes(&self) -> &[u8; SECTOR_SIZE] {
        &self.data
    }

    /// Mutable raw sector contents
    pub fn as_bytes_mut(&mut self) -> &mut [u8; SECTOR_SIZE] {
        &mut self.data
    }

    /// Decode a 16-bit little-endian field at `offset`
    pub fn u16_at(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.data[offset], self.data[offset + 1]])
    }

    /// Decode a 32-bit little-endian field at `offset`
    pub fn u32_at(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ])
    }

    /// Encode a 16-bit little-endian field at `offset`
    pub fn set_u16_at(&mut self, offset: usize, value: u16) {
        self.data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    /// Encode a 32-bit little-endian field at `offset`
    pub fn set_u32_at(&mut self, offset: usize, value: u32) {
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }
}

impl Default for Sector {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Read one sector at `lba` from a block device
///
/// The device must expose 512-byte blocks; exactly one sector is
/// transferred per call.
pub fn read_sector<B: BlockIo>(block_io: &mut B, lba: u64) -> Result<Sector> {
    let mut sector = Sector::zeroed();
    block_io
        .read_blocks(Lba(lba), sector.as_bytes_mut())
        .map_err(|_| Fat32Error::IoError)?;
    Ok(sector)
}

/// Write one sector at `lba` to a block device
pub fn write_sector<B: BlockIo>(block_io: &mut B, lba: u64, sector: &Sector) -> Result<()> {
    block_io
        .write_blocks(Lba(lba), sector.as_bytes())
        .map_err(|_| Fat32Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_round_trip_exhaustive() {
        let mut sector = Sector::zeroed();
        for v in 0..=u16::MAX {
            sector.set_u16_at(19, v);
            assert_eq!(sector.u16_at(19), v);
        }
    }

    #[test]
    fn test_u32_round_trip() {
        let values = [0u32, 1, 0xFFFF, 0x10000, 0xDEAD_BEEF, u32::MAX];
        let offsets = [0usize, 1, 0x1C, SECTOR_SIZE - 4];
        let mut sector = Sector::zeroed();
        for &offset in &offsets {
            for &v in &values {
                sector.set_u32_at(offset, v);
                assert_eq!(sector.u32_at(offset), v);
            }
        }
    }

    #[test]
    fn test_little_endian_byte_order() {
        let mut sector = Sector::zeroed();
        sector.set_u32_at(4, 0x1122_3344);
        assert_eq!(&sector.as_bytes()[4..8], &[0x44, 0x33, 0x22, 0x11]);

        sector.set_u16_at(0, 0xAABB);
        assert_eq!(&sector.as_bytes()[0..2], &[0xBB, 0xAA]);
    }

    #[test]
    fn test_adjacent_fields_do_not_overlap() {
        let mut sector = Sector::zeroed();
        sector.set_u16_at(0, 0xFFFF);
        sector.set_u16_at(2, 0x0102);
        assert_eq!(sector.u16_at(0), 0xFFFF);
        assert_eq!(sector.u16_at(2), 0x0102);
        assert_eq!(sector.as_bytes()[4], 0);
    }

    #[test]
    fn test_fields_at_sector_end() {
        let mut sector = Sector::zeroed();
        sector.set_u16_at(SECTOR_SIZE - 2, 0xAA55);
        sector.set_u32_at(SECTOR_SIZE - 6, 0x0055_AA00);
        assert_eq!(sector.u16_at(SECTOR_SIZE - 2), 0xAA55);
        assert_eq!(sector.u32_at(SECTOR_SIZE - 6), 0x0055_AA00);
    }
}
