//! MBR partition table access
//!
//! The partition table lives at byte 446 of sector 0: four 16-byte
//! entries, followed by the two boot-signature bytes.

use crate::error::{Fat32Error, Result};
use crate::sector::Sector;
use crate::types::{PartitionEntry, MAX_PARTITIONS};

/// Byte offset of the partition table within the MBR sector
pub const TABLE_OFFSET: usize = 446;

/// Size of one partition table entry
pub const ENTRY_SIZE: usize = 16;

// Entry-relative field offsets
const STATUS: usize = 0;
const PARTITION_TYPE: usize = 4;
const START_LBA: usize = 8;
const LENGTH_SECTORS: usize = 12;

fn entry_offset(index: usize) -> Result<usize> {
    if index >= MAX_PARTITIONS {
        return Err(Fat32Error::InvalidPartitionIndex);
    }
    Ok(TABLE_OFFSET + ENTRY_SIZE * index)
}

/// Decode the partition table entry at `index` (0-3)
///
/// The entry's start LBA and length resolve a partition's geometry for
/// everything above this layer. Indices outside the table are rejected:
/// decoding past entry 3 would read the boot-signature bytes as geometry.
pub fn partition_entry(mbr: &Sector, index: usize) -> Result<PartitionEntry> {
    let offset = entry_offset(index)?;
    let bytes = mbr.as_bytes();
    Ok(PartitionEntry {
        status: bytes[offset + STATUS],
        partition_type: bytes[offset + PARTITION_TYPE],
        start_lba: mbr.u32_at(offset + START_LBA),
        length_sectors: mbr.u32_at(offset + LENGTH_SECTORS),
    })
}

/// Write the first partition table entry
///
/// Lays out a single active FAT32-LBA partition: status 0x80, type 0x0C,
/// zero-filled CHS fields, little-endian start and length. Only entry 0
/// is supported for writing.
pub fn write_partition_entry(mbr: &mut Sector, start_lba: u32, length_sectors: u32) {
    let offset = TABLE_OFFSET;
    let bytes = mbr.as_bytes_mut();
    bytes[offset + STATUS] = PartitionEntry::ACTIVE;
    bytes[offset + PARTITION_TYPE] = PartitionEntry::TYPE_FAT32_LBA;
    // CHS start/end are legacy; LBA-addressed consumers expect zeros
    bytes[offset + 1..offset + 4].fill(0);
    bytes[offset + 5..offset + 8].fill(0);
    mbr.set_u32_at(offset + START_LBA, start_lba);
    mbr.set_u32_at(offset + LENGTH_SECTORS, length_sectors);
}
