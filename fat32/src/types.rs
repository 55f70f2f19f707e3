//! Common types and constants for FAT32 boot metadata

/// FAT32 sector size (always 512 bytes)
pub const SECTOR_SIZE: usize = 512;

/// LBA of the Master Boot Record within an image
pub const MBR_LBA: u64 = 0;

/// Number of entries in the MBR partition table
pub const MAX_PARTITIONS: usize = 4;

/// Logical view of one MBR partition table entry
///
/// The CHS fields of the on-disk record are legacy, zero-filled on write
/// and not modeled here; LBA addressing is the only supported scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionEntry {
    /// Status byte (0x80 = active/bootable)
    pub status: u8,

    /// Partition type byte (0x0C = FAT32 with LBA addressing)
    pub partition_type: u8,

    /// First sector of the partition (LBA)
    pub start_lba: u32,

    /// Partition length in sectors
    pub length_sectors: u32,
}

impl PartitionEntry {
    /// Status byte marking a partition active/bootable
    pub const ACTIVE: u8 = 0x80;

    /// Partition type byte for FAT32 with LBA addressing
    pub const TYPE_FAT32_LBA: u8 = 0x0C;

    /// Is this partition marked active/bootable?
    pub fn is_active(&self) -> bool {
        self.status == Self::ACTIVE
    }

    /// Is this a FAT32 partition using LBA addressing?
    pub fn is_fat32_lba(&self) -> bool {
        self.partition_type == Self::TYPE_FAT32_LBA
    }
}

/// Logical view of the VBR geometry fields
///
/// On disk the sector count lives in exactly one of two fields: a 16-bit
/// count at 0x13 for volumes of at most 0xFFFF sectors, otherwise zero
/// there and the true count in the 32-bit field at 0x20. This struct
/// carries the resolved value; the split is an encoding detail of
/// [`crate::vbr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VbrGeometry {
    /// Sectors preceding the partition (the partition's start LBA)
    pub hidden_sectors: u32,

    /// Total sectors in the volume
    pub total_sectors: u32,
}

/// FSInfo bookkeeping fields
///
/// Both fields use [`FsInfo::UNKNOWN`] as a sentinel: an unknown free
/// count, and "search from the start" for the next-free hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsInfo {
    /// Last known free cluster count
    pub free_count: u32,

    /// Cluster number the allocator should search from
    pub next_free: u32,
}

impl FsInfo {
    /// Sentinel value: field is unknown / unset
    pub const UNKNOWN: u32 = 0xFFFF_FFFF;
}
