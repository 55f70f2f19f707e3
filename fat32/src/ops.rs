//! Volume operations
//!
//! Each operation loads the partition table from sector 0, resolves one
//! entry, and works on that partition's first two sectors (VBR, then
//! FSInfo). All I/O goes through a single borrowed [`BlockIo`] so a
//! multi-sector sequence runs over one device handle.

use alloc::format;
use alloc::string::String;

use gpt_disk_io::BlockIo;

use crate::error::{Fat32Error, Result};
use crate::sector::{read_sector, write_sector, Sector};
use crate::types::{FsInfo, PartitionEntry, VbrGeometry, MBR_LBA};
use crate::{fsinfo, mbr, vbr};

/// Options for [`format_partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Resolve and report the target geometry without writing any sector.
    ///
    /// Set by default; committing a format is opt-in.
    pub dry_run: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { dry_run: true }
    }
}

/// Outcome of [`format_partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatReport {
    /// Entry the operation resolved (normalized when it was rewritten).
    pub entry: PartitionEntry,

    /// Whether any sector was written.
    pub committed: bool,
}

/// Outcome of [`verify_partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    /// Partition entry decoded from the MBR.
    pub entry: PartitionEntry,

    /// Geometry decoded from the VBR.
    pub geometry: VbrGeometry,

    /// Bookkeeping fields from a signature-valid FSInfo sector.
    pub fs_info: FsInfo,
}

/// Format the boot metadata of one MBR partition.
///
/// Reads the partition table and resolves the entry at `index`. In dry-run
/// mode the partition's first sector is read back to confirm the geometry
/// is reachable and nothing is written. On commit the sequence runs in
/// order: the partition entry is rewritten in normalized form (first slot
/// only; other slots are left as found), the VBR geometry fields are
/// patched into the partition's first sector, and a fresh FSInfo sector is
/// written right after it. Hidden sectors take the partition's start LBA,
/// the sector count its length. The device is flushed once the sequence
/// completes.
pub fn format_partition<B: BlockIo>(
    block_io: &mut B,
    index: usize,
    options: FormatOptions,
) -> Result<FormatReport> {
    let mut mbr_sector = read_sector(block_io, MBR_LBA)?;
    let entry = mbr::partition_entry(&mbr_sector, index)?;
    let vbr_lba = u64::from(entry.start_lba);

    if options.dry_run {
        read_sector(block_io, vbr_lba)?;
        return Ok(FormatReport {
            entry,
            committed: false,
        });
    }

    if index == 0 {
        mbr::write_partition_entry(&mut mbr_sector, entry.start_lba, entry.length_sectors);
        write_sector(block_io, MBR_LBA, &mbr_sector)?;
    }
    let entry = mbr::partition_entry(&mbr_sector, index)?;

    let mut vbr_sector = read_sector(block_io, vbr_lba)?;
    vbr::write_geometry(&mut vbr_sector, entry.start_lba, entry.length_sectors);
    write_sector(block_io, vbr_lba, &vbr_sector)?;

    let mut fsinfo_sector = Sector::zeroed();
    fsinfo::write_fsinfo(&mut fsinfo_sector);
    write_sector(block_io, vbr_lba + 1, &fsinfo_sector)?;

    block_io.flush().map_err(|_| Fat32Error::IoError)?;

    Ok(FormatReport {
        entry,
        committed: true,
    })
}

/// Describe the first partition as human-readable text.
pub fn list_partition<B: BlockIo>(block_io: &mut B, volume_name: &str) -> Result<String> {
    let mbr_sector = read_sector(block_io, MBR_LBA)?;
    let entry = mbr::partition_entry(&mbr_sector, 0)?;
    Ok(format!(
        "{}: start {} length {}",
        volume_name, entry.start_lba, entry.length_sectors
    ))
}

/// Re-read a partition's boot metadata and validate it.
///
/// The FSInfo signatures must check out; geometry and bookkeeping fields
/// are returned as decoded.
pub fn verify_partition<B: BlockIo>(block_io: &mut B, index: usize) -> Result<VerifyReport> {
    let mbr_sector = read_sector(block_io, MBR_LBA)?;
    let entry = mbr::partition_entry(&mbr_sector, index)?;
    let vbr_lba = u64::from(entry.start_lba);

    let vbr_sector = read_sector(block_io, vbr_lba)?;
    let geometry = vbr::geometry(&vbr_sector);

    let fsinfo_sector = read_sector(block_io, vbr_lba + 1)?;
    let fs_info = fsinfo::validate(&fsinfo_sector)?;

    Ok(VerifyReport {
        entry,
        geometry,
        fs_info,
    })
}
