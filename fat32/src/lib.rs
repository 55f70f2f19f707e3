//! FAT32 Boot Metadata
//!
//! A `no_std` library for the boot-time on-disk structures of a FAT32
//! volume inside a raw disk image: the MBR partition table, the VBR BIOS
//! Parameter Block geometry fields, and the FSInfo sector. Field offsets,
//! byte ordering, and magic signatures follow the published format
//! exactly; everything past the reserved region (FAT chains, directory
//! entries, cluster data) is out of scope.
//!
//! # Architecture
//!
//! The implementation is layered:
//! 1. **Sector layer** - 512-byte buffers with little-endian field access,
//!    moved through any [`gpt_disk_io::BlockIo`]
//! 2. **Structure layer** - MBR, VBR, and FSInfo encode/decode at fixed
//!    offsets
//! 3. **Operation layer** - format, verify, and list over one device handle
//!
//! # Usage
//!
//! ```ignore
//! use fat32::{format_partition, FormatOptions};
//!
//! // Resolve partition 0 and report its geometry without writing
//! let report = format_partition(&mut block_io, 0, FormatOptions::default())?;
//!
//! // Write the MBR entry, VBR geometry, and FSInfo sector
//! let opts = FormatOptions { dry_run: false };
//! let report = format_partition(&mut block_io, 0, opts)?;
//! ```
//!
//! # Device Paths
//!
//! ```ignore
//! use fat32::DevicePath;
//!
//! let dev = DevicePath::parse("/dev/disk.img:MYVOL")?;
//! // dev.image_path == "disk.img", dev.volume_name == "MYVOL"
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod types;
pub mod sector;
pub mod mbr;
pub mod vbr;
pub mod fsinfo;
pub mod device;
pub mod ops;

pub use error::{Fat32Error, Result};
pub use types::{FsInfo, PartitionEntry, VbrGeometry, MAX_PARTITIONS, MBR_LBA, SECTOR_SIZE};

// High-level API exports
pub use device::DevicePath;
pub use ops::{format_partition, list_partition, verify_partition};
pub use ops::{FormatOptions, FormatReport, VerifyReport};
pub use sector::{read_sector, write_sector, Sector};
