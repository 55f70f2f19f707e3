//! File-backed block device
//!
//! Adapts a raw disk image file to [`gpt_disk_io::BlockIo`]. The handle is
//! opened once and held for the whole operation, so a multi-sector format
//! sequence never reopens the file between writes.

use fat32::SECTOR_SIZE;
use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Raw disk image exposed as a 512-byte-sectored block device
#[derive(Debug)]
pub struct ImageBlockIo {
    file: File,
    num_blocks: u64,
}

impl ImageBlockIo {
    /// Open an image file in read-write mode
    ///
    /// A failed open is an ordinary error for the caller to report, not a
    /// reason to terminate the process. A trailing partial sector of the
    /// file is not addressable.
    pub fn open(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let num_blocks = file.metadata()?.len() / SECTOR_SIZE as u64;
        Ok(Self { file, num_blocks })
    }
}

impl BlockIo for ImageBlockIo {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::BS_512
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok(self.num_blocks)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.block_size().assert_valid_block_buffer(dst);

        let offset = start_lba.to_u64() * SECTOR_SIZE as u64;
        if offset + dst.len() as u64 > self.num_blocks * SECTOR_SIZE as u64 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read past end of image",
            ));
        }
        self.file.seek(SeekFrom::Start(offset))?;
        // read_exact: a short read is an error, never a truncated buffer
        self.file.read_exact(dst)
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        self.block_size().assert_valid_block_buffer(src);

        let offset = start_lba.to_u64() * SECTOR_SIZE as u64;
        if offset + src.len() as u64 > self.num_blocks * SECTOR_SIZE as u64 {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "write past end of image",
            ));
        }
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(src)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.file.sync_all()
    }
}
