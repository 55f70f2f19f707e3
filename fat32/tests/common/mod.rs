//! Shared test fixtures: an in-memory block device and a raw image builder

pub mod builder;
pub use builder::DiskBuilder;

use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};
use std::io;

/// In-memory block device for testing
#[derive(Debug, Clone)]
pub struct MemoryBlockDevice {
    pub data: Vec<u8>,
    pub block_size: usize,
}

impl MemoryBlockDevice {
    /// Create a new memory block device from raw data
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            block_size: 512, // FAT32 sector size
        }
    }

    /// Create a zero-filled device of the given sector count
    pub fn blank(num_sectors: usize) -> Self {
        Self::new(vec![0u8; num_sectors * 512])
    }

    /// Create a minimal partitioned image for testing: one active FAT32
    /// entry starting at sector 2048, boot signature in place, and enough
    /// trailing sectors to hold that partition's VBR and FSInfo.
    pub fn create_partitioned_image() -> Self {
        let mut data = vec![0u8; 2052 * 512];

        // Partition table entry 0 (table starts at byte 446)
        data[446] = 0x80; // status: active
        // CHS start (447-449) stays zero
        data[450] = 0x0C; // type: FAT32 with LBA
        // CHS end (451-453) stays zero
        data[454..458].copy_from_slice(&2048u32.to_le_bytes()); // start LBA
        data[458..462].copy_from_slice(&65536u32.to_le_bytes()); // length

        // Boot signature
        data[510] = 0x55;
        data[511] = 0xAA;

        Self::new(data)
    }

    /// Borrow one 512-byte sector of the raw image
    pub fn sector(&self, lba: usize) -> &[u8] {
        &self.data[lba * self.block_size..(lba + 1) * self.block_size]
    }
}

impl BlockIo for MemoryBlockDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size as u32).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok((self.data.len() / self.block_size) as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        let offset = start_lba.to_u64() as usize * self.block_size;
        if offset + dst.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read past end of image",
            ));
        }
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
        Ok(())
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        let offset = start_lba.to_u64() as usize * self.block_size;
        if offset + src.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "write past end of image",
            ));
        }
        self.data[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
