use crate::common::MemoryBlockDevice;

/// Builds raw disk images byte by byte, independent of the library's
/// encoders, so decoders are checked against hand-placed fields.
pub struct DiskBuilder {
    num_sectors: usize,
    entries: Vec<(usize, u8, u8, u32, u32)>,
    vbrs: Vec<(usize, u32, u32)>,
    fsinfos: Vec<(usize, u32, u32)>,
}

impl DiskBuilder {
    pub fn new(num_sectors: usize) -> Self {
        Self {
            num_sectors,
            entries: Vec::new(),
            vbrs: Vec::new(),
            fsinfos: Vec::new(),
        }
    }

    /// Fill one partition table slot: (status, type, start LBA, length)
    pub fn partition(&mut self, slot: usize, status: u8, ptype: u8, start: u32, length: u32) {
        self.entries.push((slot, status, ptype, start, length));
    }

    /// Place VBR geometry fields at the given sector, choosing the 16-bit
    /// or 32-bit sector-count field the way a formatter would
    pub fn vbr_geometry(&mut self, lba: usize, hidden: u32, total: u32) {
        self.vbrs.push((lba, hidden, total));
    }

    /// Place a signature-valid FSInfo sector at the given sector
    pub fn fsinfo(&mut self, lba: usize, free: u32, next: u32) {
        self.fsinfos.push((lba, free, next));
    }

    pub fn build(self) -> MemoryBlockDevice {
        let mut data = vec![0u8; self.num_sectors * 512];

        // Partition table at 446, 16 bytes per slot, CHS fields zero
        for &(slot, status, ptype, start, length) in &self.entries {
            let base = 446 + 16 * slot;
            data[base] = status;
            data[base + 4] = ptype;
            data[base + 8..base + 12].copy_from_slice(&start.to_le_bytes());
            data[base + 12..base + 16].copy_from_slice(&length.to_le_bytes());
        }

        // Boot signature
        data[510] = 0x55;
        data[511] = 0xAA;

        for &(lba, hidden, total) in &self.vbrs {
            let base = lba * 512;
            data[base + 0x1C..base + 0x20].copy_from_slice(&hidden.to_le_bytes());
            if total > 0xFFFF {
                data[base + 0x20..base + 0x24].copy_from_slice(&total.to_le_bytes());
            } else {
                data[base + 0x13..base + 0x15].copy_from_slice(&(total as u16).to_le_bytes());
            }
        }

        for &(lba, free, next) in &self.fsinfos {
            let base = lba * 512;
            data[base..base + 4].copy_from_slice(&0x41615252u32.to_le_bytes());
            data[base + 0x1E4..base + 0x1E8].copy_from_slice(&0x61417272u32.to_le_bytes());
            data[base + 0x1E8..base + 0x1EC].copy_from_slice(&free.to_le_bytes());
            data[base + 0x1EC..base + 0x1F0].copy_from_slice(&next.to_le_bytes());
            data[base + 0x1FC..base + 0x200].copy_from_slice(&0xAA550000u32.to_le_bytes());
        }

        MemoryBlockDevice::new(data)
    }
}
