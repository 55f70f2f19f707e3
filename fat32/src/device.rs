//! Device path parsing
//!
//! Operations address a volume as `/dev/<image-path>:<volume-name>`, where
//! the image path is the backing file on the host and the volume name labels
//! the FAT32 volume inside it. A backslash is accepted in place of the
//! leading slash for paths originating on DOS-style hosts.

use crate::error::{Fat32Error, Result};

/// Parsed form of a `/dev/<image-path>:<volume-name>` device path.
///
/// Both fields borrow from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicePath<'a> {
    /// Host path of the backing image file.
    pub image_path: &'a str,

    /// Volume name following the separator. May be empty.
    pub volume_name: &'a str,
}

impl<'a> DevicePath<'a> {
    /// Parse a device path.
    ///
    /// The path must start with `/dev/` (or `\dev/`) and contain a `:`
    /// separating the image path from the volume name. Anything after the
    /// first `:` is the volume name.
    ///
    /// # Errors
    ///
    /// [`Fat32Error::UnsupportedDevicePath`] if the prefix is wrong,
    /// [`Fat32Error::MissingVolumeSeparator`] if there is no `:`.
    pub fn parse(path: &'a str) -> Result<Self> {
        let rest = path
            .strip_prefix('/')
            .or_else(|| path.strip_prefix('\\'))
            .and_then(|p| p.strip_prefix("dev/"))
            .ok_or(Fat32Error::UnsupportedDevicePath)?;

        let (image_path, volume_name) = rest
            .split_once(':')
            .ok_or(Fat32Error::MissingVolumeSeparator)?;

        Ok(Self {
            image_path,
            volume_name,
        })
    }
}
