use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

mod error;
pub use error::Error;

mod magic;
pub use magic::has_mp4_magic;

mod scan;
pub use scan::find_after_tag;

mod mvhd;
pub use mvhd::Mvhd;

pub type Result<T> = std::result::Result<T, Error>;

/// Tag of the movie header box.
pub const MVHD: FourCC = FourCC(*b"mvhd");

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FourCC(pub [u8; 4]);

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Tunables for one parse invocation. The defaults match the sizes a
/// well-formed MP4 is searched with; tests shrink `block_size` to
/// exercise block boundaries on tiny synthetic files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Bytes read from the file at once while searching for a tag.
    pub block_size: usize,
    /// Smallest file size that could hold an MP4 header at all.
    pub min_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            block_size: 16384,
            min_file_size: 51,
        }
    }
}

/// Reads the movie header of an MP4 of `size` total bytes.
///
/// Checks the file size and the `ftyp` signature, scans for the `mvhd`
/// tag, and decodes the timescale and duration fields.
pub fn read_duration<R: Read + Seek>(reader: &mut R, size: u64) -> Result<Mvhd> {
    read_duration_with_config(reader, size, &ScanConfig::default())
}

pub fn read_duration_with_config<R: Read + Seek>(
    reader: &mut R,
    size: u64,
    config: &ScanConfig,
) -> Result<Mvhd> {
    if size < config.min_file_size {
        return Err(Error::FileTooSmall(size));
    }
    if !magic::has_mp4_magic(reader)? {
        return Err(Error::UnrecognizedFormat);
    }
    scan::find_after_tag(reader, size, MVHD, config.block_size)?;
    Mvhd::read_after_tag(reader)
}

/// Convenience entry: opens `path` and reads its movie header.
pub fn read_duration_from_path<P: AsRef<Path>>(path: P) -> Result<Mvhd> {
    let f = File::open(path)?;
    let size = f.metadata()?.len();
    let mut reader = BufReader::new(f);
    read_duration(&mut reader, size)
}
