use std::io::{Read, Seek, SeekFrom};

use crate::Result;

// "ftypisom" for ISO base media file MPEG-4, MP4
const MAGIC_ISOM: [u8; 8] = *b"ftypisom";
// "ftypmp42" for QuickTime MPEG-4, M4V
const MAGIC_MP42: [u8; 8] = *b"ftypmp42";

/// Checks whether the reader carries a recognized MP4 signature.
///
/// The `ftyp` tag and major brand live at byte offset 4, right after
/// the box size field. A seek or short read here is an I/O error,
/// distinct from the `Ok(false)` "not an MP4" result.
pub fn has_mp4_magic<R: Read + Seek>(reader: &mut R) -> Result<bool> {
    reader.seek(SeekFrom::Start(4))?;

    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;

    Ok(magic == MAGIC_ISOM || magic == MAGIC_MP42)
}
