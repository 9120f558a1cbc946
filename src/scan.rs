use std::cmp;
use std::io::{Read, Seek, SeekFrom};

use crate::{Error, FourCC, Result};

/// Finds an occurrence of `tag` in a reader of `size` total bytes and
/// returns the offset just past it, leaving the reader positioned
/// there. The first hit in visiting order wins.
///
/// The file is covered by non-overlapping `block_size` byte blocks and
/// the blocks are visited alternately from the front and back of the
/// file, working inwards. A movie header sits near one end of a
/// well-formed file, so this touches far fewer bytes than a forward
/// scan on large files.
pub fn find_after_tag<R: Read + Seek>(
    reader: &mut R,
    size: u64,
    tag: FourCC,
    block_size: usize,
) -> Result<u64> {
    let hdr = tag.0;
    let block_len = block_size as u64;
    let n_blocks = (size + block_len - 1) / block_len;
    let mut buf = vec![0u8; block_size];

    for xx in 0..n_blocks {
        // Even iterations take the next block at the beginning of the
        // file, odd iterations the next one at the end.
        let ii = if xx % 2 == 1 {
            n_blocks - 1 - (xx - 1) / 2
        } else {
            xx / 2
        };
        let start = ii * block_len;
        // Only the final block of the file may fall short.
        let len = cmp::min(block_len, size - start) as usize;

        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(&mut buf[..len])?;

        // Streak of bytes matching the tag so far.
        let mut matching = 0;
        for jj in 0..len {
            if buf[jj] == hdr[matching] {
                matching += 1;
                if matching == 4 {
                    // Found it, park the reader right after the tag.
                    let pos = start + jj as u64 + 1;
                    reader.seek(SeekFrom::Start(pos))?;
                    return Ok(pos);
                }
            } else {
                // A broken streak can still open a new one.
                matching = if buf[jj] == hdr[0] { 1 } else { 0 };
            }
        }

        // A streak at the end of the block may flow into the bytes just
        // past it; the reader already sits there, so match on single
        // bytes until the tag completes or breaks.
        if matching > 0 {
            let mut byte = [0u8; 1];
            while matching != 4 {
                if reader.read(&mut byte)? == 0 {
                    // end of file
                    matching = 0;
                    break;
                }
                if byte[0] == hdr[matching] {
                    matching += 1;
                } else {
                    // Abandon the straddle; these bytes open the
                    // neighboring block, which gets its own pass.
                    matching = 0;
                    break;
                }
            }
            if matching == 4 {
                let pos = reader.seek(SeekFrom::Current(0))?;
                return Ok(pos);
            }
        }
        // no match, try next block
    }

    Err(Error::BoxNotFound(tag))
}
