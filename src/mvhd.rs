use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{Error, Result};

/// The movie header fields needed to compute a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mvhd {
    pub version: u8,
    /// Time units per second.
    pub timescale: u32,
    /// Presentation length in timescale units.
    pub duration: u64,
}

impl Mvhd {
    /// Decodes the movie header from a reader positioned immediately
    /// after the `mvhd` tag.
    ///
    /// Version 1 widens the creation time, modification time and
    /// duration fields from 4 to 8 bytes; any other version byte takes
    /// the version 0 layout.
    pub fn read_after_tag<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let version = reader.read_u8()?;

        // Skip 3 bytes of flags plus the creation and modification
        // times sitting in front of the timescale.
        if version == 1 {
            reader.seek(SeekFrom::Current(19))?;
        } else {
            reader.seek(SeekFrom::Current(11))?;
        }

        let timescale = reader.read_u32::<BigEndian>()?;
        if timescale == 0 {
            return Err(Error::ZeroTimescale);
        }

        let duration = if version == 1 {
            reader.read_u64::<BigEndian>()?
        } else {
            reader.read_u32::<BigEndian>()? as u64
        };

        Ok(Mvhd {
            version,
            timescale,
            duration,
        })
    }

    /// Duration in seconds, computed in double precision.
    pub fn duration_seconds(&self) -> f64 {
        self.duration as f64 / self.timescale as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Cursor;

    fn mvhd_payload(version: u8, timescale: u32, duration: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.write_u8(version).unwrap();
        buf.extend_from_slice(&[0u8; 3]); // flags
        if version == 1 {
            buf.write_u64::<BigEndian>(100).unwrap(); // creation time
            buf.write_u64::<BigEndian>(200).unwrap(); // modification time
            buf.write_u32::<BigEndian>(timescale).unwrap();
            buf.write_u64::<BigEndian>(duration).unwrap();
        } else {
            buf.write_u32::<BigEndian>(100).unwrap();
            buf.write_u32::<BigEndian>(200).unwrap();
            buf.write_u32::<BigEndian>(timescale).unwrap();
            buf.write_u32::<BigEndian>(duration as u32).unwrap();
        }
        buf
    }

    #[test]
    fn test_mvhd32() {
        let buf = mvhd_payload(0, 1000, 62);
        let mvhd = Mvhd::read_after_tag(&mut Cursor::new(buf)).unwrap();
        assert_eq!(mvhd.version, 0);
        assert_eq!(mvhd.timescale, 1000);
        assert_eq!(mvhd.duration, 62);
        assert_eq!(mvhd.duration_seconds(), 0.062);
    }

    #[test]
    fn test_mvhd64() {
        let buf = mvhd_payload(1, 90000, 450000);
        let mvhd = Mvhd::read_after_tag(&mut Cursor::new(buf)).unwrap();
        assert_eq!(mvhd.version, 1);
        assert_eq!(mvhd.timescale, 90000);
        assert_eq!(mvhd.duration, 450000);
        assert_eq!(mvhd.duration_seconds(), 5.0);
    }

    #[test]
    fn test_mvhd64_wide_duration() {
        let duration = 1u64 << 33;
        let buf = mvhd_payload(1, 600, duration);
        let mvhd = Mvhd::read_after_tag(&mut Cursor::new(buf)).unwrap();
        assert_eq!(mvhd.duration, duration);
    }

    #[test]
    fn test_zero_timescale() {
        let buf = mvhd_payload(0, 0, 1800);
        let err = Mvhd::read_after_tag(&mut Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, Error::ZeroTimescale));
        assert_eq!(err.to_string(), "mvhd timescale is zero");
    }

    #[test]
    fn test_short_read_is_io_error() {
        // version byte plus flags only
        let buf = vec![0u8; 4];
        let err = Mvhd::read_after_tag(&mut Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
