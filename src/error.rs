use thiserror::Error;

use crate::FourCC;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("file size too small, {0} bytes")]
    FileTooSmall(u64),
    #[error("MP4 file format not valid")]
    UnrecognizedFormat,
    #[error("{0} not found")]
    BoxNotFound(FourCC),
    #[error("mvhd timescale is zero")]
    ZeroTimescale,
}
