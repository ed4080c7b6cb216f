//! Fixed-width big-endian integer codec.
//!
//! Every persisted multi-byte value in the index files is stored
//! most-significant byte first, whatever the host byte order. All reads and
//! writes of such values go through this module. A short read is reported as
//! [`StemdexError::CorruptIndex`]: the file declared more data than it holds.

use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Result, StemdexError};

/// Byte order of every integer and float in the index files.
pub type DiskOrder = BigEndian;

/// Size in bytes of an encoded 32-bit value.
pub const U32_SIZE: u64 = 4;

/// Size in bytes of an encoded 64-bit value.
pub const U64_SIZE: u64 = 8;

fn truncated(err: io::Error, width: u64) -> StemdexError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        StemdexError::corrupt(format!("unexpected end of data reading a {width}-byte value"))
    } else {
        StemdexError::Io(err)
    }
}

/// Read a big-endian `u32`.
pub fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    reader
        .read_u32::<DiskOrder>()
        .map_err(|e| truncated(e, U32_SIZE))
}

/// Read a big-endian `i32`.
pub fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    reader
        .read_i32::<DiskOrder>()
        .map_err(|e| truncated(e, U32_SIZE))
}

/// Read a big-endian `u64`.
pub fn read_u64<R: Read>(reader: &mut R) -> Result<u64> {
    reader
        .read_u64::<DiskOrder>()
        .map_err(|e| truncated(e, U64_SIZE))
}

/// Read a big-endian `i64`.
pub fn read_i64<R: Read>(reader: &mut R) -> Result<i64> {
    reader
        .read_i64::<DiskOrder>()
        .map_err(|e| truncated(e, U64_SIZE))
}

/// Read a big-endian IEEE-754 `f64`.
pub fn read_f64<R: Read>(reader: &mut R) -> Result<f64> {
    reader
        .read_f64::<DiskOrder>()
        .map_err(|e| truncated(e, U64_SIZE))
}

/// Position the stream at an absolute offset.
pub fn seek_to<R: Seek>(reader: &mut R, offset: u64) -> Result<()> {
    reader.seek(SeekFrom::Start(offset))?;
    Ok(())
}

/// Read a big-endian `u32` located at `offset`.
pub fn read_u32_at<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<u32> {
    seek_to(reader, offset)?;
    read_u32(reader)
}

/// Read a big-endian `u64` located at `offset`.
pub fn read_u64_at<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<u64> {
    seek_to(reader, offset)?;
    read_u64(reader)
}

/// Fill `buffer` with raw bytes from the current position.
pub fn read_exact_into<R: Read>(reader: &mut R, buffer: &mut [u8]) -> Result<()> {
    reader.read_exact(buffer).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            StemdexError::corrupt(format!(
                "unexpected end of data reading {} raw bytes",
                buffer.len()
            ))
        } else {
            StemdexError::Io(e)
        }
    })
}

/// Read exactly `len` raw bytes from the current position.
pub fn read_bytes<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; len];
    read_exact_into(reader, &mut buffer)?;
    Ok(buffer)
}

/// Read exactly `len` raw bytes starting at `offset`.
pub fn read_bytes_at<R: Read + Seek>(reader: &mut R, offset: u64, len: usize) -> Result<Vec<u8>> {
    seek_to(reader, offset)?;
    read_bytes(reader, len)
}

/// Consume `len` bytes without keeping them.
///
/// The bytes are read, not seeked over, so the stream ends up exactly where a
/// sequential decoder expects it.
pub fn skip_bytes<R: Read>(reader: &mut R, len: u64) -> Result<()> {
    let consumed = io::copy(&mut reader.by_ref().take(len), &mut io::sink())?;
    if consumed < len {
        return Err(StemdexError::corrupt(format!(
            "unexpected end of data skipping {len} bytes ({consumed} available)"
        )));
    }
    Ok(())
}

/// Write a big-endian `u32`.
pub fn write_u32<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    writer.write_u32::<DiskOrder>(value)?;
    Ok(())
}

/// Write a big-endian `u64`.
pub fn write_u64<W: Write>(writer: &mut W, value: u64) -> Result<()> {
    writer.write_u64::<DiskOrder>(value)?;
    Ok(())
}

/// Write a big-endian IEEE-754 `f64`.
pub fn write_f64<W: Write>(writer: &mut W, value: f64) -> Result<()> {
    writer.write_f64::<DiskOrder>(value)?;
    Ok(())
}
