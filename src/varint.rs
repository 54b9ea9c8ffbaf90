//! Zig-zag variable length integers, as used by the network encoding.
//!
//! A value is written 7 bits at a time, least significant group first, with
//! the high bit of each byte set when more bytes follow. Signed values are
//! zig-zag mapped first so that small negative numbers stay short.
//!
//! ```
//! use nbtcodec::varint;
//!
//! let mut buf = vec![];
//! varint::write_i32(&mut buf, -1).unwrap();
//! assert_eq!(buf, [0x01]);
//!
//! varint::write_u32(&mut buf, 300).unwrap();
//! assert_eq!(buf, [0x01, 0xAC, 0x02]);
//!
//! let mut input = &buf[..];
//! assert_eq!(varint::read_i32(&mut input).unwrap(), -1);
//! assert_eq!(varint::read_u32(&mut input).unwrap(), 300);
//! ```
use std::io::{Read, Write};

use byteorder::ReadBytesExt;

use crate::error::{Error, Result};

/// Longest encoding of a 32-bit value.
pub const MAX_LEN_32: usize = 5;

/// Longest encoding of a 64-bit value.
pub const MAX_LEN_64: usize = 10;

pub fn zigzag_encode_32(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

pub fn zigzag_decode_32(u: u32) -> i32 {
    ((u >> 1) as i32) ^ -((u & 1) as i32)
}

pub fn zigzag_encode_64(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

pub fn zigzag_decode_64(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

/// Encode into `buf`, returning how many bytes were used.
pub(crate) fn encode(mut value: u64, buf: &mut [u8; MAX_LEN_64]) -> usize {
    let mut i = 0;
    loop {
        if value & !0x7f == 0 {
            buf[i] = value as u8;
            return i + 1;
        }
        buf[i] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        i += 1;
    }
}

/// Decode groups pulled from `next` until one without the continuation bit.
/// More than `max_bits` worth of groups is an error.
pub(crate) fn decode<F>(mut next: F, max_bits: u32) -> Result<u64>
where
    F: FnMut() -> Result<u8>,
{
    let mut result = 0u64;
    let mut shift = 0;
    while shift < max_bits {
        let b = next()?;
        result |= u64::from(b & 0x7f) << shift;
        if b & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
    }
    Err(Error::varint_too_large(max_bits))
}

fn write<W: Write>(writer: &mut W, value: u64) -> Result<()> {
    let mut buf = [0u8; MAX_LEN_64];
    let len = encode(value, &mut buf);
    writer.write_all(&buf[..len])?;
    Ok(())
}

fn read<R: Read>(reader: &mut R, max_bits: u32) -> Result<u64> {
    decode(|| Ok(reader.read_u8()?), max_bits)
}

pub fn write_u32<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    write(writer, u64::from(value))
}

pub fn write_i32<W: Write>(writer: &mut W, value: i32) -> Result<()> {
    write_u32(writer, zigzag_encode_32(value))
}

pub fn write_u64<W: Write>(writer: &mut W, value: u64) -> Result<()> {
    write(writer, value)
}

pub fn write_i64<W: Write>(writer: &mut W, value: i64) -> Result<()> {
    write(writer, zigzag_encode_64(value))
}

pub fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    Ok(read(reader, 32)? as u32)
}

pub fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    Ok(zigzag_decode_32(read_u32(reader)?))
}

pub fn read_u64<R: Read>(reader: &mut R) -> Result<u64> {
    read(reader, 64)
}

pub fn read_i64<R: Read>(reader: &mut R) -> Result<i64> {
    Ok(zigzag_decode_64(read_u64(reader)?))
}

