use std::io::Read;
use std::marker::PhantomData;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::limit::Limited;
use crate::order::{self, Order};
use crate::{varint, Tag};

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

/// Largest number of elements we reserve up front for a count taken from the
/// input. Anything larger grows as elements actually arrive.
const PREALLOC_LIMIT: usize = 4096;

pub(crate) fn prealloc(len: usize) -> usize {
    len.min(PREALLOC_LIMIT)
}

fn try_size(len: usize, multiplier: usize) -> Result<usize> {
    len.checked_mul(multiplier)
        .ok_or_else(|| Error::size_too_large(len))
}

/// The primitive reads of one wire encoding, charged against the read
/// ceiling.
pub(crate) trait Input: private::Sealed {
    fn consume_byte(&mut self) -> Result<u8>;
    fn consume_i16(&mut self) -> Result<i16>;
    fn consume_i32(&mut self) -> Result<i32>;
    fn consume_i64(&mut self) -> Result<i64>;
    fn consume_f32(&mut self) -> Result<f32>;
    fn consume_f64(&mut self) -> Result<f64>;

    /// Element count of a List or array.
    fn consume_len(&mut self) -> Result<usize>;

    fn consume_str(&mut self) -> Result<String>;

    fn consume_byte_array(&mut self) -> Result<Vec<u8>>;
    fn consume_int_array(&mut self) -> Result<Vec<i32>>;
    fn consume_long_array(&mut self) -> Result<Vec<i64>>;

    fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }
}

/// Read exactly `n` bytes, charging them first. The buffer grows with the
/// data actually read rather than being sized from `n`.
fn consume_exact<R: Read>(reader: &mut Limited<R>, n: usize) -> Result<Vec<u8>> {
    reader.charge(n as u64)?;
    let mut buf = Vec::with_capacity(prealloc(n));
    reader.by_ref().take(n as u64).read_to_end(&mut buf)?;
    if buf.len() < n {
        return Err(Error::unexpected_eof());
    }
    Ok(buf)
}

fn to_len(len: i32) -> Result<usize> {
    usize::try_from(len).map_err(|_| Error::negative_len(i64::from(len)))
}

/// Big- or little-endian input, every field fixed width.
pub(crate) struct FixedInput<R, O> {
    reader: Limited<R>,
    order: PhantomData<O>,
}

impl<R: Read, O: Order> FixedInput<R, O> {
    pub fn new(reader: Limited<R>) -> Self {
        Self {
            reader,
            order: PhantomData,
        }
    }
}

impl<R, O> private::Sealed for FixedInput<R, O> {}

impl<R: Read, O: Order> Input for FixedInput<R, O> {
    fn consume_byte(&mut self) -> Result<u8> {
        self.reader.charge(1)?;
        Ok(self.reader.read_u8()?)
    }

    fn consume_i16(&mut self) -> Result<i16> {
        self.reader.charge(2)?;
        Ok(self.reader.read_i16::<O>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        self.reader.charge(4)?;
        Ok(self.reader.read_i32::<O>()?)
    }

    fn consume_i64(&mut self) -> Result<i64> {
        self.reader.charge(8)?;
        Ok(self.reader.read_i64::<O>()?)
    }

    fn consume_f32(&mut self) -> Result<f32> {
        self.reader.charge(4)?;
        Ok(self.reader.read_f32::<O>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        self.reader.charge(8)?;
        Ok(self.reader.read_f64::<O>()?)
    }

    fn consume_len(&mut self) -> Result<usize> {
        to_len(self.consume_i32()?)
    }

    fn consume_str(&mut self) -> Result<String> {
        self.reader.charge(2)?;
        let len = self.reader.read_u16::<O>()? as usize;
        let bytes = consume_exact(&mut self.reader, len)?;
        O::decode_str(bytes)
    }

    fn consume_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.consume_len()?;
        consume_exact(&mut self.reader, len)
    }

    fn consume_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.consume_len()?;
        let size = try_size(len, 4)?;
        let bytes = consume_exact(&mut self.reader, size)?;
        let mut data = vec![0; len];
        O::read_i32_into(&bytes, &mut data);
        Ok(data)
    }

    fn consume_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.consume_len()?;
        let size = try_size(len, 8)?;
        let bytes = consume_exact(&mut self.reader, size)?;
        let mut data = vec![0; len];
        O::read_i64_into(&bytes, &mut data);
        Ok(data)
    }
}

/// The network encoding: little-endian, with varints for ints, longs and
/// lengths.
pub(crate) struct NetworkInput<R> {
    reader: Limited<R>,
}

impl<R: Read> NetworkInput<R> {
    pub fn new(reader: Limited<R>) -> Self {
        Self { reader }
    }

    // Each group byte is charged as it is read.
    fn varint(&mut self, max_bits: u32) -> Result<u64> {
        let reader = &mut self.reader;
        varint::decode(
            || {
                reader.charge(1)?;
                Ok(reader.read_u8()?)
            },
            max_bits,
        )
    }
}

impl<R> private::Sealed for NetworkInput<R> {}

impl<R: Read> Input for NetworkInput<R> {
    fn consume_byte(&mut self) -> Result<u8> {
        self.reader.charge(1)?;
        Ok(self.reader.read_u8()?)
    }

    fn consume_i16(&mut self) -> Result<i16> {
        self.reader.charge(2)?;
        Ok(self.reader.read_i16::<LittleEndian>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        Ok(varint::zigzag_decode_32(self.varint(32)? as u32))
    }

    fn consume_i64(&mut self) -> Result<i64> {
        Ok(varint::zigzag_decode_64(self.varint(64)?))
    }

    fn consume_f32(&mut self) -> Result<f32> {
        self.reader.charge(4)?;
        Ok(self.reader.read_f32::<LittleEndian>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        self.reader.charge(8)?;
        Ok(self.reader.read_f64::<LittleEndian>()?)
    }

    fn consume_len(&mut self) -> Result<usize> {
        to_len(self.consume_i32()?)
    }

    fn consume_str(&mut self) -> Result<String> {
        let len = self.varint(32)? as u32 as usize;
        let bytes = consume_exact(&mut self.reader, len)?;
        order::decode_utf8(bytes)
    }

    fn consume_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.consume_len()?;
        consume_exact(&mut self.reader, len)
    }

    fn consume_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.consume_len()?;
        let mut data = Vec::with_capacity(prealloc(len));
        for _ in 0..len {
            data.push(self.consume_i32()?);
        }
        Ok(data)
    }

    fn consume_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.consume_len()?;
        let mut data = Vec::with_capacity(prealloc(len));
        for _ in 0..len {
            data.push(self.consume_i64()?);
        }
        Ok(data)
    }
}
