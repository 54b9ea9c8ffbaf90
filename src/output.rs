use std::io::Write;
use std::marker::PhantomData;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::arrays::i8_slice_as_u8;
use crate::error::{Error, Result};
use crate::order::Order;
use crate::{varint, Tag};

mod private {
    pub trait Sealed {}
}

/// The primitive writes of one wire encoding.
pub(crate) trait Output: private::Sealed {
    fn write_byte(&mut self, b: u8) -> Result<()>;
    fn write_i16(&mut self, v: i16) -> Result<()>;
    fn write_i32(&mut self, v: i32) -> Result<()>;
    fn write_i64(&mut self, v: i64) -> Result<()>;
    fn write_f32(&mut self, v: f32) -> Result<()>;
    fn write_f64(&mut self, v: f64) -> Result<()>;

    /// Element count of a List or array.
    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::len_too_large(len))?;
        self.write_i32(len)
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()>;

    fn write_byte_array(&mut self, data: &[i8]) -> Result<()>;
    fn write_int_array(&mut self, data: &[i32]) -> Result<()>;
    fn write_long_array(&mut self, data: &[i64]) -> Result<()>;

    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_byte(tag.into())
    }
}

/// Big- or little-endian output.
pub(crate) struct FixedOutput<W, O> {
    writer: W,
    order: PhantomData<O>,
}

impl<W: Write, O: Order> FixedOutput<W, O> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            order: PhantomData,
        }
    }
}

impl<W, O> private::Sealed for FixedOutput<W, O> {}

impl<W: Write, O: Order> Output for FixedOutput<W, O> {
    fn write_byte(&mut self, b: u8) -> Result<()> {
        self.writer.write_u8(b)?;
        Ok(())
    }

    fn write_i16(&mut self, v: i16) -> Result<()> {
        self.writer.write_i16::<O>(v)?;
        Ok(())
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.writer.write_i32::<O>(v)?;
        Ok(())
    }

    fn write_i64(&mut self, v: i64) -> Result<()> {
        self.writer.write_i64::<O>(v)?;
        Ok(())
    }

    fn write_f32(&mut self, v: f32) -> Result<()> {
        self.writer.write_f32::<O>(v)?;
        Ok(())
    }

    fn write_f64(&mut self, v: f64) -> Result<()> {
        self.writer.write_f64::<O>(v)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let bytes = O::encode_str(s);
        let len = u16::try_from(bytes.len()).map_err(|_| Error::string_too_long(bytes.len()))?;
        self.writer.write_u16::<O>(len)?;
        self.writer.write_all(&bytes)?;
        Ok(())
    }

    fn write_byte_array(&mut self, data: &[i8]) -> Result<()> {
        self.write_len(data.len())?;
        self.writer.write_all(i8_slice_as_u8(data))?;
        Ok(())
    }

    fn write_int_array(&mut self, data: &[i32]) -> Result<()> {
        self.write_len(data.len())?;
        let mut buf = vec![0u8; data.len() * 4];
        O::write_i32_into(data, &mut buf);
        self.writer.write_all(&buf)?;
        Ok(())
    }

    fn write_long_array(&mut self, data: &[i64]) -> Result<()> {
        self.write_len(data.len())?;
        let mut buf = vec![0u8; data.len() * 8];
        O::write_i64_into(data, &mut buf);
        self.writer.write_all(&buf)?;
        Ok(())
    }
}

/// Network output: little-endian with varints.
pub(crate) struct NetworkOutput<W> {
    writer: W,
}

impl<W: Write> NetworkOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> private::Sealed for NetworkOutput<W> {}

impl<W: Write> Output for NetworkOutput<W> {
    fn write_byte(&mut self, b: u8) -> Result<()> {
        self.writer.write_u8(b)?;
        Ok(())
    }

    fn write_i16(&mut self, v: i16) -> Result<()> {
        self.writer.write_i16::<LittleEndian>(v)?;
        Ok(())
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        varint::write_i32(&mut self.writer, v)
    }

    fn write_i64(&mut self, v: i64) -> Result<()> {
        varint::write_i64(&mut self.writer, v)
    }

    fn write_f32(&mut self, v: f32) -> Result<()> {
        self.writer.write_f32::<LittleEndian>(v)?;
        Ok(())
    }

    fn write_f64(&mut self, v: f64) -> Result<()> {
        self.writer.write_f64::<LittleEndian>(v)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let len = u32::try_from(s.len()).map_err(|_| Error::string_too_long(s.len()))?;
        varint::write_u32(&mut self.writer, len)?;
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_byte_array(&mut self, data: &[i8]) -> Result<()> {
        self.write_len(data.len())?;
        self.writer.write_all(i8_slice_as_u8(data))?;
        Ok(())
    }

    fn write_int_array(&mut self, data: &[i32]) -> Result<()> {
        self.write_len(data.len())?;
        for &v in data {
            self.write_i32(v)?;
        }
        Ok(())
    }

    fn write_long_array(&mut self, data: &[i64]) -> Result<()> {
        self.write_len(data.len())?;
        for &v in data {
            self.write_i64(v)?;
        }
        Ok(())
    }
}
