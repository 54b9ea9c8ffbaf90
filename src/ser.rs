//! Encoding a [`Value`] as NBT.
//!
//! [`encode`] writes a root with an empty name, [`encode_named`] lets the
//! caller pick it. Output goes straight to the writer as the tree is walked,
//! so an error part way through leaves a partial stream behind. Write into a
//! buffer first (or use [`to_bytes`]) if that matters.
//!
//! ```
//! use nbtcodec::{ser, Compound, Options, Value};
//!
//! let mut compound = Compound::new();
//! compound.insert("n", 7);
//!
//! let mut buf = Vec::new();
//! ser::encode_named("hello", &Value::Compound(compound), &mut buf, &Options::big_endian()).unwrap();
//! assert_eq!(buf, b"\x0a\x00\x05hello\x03\x00\x01n\x00\x00\x00\x07\x00");
//! ```
use std::io::Write;

use byteorder::{BigEndian, LittleEndian};
use log::trace;

use crate::error::{Error, Result};
use crate::output::{FixedOutput, NetworkOutput, Output};
use crate::{Compound, Encoding, List, Options, Tag, Value};

macro_rules! with_encoder {
    ($writer:expr, $opts:expr, |$enc:ident| $body:expr) => {{
        match $opts.encoding {
            Encoding::BigEndian => {
                let mut output = FixedOutput::<_, BigEndian>::new($writer);
                let mut $enc = Encoder::new(&mut output, $opts);
                $body
            }
            Encoding::LittleEndian => {
                let mut output = FixedOutput::<_, LittleEndian>::new($writer);
                let mut $enc = Encoder::new(&mut output, $opts);
                $body
            }
            Encoding::Network => {
                let mut output = NetworkOutput::new($writer);
                let mut $enc = Encoder::new(&mut output, $opts);
                $body
            }
        }
    }};
}

/// Encode `value` as a root with an empty name.
pub fn encode<W: Write>(value: &Value, writer: W, opts: &Options) -> Result<()> {
    encode_named("", value, writer, opts)
}

/// Encode `value` as a root called `name`.
pub fn encode_named<W: Write>(name: &str, value: &Value, writer: W, opts: &Options) -> Result<()> {
    trace!("encoding {} root {:?} as {:?}", value.tag(), name, opts.encoding);
    with_encoder!(writer, opts, |enc| enc.write_root(name, value))
}

/// Encode only the payload of `value`, with no tag byte or name before it.
pub fn encode_value<W: Write>(value: &Value, writer: W, opts: &Options) -> Result<()> {
    with_encoder!(writer, opts, |enc| enc.write_value(value, 0))
}

/// Encode `value` as an unnamed root into a new buffer.
pub fn to_bytes(value: &Value, opts: &Options) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode(value, &mut buf, opts)?;
    Ok(buf)
}

struct Encoder<'a, O> {
    output: &'a mut O,
    opts: &'a Options,
}

impl<'a, O: Output> Encoder<'a, O> {
    fn new(output: &'a mut O, opts: &'a Options) -> Self {
        Self { output, opts }
    }

    fn write_root(&mut self, name: &str, value: &Value) -> Result<()> {
        let tag = value.tag();
        if self.opts.require_compound_root && tag != Tag::Compound {
            return Err(Error::no_root_compound(tag));
        }
        self.output.write_tag(tag)?;
        self.output.write_size_prefixed_str(name)?;
        self.write_value(value, 0)
    }

    // Same rule as the decoder, so anything written can be read back with
    // the same options.
    fn check_depth(&self, depth: u32) -> Result<()> {
        if depth > self.opts.max_depth {
            return Err(Error::depth_exceeded(depth, self.opts.max_depth));
        }
        Ok(())
    }

    fn write_value(&mut self, value: &Value, depth: u32) -> Result<()> {
        self.check_depth(depth)?;
        match value {
            Value::Byte(v) => self.output.write_byte(*v as u8),
            Value::Short(v) => self.output.write_i16(*v),
            Value::Int(v) => self.output.write_i32(**v),
            Value::Long(v) => self.output.write_i64(*v),
            Value::Float(v) => self.output.write_f32(**v),
            Value::Double(v) => self.output.write_f64(*v),
            Value::ByteArray(v) => self.output.write_byte_array(v),
            Value::String(v) => self.output.write_size_prefixed_str(v),
            Value::List(v) => self.write_list(v, depth),
            Value::Compound(v) => self.write_compound(v, depth),
            Value::IntArray(v) => self.output.write_int_array(v),
            Value::LongArray(v) => self.output.write_long_array(v),
        }
    }

    fn write_list(&mut self, list: &List, depth: u32) -> Result<()> {
        let element = list.element_tag();
        self.output.write_tag(element)?;
        self.output.write_len(list.len())?;
        for item in list {
            if item.tag() != element {
                return Err(Error::list_element(element, item.tag()));
            }
            self.write_value(item, depth + 1)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound, depth: u32) -> Result<()> {
        for (key, value) in compound {
            self.output.write_tag(value.tag())?;
            self.output.write_size_prefixed_str(key)?;
            self.write_value(value, depth + 1)?;
        }
        self.output.write_tag(Tag::End)
    }
}
