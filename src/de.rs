//! Decoding NBT into a [`Value`].
//!
//! A stream is a single named root: a tag byte, a name, then the payload for
//! that tag. [`decode_named`] returns the root name along with the value,
//! [`decode`] reads the name and drops it. This is the same for all three
//! encodings, including the network encoding where the name is almost always
//! empty.
//!
//! ```
//! use nbtcodec::{de, Options, Value};
//!
//! // TAG_Compound("hello") { TAG_Int("n"): 7 }
//! let data = b"\x0a\x00\x05hello\x03\x00\x01n\x00\x00\x00\x07\x00";
//!
//! let root = de::decode_named(&data[..], &Options::big_endian()).unwrap();
//! assert_eq!(root.name, "hello");
//! assert_eq!(root.value.as_compound().unwrap().get_i32("n"), Some(7));
//! ```
//!
//! # Interning
//!
//! With [`Options::intern_keys`] every Compound key is swapped for the
//! process-wide shared copy of that string. With [`Options::intern_values`]
//! the same happens for String values, and Int and Float values come from
//! their pools in [`crate::intern`]. Trees with many repeated values then
//! share one allocation per distinct value.
use std::io::Read;
use std::sync::Arc;

use byteorder::{BigEndian, LittleEndian};
use log::trace;

use crate::error::{Error, ErrorKind, Result};
use crate::input::{prealloc, FixedInput, Input, NetworkInput};
use crate::limit::Limited;
use crate::{intern, Compound, Encoding, List, Named, Options, Tag, Value};

// Builds the input for the configured encoding and runs `$body` against a
// decoder over it. Each arm is monomorphised for its encoding.
macro_rules! with_decoder {
    ($reader:expr, $opts:expr, |$de:ident| $body:expr) => {{
        let reader = Limited::new($reader, $opts.max_read_bytes);
        match $opts.encoding {
            Encoding::BigEndian => {
                let mut input = FixedInput::<_, BigEndian>::new(reader);
                let mut $de = Decoder::new(&mut input, $opts);
                $body
            }
            Encoding::LittleEndian => {
                let mut input = FixedInput::<_, LittleEndian>::new(reader);
                let mut $de = Decoder::new(&mut input, $opts);
                $body
            }
            Encoding::Network => {
                let mut input = NetworkInput::new(reader);
                let mut $de = Decoder::new(&mut input, $opts);
                $body
            }
        }
    }};
}

/// Decode a root value, discarding its name.
pub fn decode<R: Read>(reader: R, opts: &Options) -> Result<Value> {
    decode_named(reader, opts).map(|root| root.value)
}

/// Decode a root value along with its name.
pub fn decode_named<R: Read>(reader: R, opts: &Options) -> Result<Named> {
    trace!("decoding {:?} nbt root", opts.encoding);
    let root = with_decoder!(reader, opts, |de| de.read_root())?;
    trace!("decoded {} root {:?}", root.value.tag(), root.name);
    Ok(root)
}

/// Decode a bare payload of a known tag, with no tag byte or name before it.
pub fn decode_value<R: Read>(reader: R, tag: Tag, opts: &Options) -> Result<Value> {
    if tag == Tag::End {
        return Err(Error::end_root());
    }
    with_decoder!(reader, opts, |de| de.read_value(tag, 0))
}

/// Decode a root value from a byte slice.
pub fn from_bytes(bytes: &[u8], opts: &Options) -> Result<Value> {
    decode(bytes, opts)
}

/// Recursive descent over the tag structure.
struct Decoder<'a, I> {
    input: &'a mut I,
    opts: &'a Options,
}

impl<'a, I: Input> Decoder<'a, I> {
    fn new(input: &'a mut I, opts: &'a Options) -> Self {
        Self { input, opts }
    }

    fn read_root(&mut self) -> Result<Named> {
        let tag = self.input.consume_tag()?;
        if tag == Tag::End {
            return Err(Error::end_root());
        }
        let name = self.input.consume_str()?;
        let value = self.read_value(tag, 0)?;
        Ok(Named { name, value })
    }

    fn check_depth(&self, depth: u32) -> Result<()> {
        if depth > self.opts.max_depth {
            return Err(Error::depth_exceeded(depth, self.opts.max_depth));
        }
        Ok(())
    }

    fn read_value(&mut self, tag: Tag, depth: u32) -> Result<Value> {
        self.check_depth(depth)?;
        Ok(match tag {
            Tag::End => return Err(Error::end_payload(1)),
            Tag::Byte => Value::Byte(self.input.consume_byte()? as i8),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => {
                let v = self.input.consume_i32()?;
                Value::Int(if self.opts.intern_values {
                    intern::intern_i32(v)
                } else {
                    Arc::new(v)
                })
            }
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => {
                let v = self.input.consume_f32()?;
                Value::Float(if self.opts.intern_values {
                    intern::intern_f32(v)
                } else {
                    Arc::new(v)
                })
            }
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::String => {
                let s = self.input.consume_str()?;
                Value::String(if self.opts.intern_values {
                    intern::intern_str(&s)
                } else {
                    Arc::from(s)
                })
            }
            Tag::ByteArray => Value::ByteArray(self.input.consume_byte_array()?.into()),
            Tag::IntArray => Value::IntArray(self.input.consume_int_array()?.into()),
            Tag::LongArray => Value::LongArray(self.input.consume_long_array()?.into()),
            Tag::List => Value::List(self.read_list(depth)?),
            Tag::Compound => Value::Compound(self.read_compound(depth)?),
        })
    }

    fn read_list(&mut self, depth: u32) -> Result<List> {
        let element = self.input.consume_tag()?;
        let len = self.input.consume_len()?;

        // Empty lists are commonly written as a list of TAG_End, but End has
        // no payload so a non-empty one can't be read.
        if element == Tag::End && len > 0 {
            return Err(Error::end_payload(len));
        }

        let mut items = Vec::with_capacity(prealloc(len));
        for _ in 0..len {
            items.push(self.read_value(element, depth + 1)?);
        }
        Ok(List::from_parts(element, items))
    }

    fn read_compound(&mut self, depth: u32) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let tag = match self.input.consume_tag() {
                Err(e) if e.kind() == ErrorKind::TruncatedInput => {
                    return Err(Error::unterminated_compound())
                }
                tag => tag?,
            };
            if tag == Tag::End {
                break;
            }

            let key = self.input.consume_str()?;
            let key: Arc<str> = if self.opts.intern_keys {
                intern::intern_str(&key)
            } else {
                Arc::from(key)
            };
            let value = self.read_value(tag, depth + 1)?;
            compound.insert(key, value);
        }
        Ok(compound)
    }
}
