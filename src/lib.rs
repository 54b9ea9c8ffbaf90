//! nbtcodec reads and writes NBT data in the three wire encodings in use
//! today:
//!
//! * big-endian, used by *Minecraft: Java Edition* files,
//! * little-endian, used by *Bedrock Edition* level data, and
//! * the network encoding, little-endian with zig-zag varints for ints, longs
//!   and lengths, used by the Bedrock protocol.
//!
//! * For the tree type see [`Value`], [`Compound`] and [`List`].
//! * For decoding see [`de`], for encoding see [`ser`].
//! * For limits, byte order and interning see [`Options`].
//! * For the process-wide interning pools see [`intern`].
//!
//! The codec never opens files or sockets. It takes any [`std::io::Read`] and
//! writes to any [`std::io::Write`]. Compression is left to the caller, wrap
//! the reader in a `GzDecoder` or similar first.
//!
//! # Quick example
//!
//! ```
//! use nbtcodec::{Compound, Options, Value};
//!
//! let mut compound = Compound::new();
//! compound.insert("IntTest", 42);
//! compound.insert("StringTest", "hi");
//! let value = Value::Compound(compound);
//!
//! let opts = Options::network();
//! let bytes = nbtcodec::to_bytes(&value, &opts).unwrap();
//! let back = nbtcodec::from_bytes(&bytes, &opts).unwrap();
//! assert_eq!(value, back);
//! ```
//!
//! # Hostile input
//!
//! Decoding is bounded two ways. [`Options::max_depth`] caps how deeply Lists
//! and Compounds can nest, and [`Options::max_read_bytes`] caps the total
//! number of bytes a single decode may consume. The byte limit is checked
//! before any buffer for a string or array is allocated, so a payload claiming
//! a 2 GiB array fails without allocating it.

pub mod de;
pub mod error;
pub mod intern;
pub mod limit;
pub mod ser;
pub mod varint;

mod arrays;
mod input;
mod options;
mod order;
mod output;
mod value;

pub use arrays::*;
pub use de::{decode, decode_named, decode_value, from_bytes};
pub use options::*;
pub use ser::{encode, encode_named, encode_value, to_bytes};
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of values which all share one tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely change
// so it isn't a massive burden.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
            Tag::LongArray => "TAG_Long_Array",
        };
        f.write_str(name)
    }
}
