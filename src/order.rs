use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// A fixed-width byte order together with the string charset that goes with
/// it. Java Edition writes strings with `DataOutput::writeUTF`, which is
/// Java's modified UTF-8. Bedrock files use plain UTF-8.
pub(crate) trait Order: ByteOrder {
    fn decode_str(bytes: Vec<u8>) -> Result<String>;
    fn encode_str(s: &str) -> Cow<'_, [u8]>;
}

impl Order for BigEndian {
    fn decode_str(bytes: Vec<u8>) -> Result<String> {
        let converted = match cesu8::from_java_cesu8(&bytes) {
            // Borrowed means the bytes were already valid UTF-8.
            Ok(Cow::Borrowed(_)) => None,
            Ok(Cow::Owned(s)) => Some(s),
            Err(_) => return Err(Error::nonunicode_string(&bytes)),
        };
        match converted {
            Some(s) => Ok(s),
            None => decode_utf8(bytes),
        }
    }

    fn encode_str(s: &str) -> Cow<'_, [u8]> {
        cesu8::to_java_cesu8(s)
    }
}

impl Order for LittleEndian {
    fn decode_str(bytes: Vec<u8>) -> Result<String> {
        decode_utf8(bytes)
    }

    fn encode_str(s: &str) -> Cow<'_, [u8]> {
        Cow::Borrowed(s.as_bytes())
    }
}

/// Plain UTF-8, used by the network encoding.
pub(crate) fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::nonunicode_string(e.as_bytes()))
}
