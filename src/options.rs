use serde::{Deserialize, Serialize};

/// Default maximum nesting of Lists and Compounds.
pub const MAX_DEPTH: u32 = 16;

/// Default read ceiling. Zero disables the ceiling.
pub const MAX_READ_BYTES: u64 = 0;

/// Which of the three NBT wire encodings a stream uses. Chosen once per stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Java Edition. Every multi-byte field is big-endian and strings are
    /// Java's modified UTF-8 behind a u16 length.
    #[default]
    BigEndian,

    /// Bedrock Edition files. Every multi-byte field is little-endian and
    /// strings are UTF-8 behind a little-endian u16 length.
    LittleEndian,

    /// Bedrock protocol. Little-endian, except that ints, longs and every
    /// length are zig-zag varints and string lengths are unsigned varints.
    Network,
}

/// Options for decoding and encoding.
///
/// ```
/// use nbtcodec::{Encoding, Options};
///
/// let opts = Options::network()
///     .max_depth(64)
///     .max_read_bytes(2 * 1024 * 1024)
///     .intern_keys(true);
///
/// assert_eq!(opts.encoding(), Encoding::Network);
/// ```
///
/// Options can also be loaded from any serde format, missing fields take
/// their defaults:
///
/// ```
/// # use nbtcodec::{Encoding, Options};
/// let opts: Options = serde_json::from_str(r#"{"encoding": "little-endian"}"#).unwrap();
/// assert_eq!(opts.encoding(), Encoding::LittleEndian);
/// assert_eq!(opts.get_max_depth(), nbtcodec::MAX_DEPTH);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub(crate) encoding: Encoding,
    pub(crate) max_depth: u32,
    pub(crate) max_read_bytes: u64,
    pub(crate) intern_keys: bool,
    pub(crate) intern_values: bool,
    pub(crate) require_compound_root: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self::new(Encoding::default())
    }
}

impl Options {
    /// Default options for the given encoding: depth capped at [`MAX_DEPTH`],
    /// no read ceiling, no interning.
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            max_depth: MAX_DEPTH,
            max_read_bytes: MAX_READ_BYTES,
            intern_keys: false,
            intern_values: false,
            require_compound_root: false,
        }
    }

    pub fn big_endian() -> Self {
        Self::new(Encoding::BigEndian)
    }

    pub fn little_endian() -> Self {
        Self::new(Encoding::LittleEndian)
    }

    pub fn network() -> Self {
        Self::new(Encoding::Network)
    }

    /// Use a different encoding, keeping every other option.
    pub fn encoding_of(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Maximum nesting depth. The root value sits at depth 0 and every List
    /// element or Compound entry is one deeper than its parent, so
    /// `max_depth(0)` only allows a scalar or an empty container at the root.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Maximum total bytes a decode may consume, including the root header.
    /// Zero means unbounded.
    pub fn max_read_bytes(mut self, max_read_bytes: u64) -> Self {
        self.max_read_bytes = max_read_bytes;
        self
    }

    /// Route Compound keys through the process-wide string pool.
    pub fn intern_keys(mut self, intern_keys: bool) -> Self {
        self.intern_keys = intern_keys;
        self
    }

    /// Route Int, Float and String values through the process-wide pools.
    pub fn intern_values(mut self, intern_values: bool) -> Self {
        self.intern_values = intern_values;
        self
    }

    /// Make the encoder reject any root that isn't a Compound.
    pub fn require_compound_root(mut self, require: bool) -> Self {
        self.require_compound_root = require;
        self
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn get_max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn get_max_read_bytes(&self) -> u64 {
        self.max_read_bytes
    }

    pub fn interns_keys(&self) -> bool {
        self.intern_keys
    }

    pub fn interns_values(&self) -> bool {
        self.intern_values
    }

    pub fn requires_compound_root(&self) -> bool {
        self.require_compound_root
    }
}
