//! The read ceiling applied to every decode.
//!
//! Every primitive the decoder reads reports its size to [`Limited::charge`]
//! before the bytes are pulled from the source. Lengths taken from the input,
//! for strings and arrays, are charged before anything is allocated for them.
//! Once the total passes the limit, that charge and every later one fails.
use std::io::{self, Read};

use log::warn;

use crate::error::{Error, Result};

/// A reader that counts the bytes charged against it.
pub struct Limited<R> {
    inner: R,
    read: u64,
    limit: u64,
}

impl<R: Read> Limited<R> {
    /// Wrap `inner`. A `limit` of zero means unbounded.
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            read: 0,
            limit,
        }
    }

    /// Record that `n` more bytes are about to be read.
    pub fn charge(&mut self, n: u64) -> Result<()> {
        self.read = self.read.saturating_add(n);
        if self.limit > 0 && self.read > self.limit {
            warn!(
                "nbt read ceiling hit: {} bytes charged, limit {}",
                self.read, self.limit
            );
            return Err(Error::read_limit_exceeded(self.read, self.limit));
        }
        Ok(())
    }

    /// Total bytes charged so far.
    pub fn charged(&self) -> u64 {
        self.read
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

// Reads pass straight through, accounting is done by the caller via charge.
impl<R: Read> Read for Limited<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}
