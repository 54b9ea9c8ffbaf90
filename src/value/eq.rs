use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::{Compound, List, Value};

const CANONICAL_F32_NAN: u32 = 0x7fc0_0000;
const CANONICAL_F64_NAN: u64 = 0x7ff8_0000_0000_0000;

/// Bit pattern used for equality, hashing and pooling of floats. Every NaN
/// collapses to one pattern, `0.0` and `-0.0` stay distinct.
pub(crate) fn f32_key(v: f32) -> u32 {
    if v.is_nan() {
        CANONICAL_F32_NAN
    } else {
        v.to_bits()
    }
}

pub(crate) fn f64_key(v: f64) -> u64 {
    if v.is_nan() {
        CANONICAL_F64_NAN
    } else {
        v.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Byte(a), Byte(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => f32_key(**a) == f32_key(**b),
            (Double(a), Double(b)) => f64_key(*a) == f64_key(*b),
            (ByteArray(a), ByteArray(b)) => a == b,
            (String(a), String(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Compound(a), Compound(b)) => a == b,
            (IntArray(a), IntArray(b)) => a == b,
            (LongArray(a), LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.tag().into());
        match self {
            Value::Byte(v) => v.hash(state),
            Value::Short(v) => v.hash(state),
            Value::Int(v) => v.hash(state),
            Value::Long(v) => v.hash(state),
            Value::Float(v) => f32_key(**v).hash(state),
            Value::Double(v) => f64_key(*v).hash(state),
            Value::ByteArray(v) => v.hash(state),
            Value::String(v) => v.hash(state),
            Value::List(v) => v.hash(state),
            Value::Compound(v) => v.hash(state),
            Value::IntArray(v) => v.hash(state),
            Value::LongArray(v) => v.hash(state),
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.element_tag() == other.element_tag() && self.as_slice() == other.as_slice()
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element_tag().hash(state);
        self.as_slice().hash(state);
    }
}

// Compound equality ignores insertion order, so the hash must too. Each entry
// is hashed on its own and the results are summed.
impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sum = 0u64;
        for (key, value) in self.iter() {
            let mut entry = DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            sum = sum.wrapping_add(entry.finish());
        }
        state.write_usize(self.len());
        state.write_u64(sum);
    }
}
