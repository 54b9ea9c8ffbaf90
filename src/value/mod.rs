#[cfg(feature = "arbitrary1")]
mod arbitrary;
mod compound;
mod eq;
mod list;

use std::sync::Arc;

use crate::{ByteArray, IntArray, LongArray, Tag};

pub use self::compound::Compound;
pub use self::list::List;

pub(crate) use self::eq::f32_key;

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively decoded.
///
/// Ints, Floats and Strings are held behind an [`Arc`] so that the decoder
/// can hand out one shared instance for repeated values when interning is
/// enabled, see [`Options::intern_values`][crate::Options::intern_values].
/// Equality never looks at that sharing, two values are equal when their
/// contents are.
///
/// ```
/// use nbtcodec::{Compound, Value};
///
/// let mut compound = Compound::new();
/// compound.insert("DataVersion", 3465);
///
/// let value = Value::Compound(compound);
/// match value.as_compound().and_then(|c| c.get("DataVersion")) {
///     Some(Value::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(Arc<i32>),
    Long(i64),
    Float(Arc<f32>),
    Double(f64),
    ByteArray(ByteArray),
    String(Arc<str>),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

impl Value {
    /// The tag this value is written with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match *self {
            Value::Byte(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_i8().map(|v| v != 0)
    }

    pub fn as_i16(&self) -> Option<i16> {
        match *self {
            Value::Short(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(**v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(**v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&ByteArray> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&IntArray> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&LongArray> {
        match self {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

/// A root value together with the name it was written under. The name is
/// usually empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Named {
    pub name: String,
    pub value: Value,
}

impl Named {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The same value under a different name.
    pub fn rename(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: self.value,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $conv:expr)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant($($conv)?(val))
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int, Arc::new);
from!(i64, Long);
from!(f32, Float, Arc::new);
from!(f64, Double);
from!(Arc<str>, String);
from!(String, String, Arc::from);
from!(&str, String, Arc::from);
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);
from!(Arc<i32>, Int);
from!(Arc<f32>, Float);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
