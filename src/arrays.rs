use std::ops::{Deref, DerefMut};

macro_rules! nbt_array {
    ($(#[$meta:meta])* $name:ident, $elem:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self { data }
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self {
                    data: iter.into_iter().collect(),
                }
            }
        }
    };
}

nbt_array!(
    /// The payload of a `TAG_Byte_Array`. Owned by the node holding it and
    /// mutable in place.
    ByteArray,
    i8
);

nbt_array!(
    /// The payload of a `TAG_Int_Array`.
    IntArray,
    i32
);

nbt_array!(
    /// The payload of a `TAG_Long_Array`.
    LongArray,
    i64
);

impl ByteArray {
    /// View the bytes as unsigned.
    pub fn as_bytes(&self) -> &[u8] {
        i8_slice_as_u8(&self.data)
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: vec_u8_into_i8(data),
        }
    }
}

pub(crate) fn i8_slice_as_u8(data: &[i8]) -> &[u8] {
    // Safe to treat [i8] as [u8], same size and alignment.
    unsafe { &*(data as *const [i8] as *const [u8]) }
}

// Thanks to https://stackoverflow.com/a/59707887
pub(crate) fn vec_u8_into_i8(v: Vec<u8>) -> Vec<i8> {
    // ideally we'd use Vec::into_raw_parts, but it's unstable,
    // so we have to do it manually:

    // first, make sure v's destructor doesn't free the data
    // it thinks it owns when it goes out of scope
    let mut v = std::mem::ManuallyDrop::new(v);

    // then, pick apart the existing Vec
    let p = v.as_mut_ptr();
    let len = v.len();
    let cap = v.capacity();

    // finally, adopt the data into a new Vec
    unsafe { Vec::from_raw_parts(p as *mut i8, len, cap) }
}
