use std::convert::TryFrom;

use crate::{Compound, Encoding, List, Tag, Value};

#[allow(clippy::float_cmp)]
mod de;



const ENCODINGS: [Encoding; 3] = [
    Encoding::BigEndian,
    Encoding::LittleEndian,
    Encoding::Network,
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A tree touching every tag.
fn everything() -> Value {
    let mut inner = Compound::new();
    inner.insert("name", "Bananrama");
    inner.insert("value", 0.5f32);

    let mut root = Compound::new();
    root.insert("byte", 127i8);
    root.insert("short", -32768i16);
    root.insert("int", 2147483647);
    root.insert("long", -9223372036854775808i64);
    root.insert("float", -1.5f32);
    root.insert("double", 0.49312871321823148f64);
    root.insert("string", "HELLO WORLD THIS IS A TEST STRING ÅÄÖ!");
    root.insert("bytes", crate::ByteArray::new(vec![0, -1, 127, -128]));
    root.insert("ints", crate::IntArray::new(vec![1, -300, i32::MAX]));
    root.insert("longs", crate::LongArray::new(vec![i64::MIN, 0, 1 << 40]));
    root.insert(
        "list",
        List::new(Tag::Long, vec![11i64.into(), 12i64.into(), 13i64.into()]).unwrap(),
    );
    root.insert("empty", List::empty(Tag::End));
    root.insert("empty ints", List::empty(Tag::Int));
    root.insert(
        "compounds",
        List::new(Tag::Compound, vec![inner.clone().into(), Compound::new().into()]).unwrap(),
    );
    root.insert("nested", inner);
    Value::Compound(root)
}

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_display() {
    assert_eq!(Tag::Compound.to_string(), "TAG_Compound");
    assert_eq!(Tag::IntArray.to_string(), "TAG_Int_Array");
}
