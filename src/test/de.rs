use std::sync::Arc;

use super::builder::Builder;
use super::{init_logger, ENCODINGS};
use crate::error::{Error, ErrorKind, Result};
use crate::{de, from_bytes, Compound, Encoding, Options, Tag, Value};

const INT_AND_STRING: &[u8] = b"\x0a\x00\x00\
\x03\x00\x07IntTest\x00\x00\x00\x2a\
\x08\x00\x0aStringTest\x00\x02hi\
\x00";

fn nested_lists(encoding: Encoding, lists: usize) -> Vec<u8> {
    let mut builder = Builder::with(encoding).tag(Tag::List).name("");
    for _ in 1..lists {
        builder = builder.tag(Tag::List).int_payload(1);
    }
    builder.tag(Tag::End).int_payload(0).build()
}

#[test]
fn error_impls_sync_send() {
    fn i<T: Clone + Send + Sync + std::error::Error>(_: T) {}
    i(Error::invalid_tag(1));
}

#[test]
fn empty_payload() {
    let e = from_bytes(&[], &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::TruncatedInput);
}

#[test]
fn known_big_endian_compound() -> Result<()> {
    assert_eq!(INT_AND_STRING.len(), 35);

    let v = from_bytes(INT_AND_STRING, &Options::big_endian())?;
    let c = v.as_compound().unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.get_i32("IntTest"), Some(42));
    assert_eq!(c.get_str("StringTest"), Some("hi"));

    let mut expected = Compound::new();
    expected.insert("IntTest", 42);
    expected.insert("StringTest", "hi");
    assert_eq!(v, Value::Compound(expected));
    Ok(())
}

#[test]
fn every_primitive_in_every_encoding() -> Result<()> {
    for encoding in ENCODINGS {
        let payload = Builder::with(encoding)
            .start_compound("")
            .byte("b", -5)
            .short("s", 1234)
            .int("i", 50345)
            .long("l", i32::MAX as i64 + 1)
            .float("f", 1.23)
            .double("d", 1.23456)
            .string("str", "something")
            .byte_array("ba", &[1, -2, 3])
            .int_array("ia", &[1, -300, i32::MIN])
            .long_array("la", &[i64::MAX, -1])
            .end_compound()
            .build();

        let v = from_bytes(&payload, &Options::new(encoding))?;
        let c = v.as_compound().unwrap();
        assert_eq!(c.get_i8("b"), Some(-5), "{:?}", encoding);
        assert_eq!(c.get_i16("s"), Some(1234));
        assert_eq!(c.get_i32("i"), Some(50345));
        assert_eq!(c.get_i64("l"), Some(i32::MAX as i64 + 1));
        assert_eq!(c.get_f32("f"), Some(1.23));
        assert_eq!(c.get_f64("d"), Some(1.23456));
        assert_eq!(c.get_str("str"), Some("something"));
        assert_eq!(&**c.get_byte_array("ba").unwrap(), &[1, -2, 3]);
        assert_eq!(&**c.get_int_array("ia").unwrap(), &[1, -300, i32::MIN]);
        assert_eq!(&**c.get_long_array("la").unwrap(), &[i64::MAX, -1]);
    }
    Ok(())
}

#[test]
fn compound_keeps_key_order() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .int("z", 1)
        .int("a", 2)
        .int("m", 3)
        .end_compound()
        .build();

    let v = from_bytes(&payload, &Options::default())?;
    let keys: Vec<&str> = v.as_compound().unwrap().keys().map(|k| &**k).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    Ok(())
}

#[test]
fn list_of_compounds() -> Result<()> {
    for encoding in ENCODINGS {
        let payload = Builder::with(encoding)
            .start_compound("")
            .start_list("things", Tag::Compound, 2)
            .start_anon_compound()
            .string("name", "a")
            .end_compound()
            .start_anon_compound()
            .end_compound()
            .end_compound()
            .build();

        let v = from_bytes(&payload, &Options::new(encoding))?;
        let list = v.as_compound().unwrap().get_list("things").unwrap();
        assert_eq!(list.element_tag(), Tag::Compound);
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.get(0).unwrap().as_compound().unwrap().get_str("name"),
            Some("a")
        );
        assert!(list.get(1).unwrap().as_compound().unwrap().is_empty());
    }
    Ok(())
}

#[test]
fn empty_list_keeps_element_tag() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .start_list("ints", Tag::Int, 0)
        .start_list("ends", Tag::End, 0)
        .end_compound()
        .build();

    let v = from_bytes(&payload, &Options::default())?;
    let c = v.as_compound().unwrap();
    assert_eq!(c.get_list("ints").unwrap().element_tag(), Tag::Int);
    assert_eq!(c.get_list("ends").unwrap().element_tag(), Tag::End);
    Ok(())
}

#[test]
fn root_name_is_kept_in_every_encoding() -> Result<()> {
    for encoding in ENCODINGS {
        let payload = Builder::with(encoding)
            .start_compound("root")
            .end_compound()
            .build();

        let named = de::decode_named(&payload[..], &Options::new(encoding))?;
        assert_eq!(named.name, "root");
        assert_eq!(named.value, Value::Compound(Compound::new()));
    }
    Ok(())
}

#[test]
fn non_compound_root() -> Result<()> {
    let payload = Builder::new().int("", 7).build();
    let v = from_bytes(&payload, &Options::default())?;
    assert_eq!(v.as_i32(), Some(7));
    Ok(())
}

#[test]
fn end_root_is_invalid() {
    for encoding in ENCODINGS {
        let payload = Builder::with(encoding).tag(Tag::End).build();
        let e = from_bytes(&payload, &Options::new(encoding)).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidRoot);
    }
}

#[test]
fn invalid_tag() {
    let payload = Builder::new()
        .start_compound("")
        .raw_bytes(&[13])
        .name("bad")
        .end_compound()
        .build();

    let e = from_bytes(&payload, &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedTag);
    assert!(e.to_string().contains("13"));
}

#[test]
fn unterminated_compound() {
    for encoding in ENCODINGS {
        let payload = Builder::with(encoding)
            .start_compound("")
            .int("a", 1)
            .build();

        let e = from_bytes(&payload, &Options::new(encoding)).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::MalformedTag);
    }
}

#[test]
fn truncated_value() {
    let mut payload = Builder::new()
        .start_compound("")
        .int("a", 1)
        .end_compound()
        .build();

    // Cut off inside the int.
    payload.truncate(payload.len() - 3);
    let e = from_bytes(&payload, &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::TruncatedInput);
}

#[test]
fn truncated_string() {
    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::String)
        .name("s")
        .raw_str_len(10)
        .raw_bytes(b"abc")
        .build();

    let e = from_bytes(&payload, &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::TruncatedInput);
}

#[test]
fn negative_lengths() {
    for encoding in ENCODINGS {
        let list = Builder::with(encoding)
            .start_compound("")
            .start_list("l", Tag::Int, -1)
            .end_compound()
            .build();
        let array = Builder::with(encoding)
            .start_compound("")
            .tag(Tag::IntArray)
            .name("a")
            .int_payload(-5)
            .end_compound()
            .build();

        for payload in [list, array] {
            let e = from_bytes(&payload, &Options::new(encoding)).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::MalformedTag, "{:?}", encoding);
        }
    }
}

#[test]
fn list_of_end_with_elements() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("l", Tag::End, 3)
        .end_compound()
        .build();

    let e = from_bytes(&payload, &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedTag);
}

#[test]
fn depth_limit() {
    for encoding in ENCODINGS {
        // Lists at depths 0 to 4.
        let payload = nested_lists(encoding, 5);

        let opts = Options::new(encoding).max_depth(4);
        assert!(from_bytes(&payload, &opts).is_ok());

        let opts = Options::new(encoding).max_depth(3);
        let e = from_bytes(&payload, &opts).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::DepthExceeded);
    }
}

#[test]
fn depth_counts_compounds() {
    let payload = Builder::new()
        .start_compound("")
        .start_compound("a")
        .start_compound("b")
        .end_compound()
        .end_compound()
        .end_compound()
        .build();

    assert!(from_bytes(&payload, &Options::default().max_depth(2)).is_ok());
    let e = from_bytes(&payload, &Options::default().max_depth(1)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DepthExceeded);
}

#[test]
fn depth_counts_scalars() {
    for encoding in ENCODINGS {
        // Root at 0, "a" at 1, the int at 2.
        let payload = Builder::with(encoding)
            .start_compound("")
            .start_compound("a")
            .int("i", 1)
            .end_compound()
            .end_compound()
            .build();

        assert!(from_bytes(&payload, &Options::new(encoding).max_depth(2)).is_ok());
        let e = from_bytes(&payload, &Options::new(encoding).max_depth(1)).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::DepthExceeded);
    }
}

#[test]
fn zero_depth_rejects_root_children() {
    let payload = Builder::new()
        .start_compound("")
        .int("a", 1)
        .end_compound()
        .build();
    let e = from_bytes(&payload, &Options::default().max_depth(0)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DepthExceeded);

    let opts = Options::default().max_depth(0);
    let empty = Builder::new().start_compound("").end_compound().build();
    assert!(from_bytes(&empty, &opts).is_ok());
    let scalar = Builder::new().int("", 7).build();
    assert_eq!(from_bytes(&scalar, &opts).unwrap().as_i32(), Some(7));
}

#[test]
fn hostile_nesting_does_not_overflow_stack() {
    init_logger();
    let payload = nested_lists(Encoding::BigEndian, 100_000);
    let e = from_bytes(&payload, &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DepthExceeded);
}

#[test]
fn large_list() {
    // Declares millions of compounds then ends.
    let input = [10, 0, 0, 9, 0, 0, 10, 4, 0, 5, 252];
    let e = from_bytes(&input, &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedTag);
}

#[test]
fn trailing_bytes() {
    // Nothing checks that the whole input was used.
    let mut input = Builder::new().start_compound("").end_compound().build();
    input.push(1);
    let _v: Value = from_bytes(&input, &Options::default()).unwrap();
}

#[test]
fn cesu8_string_in_big_endian() -> Result<()> {
    let modified_unicode_str = cesu8::to_java_cesu8("😈");
    assert_ne!(&*modified_unicode_str, "😈".as_bytes());

    let input = Builder::new()
        .start_compound("")
        .tag(Tag::String)
        .name("hello")
        .raw_str_len(modified_unicode_str.len())
        .raw_bytes(&modified_unicode_str)
        .end_compound()
        .build();

    let v = from_bytes(&input, &Options::big_endian())?;
    assert_eq!(v.as_compound().unwrap().get_str("hello"), Some("😈"));
    Ok(())
}

#[test]
fn little_endian_strings_are_plain_utf8() -> Result<()> {
    let modified_unicode_str = cesu8::to_java_cesu8("😈");

    let input = Builder::with(Encoding::LittleEndian)
        .start_compound("")
        .tag(Tag::String)
        .name("hello")
        .raw_str_len(modified_unicode_str.len())
        .raw_bytes(&modified_unicode_str)
        .end_compound()
        .build();

    let e = from_bytes(&input, &Options::little_endian()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidString);

    let input = Builder::with(Encoding::LittleEndian)
        .start_compound("")
        .string("hello", "😈")
        .end_compound()
        .build();
    let v = from_bytes(&input, &Options::little_endian())?;
    assert_eq!(v.as_compound().unwrap().get_str("hello"), Some("😈"));
    Ok(())
}

#[test]
fn network_varint_too_long() {
    let input = Builder::with(Encoding::Network)
        .start_compound("")
        .tag(Tag::Int)
        .name("i")
        .raw_bytes(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01])
        .end_compound()
        .build();

    let e = from_bytes(&input, &Options::network()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedTag);
}

#[test]
fn network_layout() -> Result<()> {
    // Int 42 is zig-zag 84, a single byte.
    let input = b"\x0a\x00\x03\x07IntTest\x54\x00";
    let v = from_bytes(input, &Options::network())?;
    assert_eq!(v.as_compound().unwrap().get_i32("IntTest"), Some(42));
    Ok(())
}

#[test]
fn wrong_encoding_is_an_error() {
    let input = b"\x0a\x00\x03\x07IntTest\x54\x00";
    let e = from_bytes(input, &Options::big_endian()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedTag);
}

#[test]
fn big_endian_read_as_network() {
    // The name length 0x0005 reads as varint 0 then a Float tag whose name
    // length is the 'l' of "level".
    let payload = Builder::with(Encoding::BigEndian)
        .start_compound("level")
        .int("IntTest", 42)
        .end_compound()
        .build();

    let e = from_bytes(&payload, &Options::network()).unwrap_err();
    assert!(
        matches!(e.kind(), ErrorKind::MalformedTag | ErrorKind::TruncatedInput),
        "{:?}",
        e
    );
}

#[test]
fn little_endian_read_as_big_endian() {
    // The key length 7 reads as 0x0700.
    let payload = Builder::with(Encoding::LittleEndian)
        .start_compound("")
        .int("IntTest", 42)
        .string("StringTest", "hi")
        .end_compound()
        .build();

    let e = from_bytes(&payload, &Options::big_endian()).unwrap_err();
    assert!(
        matches!(e.kind(), ErrorKind::MalformedTag | ErrorKind::TruncatedInput),
        "{:?}",
        e
    );
}

#[test]
fn decode_bare_value() -> Result<()> {
    for encoding in ENCODINGS {
        let payload = Builder::with(encoding).int_payload(-77).build();
        let v = de::decode_value(&payload[..], Tag::Int, &Options::new(encoding))?;
        assert_eq!(v.as_i32(), Some(-77));
    }

    let e = de::decode_value(&b""[..], Tag::End, &Options::default()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidRoot);
    Ok(())
}

#[test]
fn interned_keys_are_shared() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .string("id", "id")
        .end_compound()
        .build();
    let opts = Options::default().intern_keys(true).intern_values(true);

    let a = from_bytes(&payload, &opts)?;
    let b = from_bytes(&payload, &opts)?;
    let key_a = a.as_compound().unwrap().keys().next().unwrap().clone();
    let key_b = b.as_compound().unwrap().keys().next().unwrap().clone();
    assert!(Arc::ptr_eq(&key_a, &key_b));

    // Keys and values share one pool.
    match a.as_compound().unwrap().get("id") {
        Some(Value::String(s)) => assert!(Arc::ptr_eq(s, &key_a)),
        other => panic!("unexpected {:?}", other),
    }
    Ok(())
}

#[test]
fn uninterned_keys_are_not_shared() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .int("id", 1)
        .end_compound()
        .build();

    let a = from_bytes(&payload, &Options::default())?;
    let b = from_bytes(&payload, &Options::default())?;
    let key_a = a.as_compound().unwrap().keys().next().unwrap();
    let key_b = b.as_compound().unwrap().keys().next().unwrap();
    assert!(!Arc::ptr_eq(key_a, key_b));
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn gzip_wrapped_input() -> Result<()> {
    use flate2::read::GzDecoder;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    gz.write_all(INT_AND_STRING).unwrap();
    let compressed = gz.finish().unwrap();

    let v = de::decode(GzDecoder::new(&compressed[..]), &Options::big_endian())?;
    assert_eq!(v, from_bytes(INT_AND_STRING, &Options::big_endian())?);
    Ok(())
}
