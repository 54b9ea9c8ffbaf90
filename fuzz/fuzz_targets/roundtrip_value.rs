#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes, to_bytes, Compound, Encoding, Options, Value};

fuzz_target!(|v: Value| {
    let mut inner = Compound::new();
    inner.insert("", v);
    let v = Value::Compound(inner);

    for encoding in [Encoding::BigEndian, Encoding::LittleEndian, Encoding::Network] {
        let opts = Options::new(encoding);
        if let Ok(bs) = to_bytes(&v, &opts) {
            assert_eq!(from_bytes(&bs, &opts).unwrap(), v);
        }
    }
});
