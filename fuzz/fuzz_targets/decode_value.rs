#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes, to_bytes, Encoding, Options};

fuzz_target!(|data: &[u8]| {
    for encoding in [Encoding::BigEndian, Encoding::LittleEndian, Encoding::Network] {
        let opts = Options::new(encoding).max_read_bytes(1 << 16);
        if let Ok(v) = from_bytes(data, &opts) {
            if let Ok(bs) = to_bytes(&v, &opts) {
                assert_eq!(from_bytes(&bs, &Options::new(encoding)).unwrap(), v);
            }
        }
    }
});
