#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = roster::parse_value(s) {
            let reparsed = roster::parse_value(&value.to_literal()).unwrap();
            assert_eq!(reparsed.kind(), value.kind());
        }
    }
});
