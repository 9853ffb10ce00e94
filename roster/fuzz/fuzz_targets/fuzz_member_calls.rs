#![no_main]

use libfuzzer_sys::fuzz_target;
use roster::MemberCall;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(call) = s.parse::<MemberCall>() {
            let again: MemberCall = call.to_string().parse().unwrap();
            assert_eq!(again, call);
        }
    }
});
