#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and both entry points must agree.
        assert_eq!(vin_decode::is_valid(s), vin_decode::validate(s).is_ok());
    }
});
