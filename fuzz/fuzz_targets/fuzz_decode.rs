#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decode → display → reparse must not panic at any step.
        if let Ok(decoded) = vin_decode::decode::decode(s, None) {
            let _ = decoded.to_string();
            assert!(vin_decode::Vin::parse(decoded.vin.as_str()).is_ok());
        }
    }
});
