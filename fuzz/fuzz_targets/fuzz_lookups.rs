#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, i32, i32)| {
    let (s, start_year, current_year) = input;
    // Sentinel lookups must never panic on arbitrary input.
    let _ = vin_decode::wmi::world_manufacturer(s);
    let _ = vin_decode::year::model_year(s, Some(start_year));
    for code in s.chars().take(4) {
        let _ = vin_decode::year::model_year_from_code(code, Some(start_year));
        let _ = vin_decode::year::resolve_model_year(code, Some(start_year), current_year);
        let _ = vin_decode::year::resolve_model_year(code, None, current_year);
    }
});
