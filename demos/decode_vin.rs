use vin_decode::decode::decode;
use vin_decode::{wmi, year};

fn main() {
    // ── 1. Full decode of a valid VIN ─────────────────────────────────
    println!("=== Decode ===\n");

    match decode("1HGCM82633A004352", None) {
        Ok(report) => println!("{report}"),
        Err(e) => println!("  Decode failed: {e}"),
    }

    // ── 2. Historical VIN with an explicit start year ─────────────────
    println!("\n=== Decode (1980 cycle) ===\n");

    match decode("JH4KA7561PC008269", Some(1980)) {
        Ok(report) => println!("{report}"),
        Err(e) => println!("  Decode failed: {e}"),
    }

    // ── 3. Prefix lookups on partial input ────────────────────────────
    println!("\n=== Manufacturer Lookup ===\n");

    for prefix in ["1H", "5YJ", "WVW", "TMB", "ZZ", ""] {
        let name = wmi::world_manufacturer(prefix);
        let name = if name.is_empty() { "—" } else { name };
        println!("  {prefix:<4} => {name}");
    }

    // ── 4. Year codes across the current cycle ────────────────────────
    println!("\n=== Model Year Codes ===\n");

    let now = year::current_year();
    println!("  Current year: {now}");
    for code in ['A', 'L', 'Y', '9', 'U'] {
        match year::model_year_from_code(code, None) {
            0 => println!("  {code} => not a year code"),
            y => println!("  {code} => {y}"),
        }
    }
}
