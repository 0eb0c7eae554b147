use vin_decode::{Vin, validate};

fn main() {
    // Check-digit validation, no lookups
    println!("=== VIN Validation ===\n");

    let test_vins = [
        "1HGCM82633A004352", // Honda Accord
        "1M8GDM9AXKP042788", // check digit X
        "5YJSA1E14FF101183", // wrong check digit
        "1HGCM82633A00435",  // too short
        "1HGCM82633AO04352", // letter O
        "1HGCM826Z3A004352", // Z is not a check character
    ];

    for vin in &test_vins {
        match validate(vin) {
            Ok(()) => println!("  {vin} => valid"),
            Err(e) => println!("  {vin} => INVALID: {e}"),
        }
    }

    // Section breakdown of a parsed VIN
    println!("\n=== VIN Sections ===\n");

    match Vin::parse("JH4KA7561PC008269") {
        Ok(vin) => {
            println!("  WMI:             {}", vin.wmi());
            println!("  VDS:             {}", vin.vds());
            println!("  Check character: {}", vin.check_character());
            println!("  VIS:             {}", vin.vis());
        }
        Err(e) => println!("  Parse failed: {e}"),
    }
}
