#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid input returns false, never an error.
        let _ = fapiao::core::is_valid_tax_id(s);
        let _ = fapiao::core::validate_tax_id(s);
    }
});
