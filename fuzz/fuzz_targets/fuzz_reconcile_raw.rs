#![no_main]

use libfuzzer_sys::fuzz_target;

use fapiao::core::{EditedField, reconcile_raw, to_chinese_numeral};

fuzz_target!(|data: (&str, &str, &str)| {
    let (price, rate, total) = data;
    // Raw field coercion must degrade to zero, never panic.
    for edited in [EditedField::Price, EditedField::TaxRate, EditedField::Total] {
        let r = reconcile_raw(edited, price, rate, total);
        let _ = to_chinese_numeral(r.total);
    }
});
