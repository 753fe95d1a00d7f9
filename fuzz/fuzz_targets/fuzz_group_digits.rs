#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, usize)| {
    let (raw, caret) = data;
    let (out, new_caret) = fapiao::core::group_digits_with_caret(raw, caret);
    // The translated caret always lands inside the reformatted text.
    assert!(new_caret <= out.chars().count());
});
