#![no_main]

use impldeps::Notation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(notation) = input.parse::<Notation>() {
            assert_eq!(notation.display_name().parse::<Notation>().ok(), Some(notation));
        }
    }
});
