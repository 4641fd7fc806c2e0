#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Corrupt artifacts must be rejected, never panic
    let _ = kiln::infrastructure::frontend::read_metadata(Path::new("fuzz.out"), data);
});
