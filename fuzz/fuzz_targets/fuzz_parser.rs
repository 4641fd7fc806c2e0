#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use kiln::domain::ports::{CompilationUnit, Frontend};
use kiln::DeclFrontend;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any input either parses or yields a located syntax error
        if let Ok(unit) = DeclFrontend::new().parse(Path::new("fuzz.src"), content) {
            let _ = unit.find_declared_class("fuzz.Main");
        }
    }
});
