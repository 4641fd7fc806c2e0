#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Some((patterns, handle)) = content.split_once('\n') {
            let filter: kiln::WarningFilter = patterns.parse().unwrap_or_default();
            let _ = filter.matches(handle);
        }
    }
});
