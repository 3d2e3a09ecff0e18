#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoding a config document should never panic
        let _ = scanprep::infrastructure::config::parse_mapping(content, Path::new("fuzz.yml"));
    }
});
