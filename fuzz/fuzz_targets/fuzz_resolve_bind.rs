#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use scanprep::domain::services::{bind, resolve};
use scanprep::domain::value_objects::DynamicValue;
use scanprep::DeployParams;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // First line is the path expression, the rest is the document
    let (path, document) = content.split_once('\n').unwrap_or((content, ""));
    let Ok(mapping) = scanprep::infrastructure::config::parse_mapping(document, Path::new("fuzz.yml"))
    else {
        return;
    };

    let _ = bind::<DeployParams>(&mapping);
    let _ = resolve(path, &DynamicValue::Mapping(mapping));
});
