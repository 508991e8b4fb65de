#![no_main]

use libfuzzer_sys::fuzz_target;
use persistgen::domain::value_objects::TypePath;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing, then resolving relative paths, should never panic
        if let Ok(path) = TypePath::parse(input) {
            let _ = path.short_name();
            let _ = path.module_below_root();
            let _ = path.resolve_relative(input);
        }
    }
});
