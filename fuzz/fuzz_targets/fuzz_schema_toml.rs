#![no_main]

use libfuzzer_sys::fuzz_target;
use persistgen::domain::ports::TypeLoader;
use persistgen::domain::value_objects::TypePath;
use persistgen::infrastructure::SchemaFileLoader;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Schema parsing and lookup should never panic
        if let Ok(loader) = SchemaFileLoader::from_str(content, "fuzz.toml") {
            if let Ok(path) = TypePath::parse("crate::domain::Fuzz") {
                let _ = loader.load(&path);
            }
        }
    }
});
