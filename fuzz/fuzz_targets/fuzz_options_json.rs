#![no_main]

use libfuzzer_sys::fuzz_target;
use ovfdeploy::OptionsFlag;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Loading an inline options payload should never panic
        let _ = OptionsFlag::new().with_json(content).process();
    }
});
