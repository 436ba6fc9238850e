#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        if let Ok(routes) = route_cut_editor::parse_feature_set(json) {
            let _ = route_cut_editor::write_feature_set(&routes);
        }
    }
});
