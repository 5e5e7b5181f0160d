//! Fuzz target for connect descriptor parsing.
//!
//! Feeds arbitrary text to the descriptor parser to find panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_descriptor
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tnsdesc_core::ConnectionModel;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing may fail but must never panic
        if let Ok(mut model) = ConnectionModel::parse(input) {
            assert!(!model.endpoints().is_empty());

            let len = model.endpoints().len();
            let mut visited = usize::from(model.active_endpoint(false).is_some());
            while model.active_endpoint(true).is_some() {
                visited += 1;
            }
            assert_eq!(visited, len);
            assert!(model.cursor() <= len);
        }
    }
});
