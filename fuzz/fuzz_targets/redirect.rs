//! Fuzz target for redirect payloads.
//!
//! Applies arbitrary redirect buffers to a parsed model and checks that a
//! failed redirect leaves the model untouched.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_redirect
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tnsdesc_core::{ConnectionModel, RedirectPayload};

const BASE: &str = "(DESCRIPTION=(ADDRESS=(HOST=scan1))(ADDRESS=(HOST=scan2))\
    (CONNECT_DATA=(SERVICE_NAME=orcl)))";

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut model) = ConnectionModel::parse(BASE) else {
        return;
    };

    let before_endpoints = model.endpoints().to_vec();
    let before_identity = model.identity().clone();

    let payload = RedirectPayload::from_packet_data(input);
    match model.apply_redirect(&payload) {
        Ok(()) => {
            assert!(model.descriptor().is_none());
            assert!(!model.endpoints().is_empty());
            assert!(model.cursor() <= model.endpoints().len());
        }
        Err(_) => {
            assert_eq!(model.endpoints(), before_endpoints.as_slice());
            assert_eq!(model.identity(), &before_identity);
            assert!(model.descriptor().is_some());
        }
    }
});
