//! Canonical size vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use optguard_core::codec::{encode_value, value_size};

mod vector_loader;

#[test]
fn size_vectors() {
    let file = vector_loader::load("sizes.json");
    assert!(!file.vectors.is_empty());

    for v in file.vectors {
        let size = value_size(&v.value).expect("measurable");
        assert_eq!(size, v.expect_size, "vector={}", v.description);

        let bytes = encode_value(&v.value).expect("encodable");
        assert_eq!(bytes.len(), size, "vector={}", v.description);
    }
}
