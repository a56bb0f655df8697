//! JSON test vector loader shared by codec tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SizeVector {
    pub description: String,
    pub value: serde_json::Value,
    pub expect_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct VectorFile {
    pub vectors: Vec<SizeVector>,
}

pub fn load(name: &str) -> VectorFile {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
