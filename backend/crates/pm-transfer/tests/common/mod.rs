#![allow(dead_code)]

pub mod fixtures;
pub mod test_env;

pub use fixtures::*;
pub use test_env::*;
