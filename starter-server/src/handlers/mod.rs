//! Request handlers

mod root;

pub use root::*;
