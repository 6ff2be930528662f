//! CLI command implementations

mod resolve;
mod respond;

pub use resolve::resolve;
pub use respond::respond;
