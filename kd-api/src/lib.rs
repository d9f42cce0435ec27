mod types;
pub mod v1;

pub use types::*;
