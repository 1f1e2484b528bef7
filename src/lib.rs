pub mod addons;
pub mod batch;
pub mod constants;
pub mod errors;
pub mod events;
pub mod scan;

pub use errors::{Error, Result};
