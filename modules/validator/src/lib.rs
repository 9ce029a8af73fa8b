pub mod endpoints;
pub mod model;
pub mod service;

pub use endpoints::configure;
pub use service::{compare_versions, validate};
