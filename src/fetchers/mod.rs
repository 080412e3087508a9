pub mod resource;

pub use resource::{DataSource, ResourceFetcher};
