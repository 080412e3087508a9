pub mod loader;
pub mod server;
pub mod site;

pub use loader::{SiteLoader, SiteSnapshot};
pub use site::SiteView;
