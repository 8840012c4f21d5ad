mod loader_config;
mod multi_loader;
mod robots_txt_source;
mod source_error;
mod source_location;

pub use loader_config::{DEFAULT_USER_AGENT, LoaderConfig};
pub use multi_loader::{LoadResult, MultiLoader};
pub use robots_txt_source::RobotsTxtSource;
pub use source_error::SourceError;
pub use source_location::SourceLocation;
