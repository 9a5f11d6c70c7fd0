//! Configuration module

mod site;

pub use site::NotionConfig;
pub use site::PropertyNames;
pub use site::SiteConfig;
