//! Page types: metadata, page data, and routing.

mod data;
mod meta;
mod route;

pub use data::PageData;
pub use meta::PageMeta;
pub use route::PageRoute;
