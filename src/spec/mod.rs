pub mod builder;
pub mod document;
pub mod loader;
pub mod reference_resolver;

pub use builder::build_route_catalog;
pub use document::OpenApiDocument;
pub use loader::{load_document, parse_document};
pub use reference_resolver::ResolveReference;
