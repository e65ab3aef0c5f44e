pub mod catalog;
pub mod config;
pub mod error;
pub mod http_method;
pub mod observability;
pub mod server;
pub mod spec;

pub use catalog::{ParameterDescriptor, RouteDescriptor};
pub use config::{Config, ConfigError};
pub use error::CatalogError;
pub use http_method::HttpMethod;
pub use observability::{init_logging, LogFormat};
pub use server::{router, serve, CatalogState};
pub use spec::{build_route_catalog, load_document, parse_document, OpenApiDocument, ResolveReference};
