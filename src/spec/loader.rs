use crate::error::CatalogError;
use crate::spec::document::OpenApiDocument;
use std::path::Path;

/// Load and parse the OpenAPI document at `path`
///
/// The file is checked for existence before any read, so a missing document
/// is reported as `MissingDocument` and never reaches the parser. Nothing is
/// cached: every call reads the file again.
///
/// # Errors
/// - `MissingDocument` if nothing exists at `path`
/// - `Read` if the file cannot be read as UTF-8 text
/// - `Parse` if the YAML is malformed or has an unexpected shape
pub async fn load_document(path: &Path) -> Result<OpenApiDocument, CatalogError> {
    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    if !exists {
        return Err(CatalogError::MissingDocument {
            path: path.to_path_buf(),
        });
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_document(&contents)
}

/// Parse OpenAPI YAML text into the typed document
///
/// An empty, comment-only or `~` document has no root mapping and is
/// rejected; a mapping without `paths` is an empty catalog.
pub fn parse_document(contents: &str) -> Result<OpenApiDocument, CatalogError> {
    let doc: Option<OpenApiDocument> = serde_yaml::from_str(contents)?;
    doc.ok_or_else(|| {
        CatalogError::Parse(serde::de::Error::custom(
            "OpenAPI document is empty; expected a mapping at the root",
        ))
    })
}
