use crate::error::CatalogError;
use crate::spec::document::{Components, OpenApiDocument, Parameter, ReferenceOr, Schema};
use indexmap::IndexMap;

/// Longest `$ref` chain followed before giving up
const MAX_REFERENCE_DEPTH: usize = 8;

/// Resolves component-level `$ref`s to their definitions
///
/// Handles:
/// - `$ref: "#/components/parameters/PageLimit"`
/// - `$ref: "#/components/schemas/UserId"`
///
/// A component may itself be a reference; chains are followed up to
/// `MAX_REFERENCE_DEPTH` links, so a cycle ends up unresolved.
pub trait ResolveReference<T> {
    fn resolve<'a>(&'a self, doc: &'a OpenApiDocument) -> Result<&'a T, CatalogError>;
}

fn resolve_logic<'a, T, F>(
    ref_or: &'a ReferenceOr<T>,
    doc: &'a OpenApiDocument,
    prefix: &str,
    selector: F,
) -> Result<&'a T, CatalogError>
where
    F: Fn(&'a Components) -> &'a IndexMap<String, ReferenceOr<T>>,
{
    let mut current = ref_or;
    for _ in 0..=MAX_REFERENCE_DEPTH {
        let reference = match current {
            ReferenceOr::Item(item) => return Ok(item),
            ReferenceOr::Reference { reference } => reference,
        };
        let unresolved = || CatalogError::UnresolvedReference {
            reference: reference.clone(),
        };

        let name = reference.strip_prefix(prefix).ok_or_else(unresolved)?;
        current = doc
            .components
            .as_ref()
            .map(&selector)
            .and_then(|map| map.get(name))
            .ok_or_else(unresolved)?;
    }

    match current {
        ReferenceOr::Item(item) => Ok(item),
        ReferenceOr::Reference { reference } => Err(CatalogError::UnresolvedReference {
            reference: reference.clone(),
        }),
    }
}

impl ResolveReference<Parameter> for ReferenceOr<Parameter> {
    fn resolve<'a>(&'a self, doc: &'a OpenApiDocument) -> Result<&'a Parameter, CatalogError> {
        resolve_logic(self, doc, "#/components/parameters/", |c| &c.parameters)
    }
}

impl ResolveReference<Schema> for ReferenceOr<Schema> {
    fn resolve<'a>(&'a self, doc: &'a OpenApiDocument) -> Result<&'a Schema, CatalogError> {
        resolve_logic(self, doc, "#/components/schemas/", |c| &c.schemas)
    }
}
