use crate::catalog::{ParameterDescriptor, RouteDescriptor};
use crate::error::CatalogError;
use crate::spec::document::{OpenApiDocument, Parameter, ReferenceOr, SchemaType};
use crate::spec::reference_resolver::ResolveReference;

const DEFAULT_PARAMETER_TYPE: &str = "string";

/// Flatten a parsed OpenAPI document into one descriptor per operation
///
/// Paths and operations keep their document order. Any unresolvable
/// reference fails the whole catalog; no partial list is returned.
pub fn build_route_catalog(doc: &OpenApiDocument) -> Result<Vec<RouteDescriptor>, CatalogError> {
    let mut routes = Vec::new();

    for (route, path_item) in doc.paths() {
        let shared_parameters = resolve_parameters(doc, &path_item.parameters()?)?;

        for (method, operation) in path_item.operations()? {
            let own_parameters =
                resolve_parameters(doc, operation.parameters.as_deref().unwrap_or_default())?;

            routes.push(RouteDescriptor {
                method: method.as_str().to_string(),
                route: route.clone(),
                summary: operation.summary.unwrap_or_default(),
                description: operation.description.unwrap_or_default(),
                tags: operation.tags.unwrap_or_default(),
                parameters: merge_parameters(&shared_parameters, own_parameters),
            });
        }
    }

    tracing::debug!(routes = routes.len(), "Built route catalog");
    Ok(routes)
}

fn resolve_parameters(
    doc: &OpenApiDocument,
    parameters: &[ReferenceOr<Parameter>],
) -> Result<Vec<ParameterDescriptor>, CatalogError> {
    parameters
        .iter()
        .map(|parameter_ref| describe_parameter(doc, parameter_ref.resolve(doc)?))
        .collect()
}

fn describe_parameter(
    doc: &OpenApiDocument,
    parameter: &Parameter,
) -> Result<ParameterDescriptor, CatalogError> {
    let param_type = match &parameter.schema {
        Some(schema_ref) => schema_ref
            .resolve(doc)?
            .schema_type
            .as_ref()
            .and_then(SchemaType::primary)
            .unwrap_or(DEFAULT_PARAMETER_TYPE)
            .to_string(),
        None => DEFAULT_PARAMETER_TYPE.to_string(),
    };

    Ok(ParameterDescriptor {
        name: parameter.name.clone(),
        location: parameter.location.clone(),
        required: parameter.required.unwrap_or(false),
        param_type,
        description: parameter.description.clone().unwrap_or_default(),
    })
}

/// Path-level parameters first; an operation parameter with the same
/// `(name, in)` replaces the inherited one in place
fn merge_parameters(
    shared: &[ParameterDescriptor],
    own: Vec<ParameterDescriptor>,
) -> Vec<ParameterDescriptor> {
    let mut merged = shared.to_vec();
    for parameter in own {
        match merged
            .iter_mut()
            .find(|p| p.name == parameter.name && p.location == parameter.location)
        {
            Some(slot) => *slot = parameter,
            None => merged.push(parameter),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::loader::parse_document;

    fn catalog(yaml: &str) -> Vec<RouteDescriptor> {
        build_route_catalog(&parse_document(yaml).unwrap()).unwrap()
    }

    #[test]
    fn minimal_operation_gets_defaults() {
        let routes = catalog("paths:\n  /ping:\n    get:\n      summary: Health check\n");
        assert_eq!(
            routes,
            vec![RouteDescriptor {
                method: "GET".to_string(),
                route: "/ping".to_string(),
                summary: "Health check".to_string(),
                description: String::new(),
                tags: vec![],
                parameters: vec![],
            }]
        );
    }

    #[test]
    fn one_descriptor_per_path_and_method() {
        let routes = catalog(
            r#"
paths:
  /users:
    get: {}
    post: {}
  /users/{id}:
    get: {}
    put: {}
    delete: {}
"#,
        );
        let pairs: Vec<(&str, &str)> = routes
            .iter()
            .map(|r| (r.method.as_str(), r.route.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("GET", "/users"),
                ("POST", "/users"),
                ("GET", "/users/{id}"),
                ("PUT", "/users/{id}"),
                ("DELETE", "/users/{id}"),
            ]
        );
    }

    #[test]
    fn methods_are_uppercased() {
        let routes = catalog("paths:\n  /x:\n    Get: {}\n    PATCH: {}\n    options: {}\n");
        let methods: Vec<&str> = routes.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(methods, vec!["GET", "PATCH", "OPTIONS"]);
    }

    #[test]
    fn parameter_defaults() {
        let routes = catalog(
            r#"
paths:
  /users/{id}:
    get:
      tags: [users]
      description: Fetch one user
      parameters:
        - name: id
          in: path
          required: true
          description: User id
          schema:
            type: integer
        - name: verbose
          in: query
"#,
        );
        let route = &routes[0];
        assert_eq!(route.tags, vec!["users".to_string()]);
        assert_eq!(route.description, "Fetch one user");
        assert_eq!(route.summary, "");
        assert_eq!(
            route.parameters,
            vec![
                ParameterDescriptor {
                    name: "id".to_string(),
                    location: "path".to_string(),
                    required: true,
                    param_type: "integer".to_string(),
                    description: "User id".to_string(),
                },
                ParameterDescriptor {
                    name: "verbose".to_string(),
                    location: "query".to_string(),
                    required: false,
                    param_type: "string".to_string(),
                    description: String::new(),
                },
            ]
        );
    }

    #[test]
    fn schema_without_type_defaults_to_string() {
        let routes = catalog(
            "paths:\n  /x:\n    get:\n      parameters:\n        - name: q\n          in: query\n          schema:\n            format: uuid\n",
        );
        assert_eq!(routes[0].parameters[0].param_type, "string");
    }

    #[test]
    fn component_references_are_resolved() {
        let routes = catalog(
            r#"
paths:
  /items:
    get:
      parameters:
        - $ref: '#/components/parameters/Limit'
components:
  parameters:
    Limit:
      name: limit
      in: query
      schema:
        $ref: '#/components/schemas/PageSize'
  schemas:
    PageSize:
      type: integer
"#,
        );
        assert_eq!(routes[0].parameters[0].name, "limit");
        assert_eq!(routes[0].parameters[0].param_type, "integer");
    }

    #[test]
    fn unresolved_reference_fails_the_whole_catalog() {
        let doc = parse_document(
            "paths:\n  /a:\n    get: {}\n  /b:\n    get:\n      parameters:\n        - $ref: '#/components/parameters/Gone'\n",
        )
        .unwrap();
        assert!(matches!(
            build_route_catalog(&doc),
            Err(CatalogError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn path_level_parameters_are_inherited_and_overridable() {
        let routes = catalog(
            r#"
paths:
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: true
      - name: trace
        in: header
    get: {}
    put:
      parameters:
        - name: id
          in: path
          required: true
          description: Target user
        - name: dryRun
          in: query
"#,
        );
        assert_eq!(routes.len(), 2);

        let get_names: Vec<&str> = routes[0].parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(get_names, vec!["id", "trace"]);

        let put = &routes[1].parameters;
        let put_names: Vec<&str> = put.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(put_names, vec!["id", "trace", "dryRun"]);
        assert_eq!(put[0].description, "Target user");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let routes = catalog(
            "paths:\n  /x:\n    get:\n      summary: ~\n      tags: ~\n      parameters: ~\n",
        );
        assert_eq!(routes[0].summary, "");
        assert!(routes[0].tags.is_empty());
        assert!(routes[0].parameters.is_empty());
    }

    #[test]
    fn empty_paths_gives_empty_catalog() {
        assert!(catalog("openapi: 3.0.0\n").is_empty());
    }
}
