#![allow(non_snake_case)]

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_TITLE: &str = "API Documentation";
pub const DEFAULT_VERSION: &str = "v1";
pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_TYPE: &str = "object";

/// Any scalar node read as display text.
///
/// Swagger documents routinely use unquoted status codes (`200:`) as keys and
/// numbers or booleans as enum literals, so every free-text position accepts
/// strings, numbers, booleans and null alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scalar(pub String);

impl Scalar {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
                Ok(Scalar(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            // `{:?}` keeps the fractional part of whole floats: `1.0`, not `1`
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
                Ok(Scalar(format!("{:?}", v)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
                Ok(Scalar("null".to_string()))
            }

            fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
                self.visit_unit()
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

fn text(value: &Option<Scalar>) -> &str {
    value.as_ref().map(Scalar::as_str).unwrap_or("")
}

/// Complete API description (Swagger 2.0 layout). Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiDescription {
    pub info: Option<Info>,
    pub basePath: Option<Scalar>,
    pub schemes: Option<Vec<Scalar>>,
    pub paths: Option<IndexMap<Scalar, PathItem>>,
    pub definitions: Option<IndexMap<Scalar, Schema>>,
}

/// Information about the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: Option<Scalar>,
    pub version: Option<Scalar>,
    pub description: Option<Scalar>,
}

impl ApiDescription {
    fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    pub fn title(&self) -> &str {
        self.info()
            .and_then(|info| info.title.as_ref())
            .map(Scalar::as_str)
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn version(&self) -> &str {
        self.info()
            .and_then(|info| info.version.as_ref())
            .map(Scalar::as_str)
            .unwrap_or(DEFAULT_VERSION)
    }

    /// API description, empty when absent
    pub fn description(&self) -> &str {
        self.info().map(|info| text(&info.description)).unwrap_or("")
    }

    pub fn base_path(&self) -> &str {
        self.basePath
            .as_ref()
            .map(Scalar::as_str)
            .unwrap_or(DEFAULT_BASE_PATH)
    }

    /// Schemes joined with ", " and upper-cased. An explicit empty list stays empty.
    pub fn schemes_label(&self) -> String {
        match &self.schemes {
            Some(schemes) => schemes
                .iter()
                .map(Scalar::as_str)
                .collect::<Vec<_>>()
                .join(", ")
                .to_uppercase(),
            None => DEFAULT_SCHEME.to_uppercase(),
        }
    }

    /// All operations in path order, then method order within each path
    pub fn endpoints(&self) -> impl Iterator<Item = Endpoint<'_>> {
        self.paths.iter().flatten().flat_map(|(path, item)| {
            item.operations.iter().map(move |(method, operation)| Endpoint {
                path: path.as_str(),
                method: *method,
                operation,
            })
        })
    }

    pub fn has_paths(&self) -> bool {
        self.paths.as_ref().is_some_and(|paths| !paths.is_empty())
    }

    /// Named schema definitions in input order
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.definitions
            .iter()
            .flatten()
            .map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn has_definitions(&self) -> bool {
        self.definitions
            .as_ref()
            .is_some_and(|definitions| !definitions.is_empty())
    }
}

/// HTTP methods that are rendered as endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    /// Only lower-case keys are recognized, matching Swagger path items.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            "options" => Some(Self::Options),
            "head" => Some(Self::Head),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Options => "options",
            Self::Head => "head",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operations of one path, in the order the document lists them.
///
/// Keys that are not one of the recognized methods (`parameters`, `x-*`, ...)
/// are skipped without being inspected.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    pub operations: Vec<(HttpMethod, Operation)>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a path item mapping")
            }

            fn visit_unit<E: de::Error>(self) -> Result<PathItem, E> {
                Ok(PathItem::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PathItem, A::Error> {
                let mut operations = Vec::new();
                while let Some(key) = map.next_key::<Scalar>()? {
                    match HttpMethod::from_key(key.as_str()) {
                        Some(method) => operations.push((method, map.next_value::<Operation>()?)),
                        None => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(PathItem { operations })
            }
        }

        deserializer.deserialize_map(PathItemVisitor)
    }
}

/// One operation together with where it lives
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Operation,
}

/// An operation (endpoint) of the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Operation {
    pub summary: Option<Scalar>,
    pub description: Option<Scalar>,
    pub tags: Option<Vec<Scalar>>,
    pub parameters: Option<Vec<Parameter>>,
    pub responses: Option<IndexMap<Scalar, Response>>,
}

impl Operation {
    pub fn summary(&self) -> &str {
        text(&self.summary)
    }

    pub fn description(&self) -> &str {
        text(&self.description)
    }

    /// Only the first tag is shown
    pub fn tag(&self) -> Option<&str> {
        self.tags
            .as_ref()
            .and_then(|tags| tags.first())
            .map(Scalar::as_str)
    }

    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.as_deref().unwrap_or(&[])
    }

    /// Responses map, `None` when absent or empty
    pub fn responses(&self) -> Option<&IndexMap<Scalar, Response>> {
        self.responses
            .as_ref()
            .filter(|responses| !responses.is_empty())
    }
}

/// Parameter for an operation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: Option<Scalar>,
    #[serde(rename = "in")]
    pub in_type: Option<Scalar>, // path, query, header, body, formData
    pub required: Option<bool>,
    pub description: Option<Scalar>,
    pub schema: Option<Schema>,
    #[serde(flatten)]
    pub descriptor: TypeDescriptor,
}

impl Parameter {
    pub fn name(&self) -> &str {
        text(&self.name)
    }

    pub fn location(&self) -> &str {
        text(&self.in_type)
    }

    pub fn description(&self) -> &str {
        text(&self.description)
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// The payload schema of a body parameter
    pub fn body_schema(&self) -> Option<&Schema> {
        if self.location() == "body" {
            self.schema.as_ref()
        } else {
            None
        }
    }
}

/// API response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    pub description: Option<Scalar>,
    pub schema: Option<Schema>,
}

impl Response {
    pub fn description(&self) -> &str {
        text(&self.description)
    }
}

/// The type-bearing keys of a schema fragment or non-body parameter
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypeDescriptor {
    #[serde(rename = "$ref")]
    pub ref_: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<Scalar>,
    pub format: Option<Scalar>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Scalar>>,
    pub items: Option<Box<Schema>>,
}

/// How a type descriptor is labelled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DescriptorKind<'a> {
    /// Local name of the referenced definition
    Reference(&'a str),
    /// Array with an item descriptor
    Array(&'a Schema),
    Inline {
        base: &'a str,
        format: Option<&'a str>,
        enumerated: bool,
    },
}

impl TypeDescriptor {
    /// Name of the referenced definition: the last `/` segment of `$ref`.
    ///
    /// Whether the definition exists is never checked.
    pub fn reference_name(&self) -> Option<&str> {
        self.ref_
            .as_deref()
            .and_then(|pointer| pointer.rsplit('/').next())
    }

    pub fn type_name(&self) -> &str {
        self.type_
            .as_ref()
            .map(Scalar::as_str)
            .unwrap_or(DEFAULT_TYPE)
    }

    pub fn enum_values(&self) -> &[Scalar] {
        self.enum_values.as_deref().unwrap_or(&[])
    }

    pub fn kind(&self) -> DescriptorKind<'_> {
        if let Some(name) = self.reference_name() {
            return DescriptorKind::Reference(name);
        }

        let base = self.type_name();
        match &self.items {
            Some(items) if base == "array" => DescriptorKind::Array(items),
            _ => DescriptorKind::Inline {
                base,
                format: self
                    .format
                    .as_ref()
                    .map(Scalar::as_str)
                    .filter(|format| !format.is_empty()),
                enumerated: !self.enum_values().is_empty(),
            },
        }
    }
}

/// `required` is a list of field names on object schemas. Hand-written
/// documents sometimes carry a boolean on the property instead; that form
/// names no fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RequiredField {
    Names(Vec<Scalar>),
    Flag(#[allow(unused)] bool),
}

fn required_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Scalar>, D::Error> {
    Ok(match Option::<RequiredField>::deserialize(deserializer)? {
        Some(RequiredField::Names(names)) => names,
        Some(RequiredField::Flag(_)) | None => Vec::new(),
    })
}

/// A schema fragment: named definition, property, body payload or response payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(flatten)]
    pub descriptor: TypeDescriptor,
    pub description: Option<Scalar>,
    pub properties: Option<IndexMap<Scalar, Schema>>,
    #[serde(deserialize_with = "required_names")]
    pub required: Vec<Scalar>,
}

/// What a model card shows below its description
#[derive(Debug, Clone, Copy)]
pub enum ModelBody<'a> {
    Enum(&'a [Scalar]),
    Object {
        properties: &'a IndexMap<Scalar, Schema>,
        required: &'a [Scalar],
    },
    Empty,
}

impl Schema {
    pub fn description(&self) -> &str {
        text(&self.description)
    }

    /// Enum values win over properties when both are present.
    pub fn body(&self) -> ModelBody<'_> {
        let enum_values = self.descriptor.enum_values();
        if !enum_values.is_empty() {
            return ModelBody::Enum(enum_values);
        }

        match &self.properties {
            Some(properties) if !properties.is_empty() => ModelBody::Object {
                properties,
                required: &self.required,
            },
            _ => ModelBody::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse<T: for<'de> Deserialize<'de>>(yaml: &str) -> T {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults_for_empty_document() {
        let api: ApiDescription = parse("{}");

        assert_eq!(api.title(), "API Documentation");
        assert_eq!(api.version(), "v1");
        assert_eq!(api.description(), "");
        assert_eq!(api.base_path(), "/");
        assert_eq!(api.schemes_label(), "HTTP");
        assert!(!api.has_paths());
        assert!(!api.has_definitions());
        assert_eq!(api.endpoints().count(), 0);
    }

    #[test]
    fn test_schemes_joined_and_upper_cased() {
        let api: ApiDescription = parse("schemes: [http, https]");
        assert_eq!(api.schemes_label(), "HTTP, HTTPS");

        let api: ApiDescription = parse("schemes: []");
        assert_eq!(api.schemes_label(), "");
    }

    #[test]
    fn test_endpoint_order_follows_document() {
        let api: ApiDescription = parse(
            r#"
paths:
  /z:
    post: {}
    parameters: []
    get: {}
  /a:
    x-internal: true
    delete: {}
    trace: {}
"#,
        );

        let order: Vec<(String, &str)> = api
            .endpoints()
            .map(|e| (e.path.to_string(), e.method.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("/z".to_string(), "post"),
                ("/z".to_string(), "get"),
                ("/a".to_string(), "delete"),
            ]
        );
    }

    #[test]
    fn test_numeric_status_codes_and_enum_literals() {
        let op: Operation = parse(
            r#"
responses:
  200:
    description: OK
  "404":
    description: Missing
"#,
        );
        let codes: Vec<&str> = op.responses().unwrap().keys().map(Scalar::as_str).collect();
        assert_eq!(codes, vec!["200", "404"]);

        let schema: Schema = parse("enum: [1, true, 2.5, red]");
        let values: Vec<&str> = schema.descriptor.enum_values().iter().map(Scalar::as_str).collect();
        assert_eq!(values, vec!["1", "true", "2.5", "red"]);
    }

    #[test]
    fn test_whole_floats_keep_fraction() {
        let api: ApiDescription = parse("info: { title: T, version: 1.0 }");
        assert_eq!(api.version(), "1.0");

        let schema: Schema = parse("enum: [1.0, 2.50, -3.0, 7]");
        let values: Vec<&str> = schema.descriptor.enum_values().iter().map(Scalar::as_str).collect();
        assert_eq!(values, vec!["1.0", "2.5", "-3.0", "7"]);
    }

    #[test]
    fn test_null_enum_literal_is_spelled_null() {
        let schema: Schema = parse("enum: [a, null, ~]");
        let values: Vec<&str> = schema.descriptor.enum_values().iter().map(Scalar::as_str).collect();
        assert_eq!(values, vec!["a", "null", "null"]);
    }

    #[test]
    fn test_reference_name_is_last_segment() {
        let d: TypeDescriptor = parse(r##"$ref: "#/definitions/Widget""##);
        assert_eq!(d.reference_name(), Some("Widget"));

        let d: TypeDescriptor = parse(r#"$ref: "Widget""#);
        assert_eq!(d.reference_name(), Some("Widget"));

        let d: TypeDescriptor = parse("type: string");
        assert_eq!(d.reference_name(), None);
    }

    #[test]
    fn test_descriptor_kind() {
        let d: TypeDescriptor = parse(r##"{ $ref: "#/definitions/Pet", type: string }"##);
        assert_eq!(d.kind(), DescriptorKind::Reference("Pet"));

        let d: TypeDescriptor = parse("{ type: array, items: { type: string } }");
        assert!(matches!(d.kind(), DescriptorKind::Array(_)));

        // array without items is labelled like any inline type
        let d: TypeDescriptor = parse("{ type: array, format: csv }");
        assert_eq!(
            d.kind(),
            DescriptorKind::Inline { base: "array", format: Some("csv"), enumerated: false }
        );

        let d: TypeDescriptor = parse("{ format: '', enum: [] }");
        assert_eq!(
            d.kind(),
            DescriptorKind::Inline { base: "object", format: None, enumerated: false }
        );
    }

    #[test]
    fn test_parameter_accessors() {
        let p: Parameter = parse(r##"{ in: body, name: payload, required: false, schema: { $ref: "#/definitions/Widget" } }"##);
        assert_eq!(p.location(), "body");
        assert!(!p.is_required());
        assert!(p.body_schema().is_some());

        let p: Parameter = parse("{ in: query, name: limit, type: integer, format: int32 }");
        assert!(p.body_schema().is_none());
        assert_eq!(p.descriptor.type_name(), "integer");
        assert_eq!(p.description(), "");
    }

    #[test]
    fn test_model_body_prefers_enum() {
        let schema: Schema = parse("{ enum: [a], properties: { id: { type: integer } } }");
        assert!(matches!(schema.body(), ModelBody::Enum(values) if values.len() == 1));

        let schema: Schema = parse("{ properties: { id: { type: integer } }, required: [id] }");
        assert!(matches!(
            schema.body(),
            ModelBody::Object { required, .. } if required == [Scalar::from("id")]
        ));

        let schema: Schema = parse("{ type: object, properties: {} }");
        assert!(matches!(schema.body(), ModelBody::Empty));
    }

    #[test]
    fn test_boolean_required_on_property_is_ignored() {
        let schema: Schema = parse("{ properties: { id: { type: integer, required: true } } }");
        let ModelBody::Object { properties, .. } = schema.body() else {
            panic!("expected object body");
        };
        assert!(properties[0].required.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let result: Result<Operation, _> = serde_yaml::from_str("responses: [200]");
        assert!(result.is_err());

        let result: Result<ApiDescription, _> = serde_yaml::from_str("paths: { /a: { get: 5 } }");
        assert!(result.is_err());
    }
}
