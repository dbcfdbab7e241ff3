use indexmap::IndexMap;

use super::types::format_type;
use super::{escape, escape_attr, required_badge};
use crate::models::{ModelBody, Scalar, Schema};

fn enum_table(values: &[Scalar]) -> Vec<String> {
    let mut parts = vec![
        r#"    <table class="param-table">"#.to_string(),
        "      <thead>".to_string(),
        "        <tr>".to_string(),
        "          <th>Value</th>".to_string(),
        "          <th>Description</th>".to_string(),
        "        </tr>".to_string(),
        "      </thead>".to_string(),
        "      <tbody>".to_string(),
    ];
    for value in values {
        parts.push("        <tr>".to_string());
        parts.push(format!("          <td><code>{}</code></td>", escape(value.as_str())));
        parts.push("          <td></td>".to_string());
        parts.push("        </tr>".to_string());
    }
    parts.push("      </tbody>".to_string());
    parts.push("    </table>".to_string());
    parts
}

fn property_table(properties: &IndexMap<Scalar, Schema>, required: &[Scalar]) -> Vec<String> {
    let mut parts = vec![
        r#"    <table class="param-table">"#.to_string(),
        "      <thead>".to_string(),
        "        <tr>".to_string(),
        "          <th>Field</th>".to_string(),
        "          <th>Type</th>".to_string(),
        "          <th>Required</th>".to_string(),
        "          <th>Description</th>".to_string(),
        "        </tr>".to_string(),
        "      </thead>".to_string(),
        "      <tbody>".to_string(),
    ];
    for (field, property) in properties {
        parts.push("        <tr>".to_string());
        parts.push(format!("          <td><code>{}</code></td>", escape(field.as_str())));
        parts.push(format!("          <td>{}</td>", format_type(&property.descriptor)));
        parts.push(format!(
            "          <td>{}</td>",
            required_badge(required.contains(field))
        ));
        parts.push(format!("          <td>{}</td>", escape(property.description())));
        parts.push("        </tr>".to_string());
    }
    parts.push("      </tbody>".to_string());
    parts.push("    </table>".to_string());
    parts
}

/// Collapsible card for one named definition
pub fn render_model(name: &str, schema: &Schema) -> String {
    let mut parts = vec![
        format!(r#"<div class="model-card" id="model-{}">"#, escape_attr(name)),
        r#"  <div class="model-header" onclick="toggleCard(this)">"#.to_string(),
        r#"    <div class="model-title">"#.to_string(),
        format!("      <span>{}</span>", escape(name)),
        format!(
            r#"      <span class="model-type-badge">{}</span>"#,
            escape(&schema.descriptor.type_name().to_uppercase())
        ),
        "    </div>".to_string(),
        r#"    <span class="expand-icon">▼</span>"#.to_string(),
        "  </div>".to_string(),
        r#"  <div class="model-body">"#.to_string(),
    ];

    if !schema.description().is_empty() {
        parts.push(format!("    <p><em>{}</em></p>", escape(schema.description())));
    }

    match schema.body() {
        ModelBody::Enum(values) => parts.extend(enum_table(values)),
        ModelBody::Object { properties, required } => {
            parts.extend(property_table(properties, required))
        }
        ModelBody::Empty => {}
    }

    parts.push("  </div>".to_string());
    parts.push("</div>".to_string());
    parts.push(String::new());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model(name: &str, yaml: &str) -> String {
        let schema: Schema = serde_yaml::from_str(yaml).unwrap();
        render_model(name, &schema)
    }

    #[test]
    fn test_object_model() {
        let html = model(
            "Pet",
            r##"
type: object
description: A pet in the store
required: [name]
properties:
  name:
    type: string
    description: Pet name
  owner:
    $ref: "#/definitions/Owner"
  tags:
    type: array
    items: { $ref: "#/definitions/Tag" }
"##,
        );

        assert!(html.contains(r#"id="model-Pet""#));
        assert!(html.contains("<span>Pet</span>"));
        assert!(html.contains(r#"<span class="model-type-badge">OBJECT</span>"#));
        assert!(html.contains("<p><em>A pet in the store</em></p>"));
        assert!(html.contains("<th>Field</th>"));
        assert!(html.contains(r#"<span class="param-type">Owner</span>"#));
        assert!(html.contains(r#"<span class="param-type">array[Tag]</span>"#));
        assert!(html.contains("<td>Pet name</td>"));
        assert_eq!(html.matches("required-badge").count(), 1);
        assert_eq!(html.matches("optional-badge").count(), 2);

        let name = html.find("<code>name</code>").unwrap();
        let owner = html.find("<code>owner</code>").unwrap();
        let tags = html.find("<code>tags</code>").unwrap();
        assert!(name < owner && owner < tags);
    }

    #[test]
    fn test_enum_model() {
        let html = model("Status", "{ type: string, enum: [available, <sold>, 3] }");

        assert!(html.contains(r#"<span class="model-type-badge">STRING</span>"#));
        assert!(html.contains("<th>Value</th>"));
        assert!(html.contains("<code>available</code>"));
        assert!(html.contains("<code>&lt;sold&gt;</code>"));
        assert!(html.contains("<code>3</code>"));
        assert_eq!(html.matches("<td></td>").count(), 3);
    }

    #[test]
    fn test_enum_wins_over_properties() {
        let html = model("Mixed", "{ enum: [x], properties: { id: { type: integer } } }");

        assert!(html.contains("<th>Value</th>"));
        assert!(!html.contains("<th>Field</th>"));
        assert!(!html.contains("<code>id</code>"));
    }

    #[test]
    fn test_model_without_structure_is_empty_shell() {
        let html = model("Blob", "{}");

        assert!(html.contains(r#"<span class="model-type-badge">OBJECT</span>"#));
        assert!(!html.contains("<table"));
        assert!(!html.contains("<em>"));
    }
}
