use indexmap::IndexMap;

use super::types::{format_type, type_span};
use super::{collapsible, escape, escape_attr, required_badge};
use crate::models::{HttpMethod, Operation, Parameter, Response, Scalar};

/// Styling class for well-known status codes
pub fn status_class(code: &str) -> Option<&'static str> {
    match code {
        "200" | "201" | "204" => Some("status-success"),
        "400" | "401" | "403" => Some("status-warning"),
        "404" | "500" | "502" | "503" => Some("status-error"),
        _ => None,
    }
}

fn parameter_row(parameter: &Parameter) -> String {
    let (location, type_html, required) = match parameter.body_schema() {
        // body payloads are never optional
        Some(schema) => {
            let type_html = match schema.descriptor.reference_name() {
                Some(name) => type_span(name),
                None => format_type(&schema.descriptor),
            };
            ("body".to_string(), type_html, true)
        }
        None => (
            escape(parameter.location()),
            format_type(&parameter.descriptor),
            parameter.is_required(),
        ),
    };

    [
        "    <tr>".to_string(),
        format!("      <td><code>{}</code></td>", escape(parameter.name())),
        format!("      <td>{}</td>", location),
        format!("      <td>{}</td>", type_html),
        format!("      <td>{}</td>", required_badge(required)),
        format!("      <td>{}</td>", escape(parameter.description())),
        "    </tr>".to_string(),
    ]
    .join("\n")
}

/// Parameter table of one operation; empty string when there are no parameters
pub fn render_parameters(parameters: &[Parameter]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let mut parts = vec![
        r#"<div class="section-title">Parameters</div>"#.to_string(),
        r#"<table class="param-table">"#.to_string(),
        "  <thead>".to_string(),
        "    <tr>".to_string(),
        "      <th>Name</th>".to_string(),
        "      <th>Location</th>".to_string(),
        "      <th>Type</th>".to_string(),
        "      <th>Required</th>".to_string(),
        "      <th>Description</th>".to_string(),
        "    </tr>".to_string(),
        "  </thead>".to_string(),
        "  <tbody>".to_string(),
    ];
    parts.extend(parameters.iter().map(parameter_row));
    parts.push("  </tbody>".to_string());
    parts.push("</table>".to_string());
    parts.join("\n")
}

fn render_response(code: &str, response: &Response) -> String {
    let class = match status_class(code) {
        Some(class) => format!("response-status {}", class),
        None => "response-status".to_string(),
    };
    let label = format!(r#"<span class="{}">{}</span>"#, class, escape(code));

    let mut body = Vec::new();
    if !response.description().is_empty() {
        body.push(format!("<p>{}</p>", escape(response.description())));
    }

    // inline response schemas are not shown, only references
    if let Some(name) = response
        .schema
        .as_ref()
        .and_then(|schema| schema.descriptor.reference_name())
    {
        body.push(format!(
            "<p><strong>Response Model:</strong> <code>{}</code></p>",
            escape(name)
        ));
    }

    collapsible(&label, &body.join("\n"))
}

/// Collapsible "Responses" section, emitted even for an empty map
pub fn render_responses(responses: &IndexMap<Scalar, Response>) -> String {
    let blocks: Vec<String> = responses
        .iter()
        .map(|(code, response)| render_response(code.as_str(), response))
        .collect();

    collapsible(
        r#"<span class="section-label">📤 Responses</span>"#,
        &blocks.join("\n"),
    )
}

/// One collapsible endpoint block: badges, description, request and responses
pub fn render_endpoint(
    path: &str,
    method: HttpMethod,
    operation: &Operation,
    tag: Option<&str>,
) -> String {
    let mut parts = vec![
        format!(
            r#"<div class="endpoint" id="endpoint-{}-{}">"#,
            method,
            escape_attr(path)
        ),
        r#"  <div class="endpoint-header" onclick="toggleCard(this)">"#.to_string(),
        format!(
            r#"    <span class="method-badge method-{}">{}</span>"#,
            method,
            method.as_str().to_uppercase()
        ),
        format!(r#"    <span class="endpoint-path">{}</span>"#, escape(path)),
    ];

    if let Some(tag) = tag {
        parts.push(format!(r#"    <span class="endpoint-tag">{}</span>"#, escape(tag)));
    }

    parts.push(r#"    <span class="expand-icon">▼</span>"#.to_string());
    parts.push("  </div>".to_string());
    parts.push(r#"  <div class="endpoint-body">"#.to_string());

    let summary = operation.summary();
    let description = operation.description();
    if !summary.is_empty() || !description.is_empty() {
        parts.push(r#"    <div class="endpoint-description">"#.to_string());
        if !summary.is_empty() {
            parts.push(format!("      <strong>{}</strong>", escape(summary)));
        }
        if !description.is_empty() {
            parts.push(format!("      <p>{}</p>", escape(description)));
        }
        parts.push("    </div>".to_string());
    }

    let parameters = operation.parameters();
    if !parameters.is_empty() {
        parts.push(collapsible(
            r#"<span class="section-label">📥 Request</span>"#,
            &render_parameters(parameters),
        ));
    }

    if let Some(responses) = operation.responses() {
        parts.push(render_responses(responses));
    }

    parts.push("  </div>".to_string());
    parts.push("</div>".to_string());
    parts.push(String::new());
    parts.join("\n")
}
