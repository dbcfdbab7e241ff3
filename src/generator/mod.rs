use anyhow::{Context, Result};
use log::{debug, info};
use std::{fs, path::Path};

use crate::models::ApiDescription;

pub mod endpoint;
pub mod model;
pub mod template;
pub mod types;

pub use endpoint::{render_endpoint, render_parameters, render_responses};
pub use model::render_model;
pub use types::format_type;

/// Escape text content for HTML
pub(crate) fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape a value placed inside a double-quoted attribute
pub(crate) fn escape_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

pub(crate) fn required_badge(required: bool) -> &'static str {
    if required {
        r#"<span class="required-badge">required</span>"#
    } else {
        r#"<span class="optional-badge">optional</span>"#
    }
}

/// A collapsible block: clickable header with a chevron, hidden content below.
/// `label` is inserted as-is and must already be escaped.
pub(crate) fn collapsible(label: &str, content: &str) -> String {
    [
        r#"<div class="collapsible-section">"#.to_string(),
        r#"  <div class="collapsible-header" onclick="toggleSection(this)">"#.to_string(),
        r#"    <span class="chevron">▶</span>"#.to_string(),
        format!("    {}", label),
        "  </div>".to_string(),
        r#"  <div class="collapsible-content">"#.to_string(),
        content.to_string(),
        "  </div>".to_string(),
        "</div>".to_string(),
        String::new(),
    ]
    .join("\n")
}

/// Renders an API description into a single HTML page
pub struct Generator {
    api: ApiDescription,
}

impl Generator {
    pub fn new(api: ApiDescription) -> Self {
        Self { api }
    }

    /// Title, version, base path and schemes banner
    fn render_header(&self) -> String {
        let api = &self.api;
        let mut parts = vec![
            r#"<div class="api-header">"#.to_string(),
            format!("  <h1>📘 {}</h1>", escape(api.title())),
            r#"  <div class="api-info">"#.to_string(),
            format!(
                r#"    <strong>Version:</strong> <span class="api-version">{}</span> |"#,
                escape(api.version())
            ),
            format!(
                "    <strong>Base Path:</strong> <code>{}</code> |",
                escape(api.base_path())
            ),
            format!(
                r#"    <strong>Schemes:</strong> <span class="api-schemes">{}</span>"#,
                escape(&api.schemes_label())
            ),
            "  </div>".to_string(),
        ];

        if !api.description().is_empty() {
            parts.push(format!(
                r#"  <p class="api-description">{}</p>"#,
                escape(api.description())
            ));
        }

        parts.push("</div>".to_string());
        parts.push(String::new());
        parts.join("\n")
    }

    /// Page body without the surrounding shell
    pub fn render_content(&self) -> String {
        let mut parts = vec![self.render_header()];

        if self.api.has_paths() {
            parts.push(r#"<h2 class="section-header">🔌 Endpoints</h2>"#.to_string());

            let mut count = 0;
            for endpoint in self.api.endpoints() {
                let tag = endpoint.operation.tag();
                parts.push(render_endpoint(
                    endpoint.path,
                    endpoint.method,
                    endpoint.operation,
                    tag,
                ));
                count += 1;
            }
            debug!("Rendered {} endpoints", count);
        }

        if self.api.has_definitions() {
            parts.push(r#"<h2 class="section-header">📦 Data Models</h2>"#.to_string());

            let mut count = 0;
            for (name, schema) in self.api.definitions() {
                parts.push(render_model(name, schema));
                count += 1;
            }
            debug!("Rendered {} data models", count);
        }

        parts.join("\n")
    }

    /// Complete self-contained HTML document
    pub fn render(&self) -> String {
        template::render_page(self.api.title(), &self.render_content())
    }

    /// Render and write the page, creating missing parent directories
    pub fn generate(&self, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path = output_path.as_ref();
        let html = self.render();

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create output directory: {:?}", parent))?;
        }

        fs::write(output_path, html.as_bytes())
            .context(format!("Failed to write to file: {:?}", output_path))?;

        info!("Generated HTML documentation: {:?}", output_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn generator(yaml: &str) -> Generator {
        Generator::new(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_header_defaults() {
        let html = generator("{}").render_content();

        assert!(html.contains("📘 API Documentation"));
        assert!(html.contains(r#"<span class="api-version">v1</span>"#));
        assert!(html.contains("<code>/</code>"));
        assert!(html.contains(r#"<span class="api-schemes">HTTP</span>"#));
        assert!(!html.contains("api-description"));
        assert!(!html.contains("Endpoints"));
        assert!(!html.contains("Data Models"));
    }

    #[test]
    fn test_header_from_info() {
        let html = generator(
            r#"
info:
  title: Shop & Co
  version: "2.1"
  description: Sells <things>
basePath: /api
schemes: [https, wss]
"#,
        )
        .render_content();

        assert!(html.contains("📘 Shop &amp; Co"));
        assert!(html.contains(r#"<span class="api-version">2.1</span>"#));
        assert!(html.contains("<code>/api</code>"));
        assert!(html.contains(r#"<span class="api-schemes">HTTPS, WSS</span>"#));
        assert!(html.contains(r#"<p class="api-description">Sells &lt;things&gt;</p>"#));
    }

    #[test]
    fn test_counts_endpoints_and_models() {
        let html = generator(
            r#"
paths:
  /pets:
    get: {}
    post: {}
    parameters: []
  /pets/{id}:
    delete: {}
    trace: {}
definitions:
  Pet: { type: object }
  Status: { type: string, enum: [a, b] }
"#,
        )
        .render_content();

        assert_eq!(html.matches(r#"<div class="endpoint" "#).count(), 3);
        assert_eq!(html.matches(r#"<div class="model-card" "#).count(), 2);
        assert!(html.contains(r#"id="endpoint-get-/pets""#));
        assert!(html.contains(r#"id="endpoint-post-/pets""#));
        assert!(html.contains(r#"id="endpoint-delete-/pets/{id}""#));
        assert!(html.contains(r#"id="model-Pet""#));
        assert!(html.contains(r#"id="model-Status""#));
    }

    #[test]
    fn test_endpoint_order() {
        let html = generator(
            r#"
paths:
  /b:
    put: {}
    get: {}
  /a:
    get: {}
"#,
        )
        .render_content();

        let put_b = html.find(r#"id="endpoint-put-/b""#).unwrap();
        let get_b = html.find(r#"id="endpoint-get-/b""#).unwrap();
        let get_a = html.find(r#"id="endpoint-get-/a""#).unwrap();
        assert!(put_b < get_b);
        assert!(get_b < get_a);
    }

    #[test]
    fn test_empty_paths_and_definitions_emit_no_sections() {
        let html = generator("{ paths: {}, definitions: {} }").render_content();
        assert!(!html.contains("Endpoints"));
        assert!(!html.contains("Data Models"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let yaml = r#"
info: { title: Twice }
paths:
  /x:
    get:
      responses:
        200: { description: OK }
definitions:
  X: { properties: { a: { type: string } } }
"#;
        assert_eq!(generator(yaml).render(), generator(yaml).render());
    }

    #[test]
    fn test_generate_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("docs").join("api.html");

        generator("info: { title: Nested }").generate(&output).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Nested</title>"));
    }
}
