//! Static page shell: inline stylesheet and the expand/collapse script.

use super::escape;

const PAGE_START: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

const STYLE: &str = r#"<style>
  body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    margin: 0;
    padding: 20px;
    background: #f8fafc;
  }
  .container {
    max-width: 1200px;
    margin: 0 auto;
  }
  .api-header {
    background: linear-gradient(90deg, #1e3a8a 0%, #3b82f6 100%);
    color: white;
    padding: 30px;
    border-radius: 8px;
    margin-bottom: 30px;
  }
  .api-header h1 {
    margin: 0;
    font-size: 2.5em;
  }
  .api-info {
    margin-top: 10px;
    opacity: 0.9;
  }
  .api-description {
    margin-top: 15px;
    opacity: 0.95;
  }
  .api-info code {
    background: rgba(255,255,255,0.2);
    padding: 2px 6px;
    border-radius: 3px;
  }
  .section-header {
    font-size: 1.8em;
    color: #1e293b;
    margin: 30px 0 20px 0;
    padding-bottom: 10px;
    border-bottom: 3px solid #3b82f6;
  }
  .endpoint {
    background: #f8fafc;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    margin-bottom: 20px;
    overflow: hidden;
  }
  .endpoint-header {
    background: white;
    padding: 15px 20px;
    border-bottom: 1px solid #e2e8f0;
    cursor: pointer;
    display: flex;
    align-items: center;
    gap: 15px;
    transition: background 0.2s;
  }
  .endpoint-header:hover {
    background: #f9fafb;
  }
  .method-badge {
    font-weight: bold;
    padding: 6px 12px;
    border-radius: 4px;
    font-size: 0.85em;
    text-transform: uppercase;
    min-width: 60px;
    text-align: center;
  }
  .method-post {
    background: #10b981;
    color: white;
  }
  .method-get {
    background: #3b82f6;
    color: white;
  }
  .method-put {
    background: #f59e0b;
    color: white;
  }
  .method-delete {
    background: #ef4444;
    color: white;
  }
  .method-patch {
    background: #8b5cf6;
    color: white;
  }
  .method-options, .method-head {
    background: #64748b;
    color: white;
  }
  .endpoint-path {
    font-family: 'Courier New', monospace;
    font-size: 1.1em;
    color: #1e293b;
    flex: 1;
  }
  .endpoint-tag {
    background: #e0e7ff;
    color: #4338ca;
    padding: 4px 12px;
    border-radius: 12px;
    font-size: 0.85em;
  }
  .expand-icon {
    transition: transform 0.3s;
    font-size: 1.2em;
    color: #64748b;
  }
  .expand-icon.expanded {
    transform: rotate(180deg);
  }
  .endpoint-body {
    padding: 20px;
    display: none;
  }
  .endpoint-body.show {
    display: block;
  }
  .endpoint-description {
    background: #fff;
    padding: 15px;
    border-radius: 6px;
    margin-bottom: 20px;
    border-left: 4px solid #3b82f6;
  }
  .section-title {
    color: #1e293b;
    font-size: 1.2em;
    font-weight: 600;
    margin: 20px 0 10px 0;
    padding-bottom: 5px;
    border-bottom: 2px solid #e2e8f0;
  }
  .collapsible-section {
    margin: 15px 0;
  }
  .collapsible-header {
    background: #f8fafc;
    padding: 10px 15px;
    border-radius: 6px;
    cursor: pointer;
    display: flex;
    align-items: center;
    gap: 10px;
    font-weight: 600;
    color: #1e293b;
    transition: background 0.2s;
    border: 1px solid #e2e8f0;
  }
  .collapsible-header:hover {
    background: #f1f5f9;
  }
  .collapsible-content {
    margin-top: 10px;
    display: none;
  }
  .collapsible-content.show {
    display: block;
  }
  .param-table, .response-table {
    width: 100%;
    background: white;
    border-collapse: collapse;
    border-radius: 6px;
    overflow: hidden;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
    margin: 10px 0;
  }
  .param-table th, .response-table th {
    background: #f1f5f9;
    padding: 12px;
    text-align: left;
    font-weight: 600;
    color: #475569;
    border-bottom: 2px solid #e2e8f0;
  }
  .param-table td, .response-table td {
    padding: 12px;
    border-bottom: 1px solid #f1f5f9;
  }
  .param-table tr:last-child td, .response-table tr:last-child td {
    border-bottom: none;
  }
  .param-type {
    color: #7c3aed;
    font-family: 'Courier New', monospace;
    font-size: 0.9em;
  }
  .required-badge {
    background: #fee2e2;
    color: #991b1b;
    padding: 2px 8px;
    border-radius: 4px;
    font-size: 0.75em;
    font-weight: 600;
  }
  .optional-badge {
    background: #f3f4f6;
    color: #6b7280;
    padding: 2px 8px;
    border-radius: 4px;
    font-size: 0.75em;
  }
  .response-status {
    display: inline-block;
    padding: 6px 12px;
    border-radius: 4px;
    font-weight: 600;
    margin: 5px 0;
  }
  .status-success {
    background: #d1fae5;
    color: #065f46;
  }
  .status-warning {
    background: #fed7aa;
    color: #92400e;
  }
  .status-error {
    background: #fecaca;
    color: #991b1b;
  }
  .model-card {
    background: white;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    margin-bottom: 20px;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
    overflow: hidden;
  }
  .model-header {
    padding: 20px;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: space-between;
    transition: background 0.2s;
  }
  .model-header:hover {
    background: #f9fafb;
  }
  .model-title {
    color: #1e293b;
    font-size: 1.3em;
    font-weight: 600;
    display: flex;
    align-items: center;
    gap: 10px;
  }
  .model-type-badge {
    background: #ddd6fe;
    color: #5b21b6;
    padding: 4px 10px;
    border-radius: 4px;
    font-size: 0.7em;
    font-weight: 600;
  }
  .model-body {
    padding: 0 20px 20px 20px;
    display: none;
  }
  .model-body.show {
    display: block;
  }
  .chevron {
    color: #64748b;
    font-size: 0.9em;
  }
  code {
    background: #f1f5f9;
    padding: 2px 6px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
    font-size: 0.9em;
  }
</style>
</head>
<body>
<div class="container">
"#;

const SCRIPT: &str = r#"</div>

<script>
function toggleCard(header) {
  const body = header.nextElementSibling;
  const icon = header.querySelector('.expand-icon');
  const open = body.classList.toggle('show');
  icon.classList.toggle('expanded', open);
}

function toggleSection(header) {
  const content = header.nextElementSibling;
  const chevron = header.querySelector('.chevron');
  const open = content.classList.toggle('show');
  chevron.textContent = open ? '▼' : '▶';
}
</script>
</body>
</html>
"#;

/// Wrap rendered content in the complete HTML document
pub fn render_page(title: &str, content: &str) -> String {
    [
        PAGE_START,
        "<title>",
        escape(title).as_str(),
        "</title>\n",
        STYLE,
        content,
        SCRIPT,
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shell() {
        let html = render_page("A <b> API", "<p>body</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt;b&gt; API</title>"));
        assert!(html.contains("<div class=\"container\">\n<p>body</p></div>"));
        assert!(html.contains("function toggleSection(header)"));
        assert!(html.contains("function toggleCard(header)"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
