use super::escape;
use crate::models::{DescriptorKind, TypeDescriptor};

/// Wrap an already computed label in the styled type span
pub fn type_span(label: &str) -> String {
    format!(r#"<span class="param-type">{}</span>"#, escape(label))
}

/// Short label for a type descriptor.
///
/// A reference shows the referenced name and nothing else. Inline types get
/// ` (format)` and ` (enum)` suffixes. Arrays with an item descriptor show
/// `array[<item>]` and drop any format or enum suffix of the outer descriptor.
pub fn type_label(descriptor: &TypeDescriptor) -> String {
    match descriptor.kind() {
        DescriptorKind::Reference(name) => name.to_string(),
        DescriptorKind::Array(items) => {
            let item = items
                .descriptor
                .reference_name()
                .unwrap_or_else(|| items.descriptor.type_name());
            format!("array[{}]", item)
        }
        DescriptorKind::Inline { base, format, enumerated } => {
            let mut label = base.to_string();
            if let Some(format) = format {
                label.push_str(&format!(" ({})", format));
            }
            if enumerated {
                label.push_str(" (enum)");
            }
            label
        }
    }
}

/// Escaped type label wrapped in its span
pub fn format_type(descriptor: &TypeDescriptor) -> String {
    type_span(&type_label(descriptor))
}
