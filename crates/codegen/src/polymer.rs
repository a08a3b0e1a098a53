//! Polymer 3 exporter: token stream to a custom-element module.
//!
//! This is the minimal third target: the stream is replayed into an HTML
//! template string, element imports are collected for the Vaadin tags that
//! appear, and the result is wrapped in a `PolymerElement` subclass with a
//! `customElements.define` registration.

use crate::kebab_to_pascal;

fn element_import(tag: &str) -> Option<&'static str> {
    let import = match tag {
        "vaadin-button" => "import \"@vaadin/vaadin-button/vaadin-button.js\";",
        "vaadin-checkbox" => "import \"@vaadin/vaadin-checkbox/vaadin-checkbox.js\";",
        "vaadin-checkbox-group" => {
            "import \"@vaadin/vaadin-checkbox/theme/lumo/vaadin-checkbox-group.js\";"
        }
        "vaadin-radio-button" => {
            "import \"@vaadin/vaadin-radio-button/vaadin-radio-button.js\";"
        }
        "vaadin-radio-group" => {
            "import \"@vaadin/vaadin-radio-button/theme/lumo/vaadin-radio-group.js\";"
        }
        "vaadin-select" => "import \"@vaadin/vaadin-select/vaadin-select.js\";",
        "vaadin-item" => "import \"@vaadin/vaadin-item/vaadin-item.js\";",
        "vaadin-combo-box" => "import \"@vaadin/vaadin-combo-box/vaadin-combo-box.js\";",
        "vaadin-date-picker" => "import \"@vaadin/vaadin-date-picker/vaadin-date-picker.js\";",
        "vaadin-time-picker" => "import \"@vaadin/vaadin-time-picker/vaadin-time-picker.js\";",
        "unide-grid" | "vaadin-grid" => "import \"@vaadin/vaadin-grid/vaadin-grid.js\";",
        "vaadin-text-field" => "import \"@vaadin/vaadin-text-field/vaadin-text-field.js\";",
        "vaadin-password-field" => {
            "import \"@vaadin/vaadin-text-field/theme/lumo/vaadin-password-field.js\";"
        }
        "vaadin-number-field" => {
            "import \"@vaadin/vaadin-text-field/theme/lumo/vaadin-number-field.js\";"
        }
        "vaadin-email-field" => {
            "import \"@vaadin/vaadin-text-field/theme/lumo/vaadin-email-field.js\";"
        }
        "vaadin-split-layout" => {
            "import \"@vaadin/vaadin-split-layout/theme/lumo/vaadin-split-layout.js\";"
        }
        "vaadin-vertical-layout" => {
            "import \"@vaadin/vaadin-ordered-layout/theme/lumo/vaadin-vertical-layout.js\";"
        }
        "vaadin-horizontal-layout" => {
            "import \"@vaadin/vaadin-ordered-layout/theme/lumo/vaadin-horizontal-layout.js\";"
        }
        "vaadin-tabs" => "import \"@vaadin/vaadin-tabs/theme/lumo/vaadin-tabs.js\";",
        "vaadin-tab" => "import \"@vaadin/vaadin-tabs/theme/lumo/vaadin-tab.js\";",
        _ => return None,
    };
    Some(import)
}

/// Generates a Polymer 3 component module from a token stream.
///
/// `tag_name` is the kebab-case custom-element name the module registers.
pub fn export(tag_name: &str, tokens: &[impl AsRef<str>]) -> String {
    let class_name = kebab_to_pascal(tag_name);

    let mut values: Vec<String> = Vec::new();
    let mut tag_stack: Vec<String> = Vec::new();
    let mut imports: Vec<&'static str> = Vec::new();
    let mut template = String::new();
    let mut current_closed = true;

    for token in tokens {
        match token.as_ref().trim() {
            "(" => {
                let Some(tag) = values.pop() else {
                    log::warn!("polymer export: '(' with no pending tag, skipping");
                    continue;
                };
                if !current_closed {
                    template.push_str(">\n");
                }
                if let Some(import) = element_import(&tag) {
                    if !imports.contains(&import) {
                        imports.push(import);
                    }
                }
                template.push_str(&format!("<{tag}"));
                current_closed = false;
                tag_stack.push(tag);
            }
            ")" => {
                if !current_closed {
                    template.push_str(">\n");
                    current_closed = true;
                }
                match tag_stack.pop() {
                    Some(tag) => template.push_str(&format!("</{tag}>\n")),
                    None => log::warn!("polymer export: ')' at stream root, skipping"),
                }
            }
            "=" => {
                let value = values.pop();
                let name = values.pop();
                let (Some(name), Some(value)) = (name, value) else {
                    log::warn!("polymer export: '=' without a name/value pair, skipping");
                    continue;
                };
                template.push_str(&format!(" {name}=\"{value}\""));
            }
            value => values.push(value.to_string()),
        }
    }

    let import_lines: String = imports
        .iter()
        .map(|import| format!("{import}\n"))
        .collect();

    format!(
        "import {{ PolymerElement, html }} from '@polymer/polymer/polymer-element.js';\n\
         {import_lines}\
         \n\
         class {class_name} extends PolymerElement {{\n\
         static get template() {{\n\
         return html`{template}`;\n\
         }}\n\
         }}\n\
         customElements.define(\"{tag_name}\", {class_name});\n"
    )
}
