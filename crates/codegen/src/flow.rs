//! Vaadin Flow exporter: token stream to a single Java view class.
//!
//! The emitted class extends `Div`, instantiates one component field per
//! element in the stream and wires parent/child structure through `add`
//! calls. Grid elements get a generated static inner type derived from the
//! `columnCaptions` attribute, and their `items` JSON is expanded into
//! `ArrayList` population code.

use std::collections::{BTreeSet, HashMap};

use crate::{kebab_to_pascal, lower_first};

/// Java class and import line for a known element tag.
struct FlowImport {
    class: &'static str,
    import: &'static str,
}

fn flow_import(tag: &str) -> Option<FlowImport> {
    let (class, import) = match tag {
        "div" => ("Div", "import com.vaadin.flow.component.html.Div;"),
        "span" => ("Span", "import com.vaadin.flow.component.html.Span;"),
        "vaadin-button" => ("Button", "import com.vaadin.flow.component.button.Button;"),
        "vaadin-checkbox" => (
            "Checkbox",
            "import com.vaadin.flow.component.checkbox.Checkbox;",
        ),
        "vaadin-checkbox-group" => (
            "CheckboxGroup",
            "import com.vaadin.flow.component.checkbox.CheckboxGroup;",
        ),
        "vaadin-radio-group" => (
            "RadioButtonGroup",
            "import com.vaadin.flow.component.radiobutton.RadioButtonGroup;",
        ),
        "vaadin-select" => ("Select", "import com.vaadin.flow.component.select.Select;"),
        "vaadin-combo-box" => (
            "ComboBox",
            "import com.vaadin.flow.component.combobox.ComboBox;",
        ),
        "vaadin-date-picker" => (
            "DatePicker",
            "import com.vaadin.flow.component.datepicker.DatePicker;",
        ),
        "vaadin-time-picker" => (
            "TimePicker",
            "import com.vaadin.flow.component.timepicker.TimePicker;",
        ),
        "vaadin-text-field" => (
            "TextField",
            "import com.vaadin.flow.component.textfield.TextField;",
        ),
        "vaadin-password-field" => (
            "PasswordField",
            "import com.vaadin.flow.component.textfield.PasswordField;",
        ),
        "vaadin-number-field" => (
            "NumberField",
            "import com.vaadin.flow.component.textfield.NumberField;",
        ),
        "vaadin-email-field" => (
            "EmailField",
            "import com.vaadin.flow.component.textfield.EmailField;",
        ),
        "unide-grid" => ("Grid", "import com.vaadin.flow.component.grid.Grid;"),
        "vaadin-split-layout" => (
            "SplitLayout",
            "import com.vaadin.flow.component.splitlayout.SplitLayout;",
        ),
        "vaadin-vertical-layout" => (
            "VerticalLayout",
            "import com.vaadin.flow.component.orderedlayout.VerticalLayout;",
        ),
        "vaadin-horizontal-layout" => (
            "HorizontalLayout",
            "import com.vaadin.flow.component.orderedlayout.HorizontalLayout;",
        ),
        "vaadin-tabs" => ("Tabs", "import com.vaadin.flow.component.tabs.Tabs;"),
        "vaadin-tab" => ("Tab", "import com.vaadin.flow.component.tabs.Tab;"),
        _ => return None,
    };
    Some(FlowImport { class, import })
}

/// Names the element API treats as properties rather than attributes.
const ELEMENT_PROPERTIES: &[&str] = &["textContent", "items", "orientation", "style", "innerHTML"];

/// Generates a Flow view class from a token stream.
///
/// `design_name` is the kebab-case design name; it becomes the Java class
/// name in PascalCase.
pub fn export(design_name: &str, tokens: &[impl AsRef<str>]) -> String {
    let class_name = kebab_to_pascal(design_name);
    let grid_type = format!("{class_name}GridType");

    let mut values: Vec<String> = Vec::new();
    let mut var_stack: Vec<String> = Vec::new();
    let mut tag_stack: Vec<String> = Vec::new();
    let mut current_var = String::from("this");
    let mut var_counts: HashMap<String, usize> = HashMap::new();
    let mut imports: BTreeSet<&'static str> = BTreeSet::new();
    let mut internal_classes = String::new();
    let mut body = String::new();

    imports.insert("import com.vaadin.flow.component.html.Div;");

    for token in tokens {
        match token.as_ref().trim() {
            "(" => {
                let Some(tag) = values.pop() else {
                    log::warn!("flow export: '(' with no pending tag, skipping");
                    continue;
                };
                let class = match flow_import(&tag) {
                    Some(known) => {
                        imports.insert(known.import);
                        known.class.to_string()
                    }
                    None => kebab_to_pascal(&tag),
                };

                let base = lower_first(&class);
                let count = var_counts.entry(base.clone()).or_insert(0);
                *count += 1;
                let var = if *count == 1 {
                    base
                } else {
                    format!("{base}{count}")
                };

                if tag == "unide-grid" {
                    body.push_str(&format!(
                        "{class}<{grid_type}> {var} = new {class}<>();\n{current_var}.add({var});\n"
                    ));
                } else {
                    body.push_str(&format!(
                        "{class} {var} = new {class}();\n{current_var}.add({var});\n"
                    ));
                }

                var_stack.push(std::mem::replace(&mut current_var, var));
                tag_stack.push(tag);
            }
            ")" => {
                if let Some(parent_var) = var_stack.pop() {
                    current_var = parent_var;
                }
                tag_stack.pop();
            }
            "=" => {
                let value = values.pop();
                let name = values.pop();
                let (Some(name), Some(value)) = (name, value) else {
                    log::warn!("flow export: '=' without a name/value pair, skipping");
                    continue;
                };

                let current_tag = tag_stack.last().map(String::as_str).unwrap_or("");
                if current_tag == "unide-grid"
                    && emit_grid_attr(&name, &value, &current_var, &grid_type, &mut body, &mut internal_classes)
                {
                    continue;
                }

                if name == "targetRoute" {
                    body.push_str(&format!(
                        "{current_var}.getElement().addEventListener(\"click\", e -> {{\n\
                         {current_var}.getUI().ifPresent(ui -> ui.navigate(\"{}\"));\n}});\n",
                        kebab_to_pascal(&value)
                    ));
                } else if ELEMENT_PROPERTIES.contains(&name.as_str()) {
                    if name == "textContent" {
                        body.push_str(&format!(
                            "{current_var}.getElement().setText(\"{}\");\n",
                            value.replace('"', "\\\"")
                        ));
                    } else {
                        body.push_str(&format!(
                            "{current_var}.getElement().setProperty(\"{name}\", \"{}\");\n",
                            value.replace('"', "'")
                        ));
                    }
                } else {
                    body.push_str(&format!(
                        "{current_var}.getElement().setAttribute(\"{name}\", \"{value}\");\n"
                    ));
                }
            }
            value => values.push(value.to_string()),
        }
    }

    let import_lines: String = imports
        .iter()
        .map(|import| format!("{import}\n"))
        .collect();

    format!(
        "package sketch.app;\n\
         \n\
         {import_lines}\
         import java.util.ArrayList;\n\
         import com.vaadin.flow.router.PageTitle;\n\
         import com.vaadin.flow.router.Route;\n\
         \n\
         @Route(\"\")\n\
         public class {class_name} extends Div {{\n\
         {internal_classes}\
         public {class_name}() {{\n\
         {body}\
         }}\n\
         }}\n"
    )
}

/// Handles the two grid-specific attributes. Returns false when the
/// attribute is not grid-specific and the generic path should run.
fn emit_grid_attr(
    name: &str,
    value: &str,
    current_var: &str,
    grid_type: &str,
    body: &mut String,
    internal_classes: &mut String,
) -> bool {
    match name {
        "items" => {
            let Ok(rows) = serde_json::from_str::<Vec<serde_json::Map<String, serde_json::Value>>>(
                value,
            ) else {
                log::warn!("flow export: unparsable grid items payload, skipping");
                return true;
            };
            body.push_str(&format!(
                "ArrayList<{grid_type}> items = new ArrayList<>();\n{grid_type} item;\n"
            ));
            for row in &rows {
                body.push_str(&format!("item = new {grid_type}();\n"));
                for (column, cell) in row {
                    let cell = cell.as_str().unwrap_or_default();
                    body.push_str(&format!("item.set{column}(\"{cell}\");\n"));
                }
                body.push_str("items.add(item);\n");
            }
            body.push_str(&format!("{current_var}.setItems(items);\n"));
            true
        }
        "columnCaptions" => {
            #[derive(serde::Deserialize)]
            struct Caption {
                name: String,
                path: String,
            }
            let Ok(captions) = serde_json::from_str::<Vec<Caption>>(value) else {
                log::warn!("flow export: unparsable columnCaptions payload, skipping");
                return true;
            };
            let mut fields = String::new();
            let mut methods = String::new();
            for caption in &captions {
                body.push_str(&format!(
                    "{current_var}.addColumn({grid_type}::get{path}).setHeader(\"{name}\");\n",
                    path = caption.path,
                    name = caption.name
                ));
                fields.push_str(&format!("private String {};\n", caption.path));
                methods.push_str(&format!(
                    "public String get{path}() {{\nreturn this.{path};\n}}\n\
                     public void set{path}(String value) {{\nthis.{path} = value;\n}}\n",
                    path = caption.path
                ));
            }
            internal_classes.push_str(&format!(
                "public static class {grid_type} {{\n{fields}{methods}}}\n"
            ));
            true
        }
        _ => false,
    }
}
