//! Generators driven by a real flattened sketch rather than hand-written
//! token streams.

use containment::build_forest;
use interchange::{flatten_with_rng, to_tokens};
use node::Rect;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sketch_tokens() -> Vec<String> {
    let rects = vec![
        Rect::new(0.0, 0.0, 400.0, 200.0),
        Rect::new(10.0, 10.0, 190.0, 50.0).with_text("Search"),
        Rect::new(10.0, 60.0, 130.0, 100.0),
        Rect::new(210.0, 10.0, 390.0, 60.0).with_text("a;b;c"),
    ];
    let forest = build_forest(&rects);
    let instructions = flatten_with_rng(&forest, &mut StdRng::seed_from_u64(11));
    to_tokens(&instructions)
}

#[test]
fn flow_export_covers_all_sketch_elements() {
    let java = codegen::flow::export("demo-view", &sketch_tokens());
    assert!(java.contains("public class DemoView extends Div {"));
    assert!(java.contains("TextField textField = new TextField();"));
    assert!(java.contains("textField.getElement().setText(\"Search\");"));
    assert!(java.contains("Button button = new Button();"));
    assert!(java.contains("ComboBox comboBox = new ComboBox();"));
    assert!(java.contains(
        "comboBox.getElement().setProperty(\"items\", \"['a','b','c']\");"
    ));
    // Children attach to the root layout variable, not to `this`.
    assert!(java.contains("div.add(textField);"));
}

#[test]
fn polymer_export_mirrors_the_stream() {
    let js = codegen::polymer::export("demo-view", &sketch_tokens());
    assert!(js.contains("<vaadin-text-field textContent=\"Search\">"));
    assert!(js.contains("<vaadin-combo-box items="));
    assert!(js.contains("customElements.define(\"demo-view\", DemoView);"));
}
