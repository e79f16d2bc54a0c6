use super::*;

const EDITOR_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- drawn in a vector editor -->
<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="100" height="50">
  <style><![CDATA[ text { font-family: sans-serif; } ]]></style>
  <g id="layer" inkscape:label="Layer &amp; 1">
    <rect id="bar" x="0" y="0" width="10" height="5"/>
    <text id="label">A &lt; B</text>
    <!-- inner note -->
  </g>
</svg>
"##;

#[test]
fn parse_preserves_qualified_names_and_unescapes() {
    let doc = SvgDocument::parse(EDITOR_SVG).unwrap();
    assert_eq!(doc.root().name, "svg");
    let layer = doc.find("layer").unwrap();
    assert_eq!(layer.attr("inkscape:label"), Some("Layer & 1"));
    assert_eq!(doc.find("label").unwrap().text(), "A < B");
    assert_eq!(doc.ids(), ["layer", "bar", "label"]);
}

#[test]
fn serialize_round_trips_through_parse() {
    let doc = SvgDocument::parse(EDITOR_SVG).unwrap();
    let out = doc.to_svg_string().unwrap();
    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(out.contains("<!-- drawn in a vector editor -->"));
    assert!(out.contains("<![CDATA[ text { font-family: sans-serif; } ]]>"));
    assert!(out.contains("<!-- inner note -->"));
    assert!(out.contains("A &lt; B"));
    assert!(out.contains(r#"inkscape:label="Layer &amp; 1""#));

    let again = SvgDocument::parse(&out).unwrap();
    assert_eq!(again.root(), doc.root());
}

#[test]
fn mutations_touch_only_the_named_element() {
    let mut doc = SvgDocument::parse(EDITOR_SVG).unwrap();
    {
        let bar = doc.find_mut("bar").unwrap();
        bar.set_attr("width", "42");
        bar.set_attr("fill", "#ff0000");
        assert_eq!(bar.remove_attr("height").as_deref(), Some("5"));
    }
    doc.require_mut("label").unwrap().set_text("new & improved");
    assert!(doc.require_mut("missing").is_err());

    let bar = doc.find("bar").unwrap();
    let keys: Vec<_> = bar.attrs().map(|(k, _)| k).collect();
    assert_eq!(keys, ["id", "x", "y", "width", "fill"]);
    assert_eq!(bar.attr("width"), Some("42"));

    let out = doc.to_svg_string().unwrap();
    assert!(out.contains("new &amp; improved"));
}

#[test]
fn replace_clones_in_place_and_remove_drops() {
    let mut doc = SvgDocument::parse(EDITOR_SVG).unwrap();
    let proto = doc.find("layer").unwrap().clone();
    let copies: Vec<_> = (0..2)
        .map(|i| proto.clone_renamed(&|id: &str| format!("{id}-{i}")))
        .collect();
    let removed = doc.replace("layer", copies).unwrap();
    assert_eq!(removed.id(), Some("layer"));
    assert_eq!(
        doc.ids(),
        ["layer-0", "bar-0", "label-0", "layer-1", "bar-1", "label-1"]
    );

    assert!(doc.remove("bar-1").is_some());
    assert!(doc.remove("bar-1").is_none());
    assert!(doc.find("label-1").is_some());
}

#[test]
fn set_text_with_empty_string_empties_element() {
    let mut el = Element::new("text");
    el.set_text("x");
    assert_eq!(el.text(), "x");
    el.set_text("");
    assert!(el.children.is_empty());
}

#[test]
fn rejects_malformed_documents() {
    assert!(SvgDocument::parse("").is_err());
    assert!(SvgDocument::parse("<svg><g></svg>").is_err());
    assert!(SvgDocument::parse("<svg/><svg/>").is_err());
    let err = SvgDocument::parse("<html/>").unwrap_err();
    assert!(err.to_string().contains("<svg>"));
}
