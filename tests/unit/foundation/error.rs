use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DuelvizError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DuelvizError::data("x").to_string().contains("data error:"));
    assert!(
        DuelvizError::template("x")
            .to_string()
            .contains("template error:")
    );
    assert!(
        DuelvizError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DuelvizError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
