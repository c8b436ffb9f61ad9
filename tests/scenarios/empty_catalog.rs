//! Test: Empty Catalog - header and footer only, success fall-through

use crate::helpers::*;
use modelci::core::Catalog;
use modelci::generation::ScriptRenderer;

/// An empty catalog renders the fixed frame with no command blocks
#[test]
fn test_empty_catalog_renders_frame_only() {
    let generated = generate(Catalog::new("/root"));

    assert!(generated.commands.is_empty());
    assert_script_frame(&generated.script);
    assert!(!generated.script.contains("log=$("));
    assert!(!generated.script.contains("FAIL=$((FAIL+1))"));
}

/// With no commands nothing can bump the counter, so `exit 127` is unreachable
#[test]
fn test_empty_script_only_assigns_counter_once() {
    let script = ScriptRenderer::new().render::<String>(&[]).unwrap();

    assert_eq!(script.matches("FAIL=").count(), 1);
    assert!(script.contains("FAIL=0"));
}

/// A catalog whose every descriptor is disabled renders like an empty one
#[test]
fn test_all_disabled_matches_empty() {
    let disabled = Catalog::new("/root")
        .with_model("a:m", skipped_model("m", &["x/f.yang"]))
        .with_model("b:n", skipped_model("n", &["x/g.yang"]));

    assert_eq!(generate(disabled).script, generate(Catalog::new("/root")).script);
}
