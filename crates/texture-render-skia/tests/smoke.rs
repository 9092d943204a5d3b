// File: crates/texture-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use texture_core::{Composition, Language, TexturalTriangle};
use texture_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};

#[test]
fn render_smoke_png() {
    let triangle = TexturalTriangle::with_language(Language::PtBr);
    let sample = Composition::new(20.0, 20.0, 60.0).unwrap();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    render_to_png(&triangle, Some(&sample), &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&triangle, None, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
