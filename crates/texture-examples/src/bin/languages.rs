// File: crates/texture-examples/src/bin/languages.rs
// Summary: Minimal example that renders the empty triangle once per label language to PNG.

use texture_core::{Language, TexturalTriangle};
use texture_render_skia::{render_to_png, RenderOptions};

fn main() {
    let opts = RenderOptions::default();
    for lang in Language::ALL {
        let triangle = TexturalTriangle::with_language(lang);
        let out = std::path::PathBuf::from(format!("target/out/example_{}.png", lang.code()));
        render_to_png(&triangle, None, &opts, &out).expect("render to png");
        println!("Wrote {}", out.display());
    }
}
