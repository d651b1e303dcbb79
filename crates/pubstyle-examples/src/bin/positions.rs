// File: crates/pubstyle-examples/src/bin/positions.rs
// Summary: Renders the CMS label in each of its four positions to PNGs for visual review.

use pubstyle_core::{CmsCanvas, CmsCanvasOptions, Position};

fn main() {
    let opts = CmsCanvasOptions::default();
    for position in Position::ALL {
        let mut canvas = CmsCanvas::new(&opts).expect("create canvas");
        {
            let mut session = canvas.enter();
            session.draw_frame();
            session.decorate("35.9 fb^{-1} (13 TeV)", position, "Preliminary");
        }
        let out = std::path::PathBuf::from(format!("target/out/example_cms_{position}.png"));
        canvas.canvas_mut().save_png(&out).expect("write png");
        println!("Wrote {}", out.display());
    }
}
