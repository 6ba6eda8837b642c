//! Renders a solved 3x3x3 cube with one annotation arrow to stdout.
//!
//! ```sh
//! cargo run --example render > cube.svg
//! ```

use cubeviz::render::{render, svg, ArrowSpec, Color, FaceletColors, RenderOptions};
use cubeviz::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let colors = FaceletColors::solved(3)?;
    let options = RenderOptions {
        size: 256,
        background: Some(Color::WHITE),
        arrows: vec![ArrowSpec {
            color: Color::GRAY,
            ..ArrowSpec::new(&["U0", "U2", "U8"])
        }],
        ..RenderOptions::default()
    };

    let scene = render(3, &colors, &options)?;
    print!("{}", svg::to_svg(&scene));
    Ok(())
}
