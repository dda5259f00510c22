//! Draw a box on the chosen backend.
//!
//! Run with: cargo run --example draw --features tracing -- 5 4 svg

use asciibox::render::defaults;
use asciibox::{BoxGrid, RenderOptions, SurfaceKind, SvgSurface, TextSurface, draw_on};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let width = args.next().unwrap_or_else(|| "5".to_string());
    let height = args.next().unwrap_or_else(|| "4".to_string());
    let backend = args.next().unwrap_or_else(|| "plain".to_string());

    let grid = BoxGrid::create(width, height)?;

    let mut surface = match backend.as_str() {
        "plain" => {
            print!("{grid}");
            return Ok(());
        }
        "svg" => SurfaceKind::from(SvgSurface::new()),
        "text" => SurfaceKind::from(TextSurface::new(defaults::CELL_SIZE)),
        other => miette::bail!("unknown backend {other:?}, expected plain, svg or text"),
    };

    draw_on(&grid, &mut surface, &RenderOptions::default())?;
    match surface {
        SurfaceKind::Svg(svg) => print!("{}", svg.finish()?),
        SurfaceKind::Text(text) => print!("{}", text.to_text()),
    }
    Ok(())
}
