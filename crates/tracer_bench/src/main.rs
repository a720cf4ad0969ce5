// Renders the benchmark scene and checks its checksum.
// Run with: cargo run --release --bin tracer -- [--options opts.json] [--output out.png] [--parallel]

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use tracer_core::presets::{benchmark_scene, BENCHMARK_CHECKSUM};
use tracer_renderer::{Canvas, Engine, PixelSink, RenderOptions, RenderSummary, DEFAULT_BUCKET_SIZE};

/// Command line settings
#[derive(Debug, Default)]
struct Args {
    options: Option<PathBuf>,
    output: Option<PathBuf>,
    parallel: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--options" => {
                let path = iter.next().context("--options needs a path")?;
                args.options = Some(PathBuf::from(path));
            }
            "--output" => {
                let path = iter.next().context("--output needs a path")?;
                args.output = Some(PathBuf::from(path));
            }
            "--parallel" => args.parallel = true,
            "-h" | "--help" => {
                println!("Usage: tracer [--options <options.json>] [--output <image.png>] [--parallel]");
                std::process::exit(0);
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args()?;

    let options = match &args.options {
        Some(path) => RenderOptions::from_json_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => RenderOptions::benchmark(),
    };
    let verify = options == RenderOptions::benchmark();

    let scene = benchmark_scene();
    let engine = Engine::new(options)?;
    let mut canvas = Canvas::new(engine.options())?;

    log::info!("Starting render (parallel: {})", args.parallel);

    let summary: RenderSummary = if args.parallel {
        let (image, summary) = engine.render_parallel(&scene, DEFAULT_BUCKET_SIZE);
        for y in 0..image.height {
            for x in 0..image.width {
                canvas.set_pixel(x, y, image.get(x, y));
            }
        }
        summary
    } else {
        engine.render(&scene, &mut canvas)
    };

    println!("Checksum: {}", summary.checksum);
    println!("Rendered {} pixels in {:?}", summary.pixels, summary.elapsed);
    println!(
        "Rays: {} primary, {} reflection, {} shadow (max depth {})",
        summary.stats.primary_rays,
        summary.stats.reflection_rays,
        summary.stats.shadow_rays,
        summary.stats.max_depth
    );

    if let Some(path) = &args.output {
        save_canvas(canvas, path)?;
        println!("Saved to {}", path.display());
    }

    if verify {
        if summary.checksum != BENCHMARK_CHECKSUM {
            bail!(tracer_renderer::RenderError::VerificationFailed {
                expected: BENCHMARK_CHECKSUM,
                actual: summary.checksum,
            });
        }
        log::info!("Checksum verified");
    } else {
        log::info!("Custom options, skipping checksum verification");
    }

    Ok(())
}

fn save_canvas(canvas: Canvas, path: &Path) -> Result<()> {
    let (width, height) = (canvas.width(), canvas.height());
    let image = image::RgbaImage::from_raw(width, height, canvas.into_rgba())
        .context("Canvas size does not match its pixel data")?;
    image
        .save(path)
        .with_context(|| format!("Failed to save image to {}", path.display()))?;
    Ok(())
}
