use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use hotspotkit::{editor_options, init_logging, Config, QuestionParams, BUILD_DATE, VERSION};
use hotspotkit_core::Size;
use hotspotkit_editor::headless::{HeadlessDialogHost, HeadlessSurface, PassthroughRenderer};
use hotspotkit_editor::{
    Collaborators, FieldSchema, HotspotEditor, ImageField, ImageParams, SurfaceMetrics,
};

#[derive(Parser)]
#[command(name = "hotspotkit")]
#[command(about = "Check and normalize saved image hotspot questions")]
struct Args {
    /// Saved question parameters (JSON)
    question: PathBuf,

    /// Width of the image container in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Height of the image container in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Ok(Config::load_or_default(&path)?),
            Err(_) => Ok(Config::default()),
        },
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    // Initialize logging
    init_logging(&config.logging)?;
    tracing::info!("hotspotkit {} (built {})", VERSION, BUILD_DATE);

    let json = std::fs::read_to_string(&args.question)
        .with_context(|| format!("Failed to read {}", args.question.display()))?;
    let params = QuestionParams::from_json(&json)
        .with_context(|| format!("Invalid question parameters in {}", args.question.display()))?;

    let container = Size::new(f64::from(args.width), f64::from(args.height));
    let image = ImageParams::new(args.question.display().to_string(), args.width, args.height);
    let collaborators = Collaborators {
        surface: HeadlessSurface::new(SurfaceMetrics::new(
            container,
            config.editor.base_font_size,
        )),
        renderer: PassthroughRenderer,
        host: HeadlessDialogHost::new(container.width, container, Size::default()),
        image_field: Arc::new(ImageField::with_image(image)),
    };
    let editor = HotspotEditor::new(
        Some(params),
        FieldSchema::default(),
        collaborators,
        editor_options(&config.editor),
    );

    if !editor.collection().is_consistent(editor.surface()) {
        bail!("Hotspot collection is out of sync with its elements");
    }
    tracing::info!("{} hotspots checked", editor.collection().count());

    let normalized = editor.to_json()?;
    match &args.output {
        Some(path) => std::fs::write(path, normalized)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{normalized}"),
    }

    Ok(())
}
