use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ascii_ramp::AsciiRenderer;
use rampart::models::AppConfig;
use rampart::server;

#[derive(Parser)]
#[command(name = "rampart")]
#[command(about = "Turn uploaded images into ASCII art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert an image file to ASCII art directly (no server needed)
    Convert {
        /// Input image file (PNG, JPEG, GIF, BMP, WebP, ...)
        input: PathBuf,

        /// Output text file (defaults to "<input>_ascii.txt" next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output width in characters (defaults to the configured width)
        #[arg(short, long)]
        width: Option<u32>,

        /// Contrast enhancement factor (defaults to the configured factor)
        #[arg(short, long)]
        contrast: Option<f32>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract HTML templates
        #[arg(long)]
        templates: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            width,
            contrast,
        }) => run_convert_command(&input, output, width, contrast),
        Some(Commands::Init {
            templates,
            config,
            all,
            force,
            list,
        }) => run_init_command(templates, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert a single image file to ASCII art (no server needed)
fn run_convert_command(
    input: &Path,
    output: Option<PathBuf>,
    width: Option<u32>,
    contrast: Option<f32>,
) -> anyhow::Result<()> {
    use rampart::assets::AssetLoader;

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rampart=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Create asset loader with optional external paths from env vars
    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);

    let asset_loader = AssetLoader::new(templates_dir, config_file);

    // Config supplies rendering defaults; CLI flags win
    let config = AppConfig::load_from_assets(&asset_loader);

    let renderer = AsciiRenderer::new()
        .width(width.unwrap_or(config.conversion.width))
        .contrast(contrast.unwrap_or(config.conversion.contrast))
        .max_dimension(config.limits.max_dimension);

    let art = renderer.render_path(input)?;

    let output = output.unwrap_or_else(|| default_output_path(input));
    art.write_to_file(&output)?;

    println!(
        "Rendered {} -> {} ({} rows x {} chars)",
        input.display(),
        output.display(),
        art.height(),
        art.width()
    );

    Ok(())
}

/// Default output path: the input name with "_ascii.txt" appended,
/// matching the server-side naming scheme
fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{name}_ascii.txt"))
}

/// Extract embedded assets to filesystem
fn run_init_command(
    templates: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    use rampart::assets::{AssetCategory, AssetLoader};

    if list {
        println!("Embedded assets:\n");
        println!("Templates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || templates {
        categories.push(AssetCategory::Templates);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --templates, or --config");
        eprintln!("\nRun 'rampart init --list' to see embedded assets.");
        std::process::exit(1);
    }

    // Create asset loader with paths from env vars (or defaults)
    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);

    let loader = AssetLoader::new(templates_dir, config_file);

    // Extract assets
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    use rampart::assets::{AssetCategory, AssetLoader};

    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();

    // Header
    println!("Rampart v{VERSION} - image to ASCII art");
    println!("Upload an image, get it back as a wall of characters\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:5000 (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    println!("\nAsset Sources:");

    // Create asset loader to check actual sources
    let loader = AssetLoader::new(
        templates_dir.clone().map(PathBuf::from),
        config_file.clone().map(PathBuf::from),
    );

    // Config source
    let config_source = if let Some(ref path) = config_file {
        let p = PathBuf::from(path);
        if p.exists() {
            path.to_string()
        } else {
            "embedded (file not found)".to_string()
        }
    } else {
        "embedded".to_string()
    };
    println!("  Config:    {config_source}");

    // Helper for pluralization
    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "file"
        } else {
            "files"
        }
    }

    // Templates source
    let templates_list = loader.list_templates();
    let templates_count = templates_list.len();
    let embedded_templates = AssetLoader::list_embedded(AssetCategory::Templates);
    let embedded_count = embedded_templates.len();

    if let Some(ref path) = templates_dir {
        let p = PathBuf::from(path);
        if p.exists() {
            println!(
                "  Templates: {path} ({templates_count} {}, {embedded_count} embedded)",
                plural(templates_count)
            );
        } else {
            println!(
                "  Templates: embedded ({embedded_count} {})",
                plural(embedded_count)
            );
        }
    } else {
        println!(
            "  Templates: embedded ({embedded_count} {})",
            plural(embedded_count)
        );
    }

    // Commands section
    println!("\nCommands:");
    println!("  rampart serve      Start the HTTP server");
    println!("  rampart convert    Convert an image file to ASCII art");
    println!("  rampart init       Extract embedded assets");
    println!("\nRun 'rampart --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    use rampart::assets::AssetLoader;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rampart=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create asset loader with optional external paths from env vars
    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);

    let asset_loader = Arc::new(AssetLoader::new(templates_dir.clone(), config_file.clone()));

    // Log asset sources
    tracing::info!(
        templates = ?templates_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    // Seed if configured paths are empty
    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                templates = report.templates_seeded.len(),
                config = report.config_seeded,
                "Seeded empty directories with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    // Create application state using shared server module
    let state = server::create_app_state(asset_loader)?;

    // BIND_ADDR wins over the configured listen address
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| state.config.listen.clone());

    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Rampart server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
