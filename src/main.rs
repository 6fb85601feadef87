#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Global site content, set once at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site content (loaded override or built-in default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Mash Portfolio - designer and artist portfolio
#[derive(Parser, Debug)]
#[command(name = "mash-portfolio")]
#[command(about = "Mash Portfolio - graphic design, editing, fashion and film-making work")]
struct Args {
    /// Site content JSON (defaults to <config dir>/mash-portfolio/site.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the built-in site content as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Default location of the site content override
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mash-portfolio").join("site.json"))
}

/// Resolve which site content to serve
///
/// An explicit `--config` must load; the implicit default file is optional
/// and falls back to the built-in content when broken.
fn load_site_config(explicit: Option<PathBuf>) -> anyhow::Result<SiteConfig> {
    if let Some(path) = explicit {
        return SiteConfig::load(&path)
            .with_context(|| format!("failed to load site config from {}", path.display()));
    }

    match default_config_path().filter(|path| path.exists()) {
        Some(path) => match SiteConfig::load(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Ignoring broken site config at {:?}, using built-in content: {}",
                    path,
                    e
                );
                Ok(SiteConfig::default())
            }
        },
        None => Ok(SiteConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.dump_config {
        println!("{}", SiteConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let site = load_site_config(args.config)?;
    let title = format!("Home | {}", site.name);
    tracing::info!(
        "Starting portfolio for '{}' with {} sections",
        site.name,
        site.sections.len()
    );

    // Store site content globally
    let _ = SITE_CONFIG.set(site);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
