//! interior-studio - AI interior redesign from the command line
//!
//! Runs one studio session per invocation against Google Gemini.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use interior_studio::config::Config;
use interior_studio::core::catalog::CUSTOM_MOODBOARD_ID;
use interior_studio::utils::logging::init_tracing;
use interior_studio::{
    ASPECT_RATIOS, DesignVariation, GeminiClient, ImageData, MOODBOARDS, QUALITY_LEVELS,
    SpaceType, Studio,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "studio", version, about = "AI interior redesign studio")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List space types, moodboards, aspect ratios and quality levels
    Catalog,
    /// Generate two redesigns of a room photo
    Generate(GenerateArgs),
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Photo of the room to redesign
    #[arg(long)]
    room: PathBuf,

    /// Space type, e.g. "Living Room" or "bedroom"
    #[arg(long, default_value_t = SpaceType::default())]
    space_type: SpaceType,

    /// Moodboard id (see `studio catalog`)
    #[arg(long)]
    style: Option<String>,

    /// Reference image for the custom moodboard; implies `--style custom`
    #[arg(long)]
    moodboard_image: Option<PathBuf>,

    #[arg(long)]
    aspect_ratio: Option<String>,

    #[arg(long)]
    quality: Option<String>,

    /// Write the generated images here
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, env = "STUDIO_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
        Command::Generate(args) => generate(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_catalog() {
    println!("Space types:");
    for space in SpaceType::ALL {
        println!("  {:<14} {}", space.as_str(), space.label());
    }

    println!("\nMoodboards:");
    for moodboard in &MOODBOARDS {
        println!("  {:<14} {}", moodboard.id, moodboard.name);
    }

    println!("\nAspect ratios:");
    for option in &ASPECT_RATIOS {
        println!("  {:<14} {}", option.id, option.name);
    }

    println!("\nQuality levels:");
    for option in &QUALITY_LEVELS {
        println!("  {:<14} {}", option.id, option.name);
    }
}

async fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = Config::load(args.config.as_deref()).await?;
    init_tracing(&config.logging)?;

    let client = GeminiClient::new(config.gemini.clone())?;
    let studio = Studio::from_state(Arc::new(client), config.studio.new_session()?);

    let room = ImageData::from_file(&args.room)
        .await
        .with_context(|| format!("Failed to load room image {}", args.room.display()))?;
    studio.set_room_image(room);
    studio.select_space_type(args.space_type);

    if let Some(path) = &args.moodboard_image {
        let moodboard = ImageData::from_file(path)
            .await
            .with_context(|| format!("Failed to load moodboard image {}", path.display()))?;
        studio.set_custom_moodboard_image(moodboard);
    }

    let style = match (&args.style, &args.moodboard_image) {
        (Some(style), _) => Some(style.as_str()),
        (None, Some(_)) => Some(CUSTOM_MOODBOARD_ID),
        (None, None) => None,
    };
    if let Some(style) = style {
        studio.select_moodboard(style)?;
    }
    if let Some(aspect_ratio) = &args.aspect_ratio {
        studio.select_aspect_ratio(aspect_ratio)?;
    }
    if let Some(quality) = &args.quality {
        studio.select_quality(quality)?;
    }

    let designs = studio.generate().await?;

    for (index, design) in designs.iter().enumerate() {
        println!("Design {}: {}", index + 1, design.description);
    }

    if let Some(dir) = &args.output_dir {
        for path in write_designs(dir, &designs).await? {
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}

async fn write_designs(dir: &Path, designs: &[DesignVariation]) -> anyhow::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(designs.len());
    for (index, design) in designs.iter().enumerate() {
        if !design.is_data_uri() {
            info!(image = %design.image, "Skipping remote design image");
            continue;
        }
        let (mime_type, bytes) = design.decode_image()?;
        let path = dir.join(format!("design-{}.{}", index + 1, extension_for(&mime_type)));
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "img",
    }
}
