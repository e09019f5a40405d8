//! # Moldura CLI
//!
//! Command-line collaborator around the framing core: loads an image file,
//! renders the configured frame and writes the finished PNG.
//!
//! ## Usage
//!
//! ```bash
//! # List available frame styles
//! moldura styles
//!
//! # Frame a photo with the defaults (classic, brown, 1.00", rounded)
//! moldura frame photo.jpg -o framed.png
//!
//! # A neon frame, half an inch thick, square corners
//! moldura frame photo.jpg --style neon --color "#00ffcc" --width 0.5 --square
//!
//! # Print-test swatch: the frame around a letter page instead of the image
//! moldura frame photo.jpg --frame-only --width 1.5
//!
//! # Reproducible vintage speckling
//! moldura frame photo.jpg --style vintage --seed 42
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use moldura::{Compositor, CornerMode, FrameConfig, FrameError, FrameStyle};

/// Moldura - picture frame rendering utility
#[derive(Parser, Debug)]
#[command(name = "moldura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a framed copy of an image to PNG
    Frame {
        /// Input image (PNG, JPEG, ...)
        image: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "framed.png")]
        output: PathBuf,

        /// Frame style (see `moldura styles`)
        #[arg(long)]
        style: Option<String>,

        /// Frame color as #RRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Frame thickness in inches
        #[arg(long)]
        width: Option<f32>,

        /// Square corners instead of rounded
        #[arg(long)]
        square: bool,

        /// Render the frame around a letter page instead of the image
        #[arg(long)]
        frame_only: bool,

        /// Seed for the randomized styles (vintage, metallic)
        #[arg(long)]
        seed: Option<u64>,

        /// JSON frame configuration; the flags above override its fields
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List available frame styles
    Styles,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), FrameError> {
    match Cli::parse().command {
        Commands::Styles => {
            for style in FrameStyle::ALL {
                println!("{style}");
            }
            Ok(())
        }
        Commands::Frame {
            image,
            output,
            style,
            color,
            width,
            square,
            frame_only,
            seed,
            config,
        } => {
            let mut frame_config = match config {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)
                    .map_err(|e| FrameError::InvalidConfig(e.to_string()))?,
                None => FrameConfig::default(),
            };
            if let Some(style) = style {
                frame_config.style = style.parse()?;
            }
            if let Some(color) = color {
                frame_config.color = color.parse()?;
            }
            if let Some(width) = width {
                frame_config.width_in = width;
            }
            if square {
                frame_config.corner_mode = CornerMode::Square;
            }
            if frame_only {
                frame_config.frame_only = true;
            }

            let mut compositor = Compositor::new();
            compositor.set_config(frame_config)?;

            log::info!("loading {}", image.display());
            compositor.load_image(&fs::read(&image)?)?;

            match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    compositor.render_with_rng(&mut rng)?;
                }
                None => {
                    compositor.render()?;
                }
            }

            if let Some(readout) = compositor.readout() {
                println!("{}", readout.content);
                println!("{}", readout.frame);
            }

            fs::write(&output, compositor.export_png()?)?;
            log::info!(
                "wrote {}x{} px to {}",
                compositor.canvas().width(),
                compositor.canvas().height(),
                output.display()
            );
            Ok(())
        }
    }
}
