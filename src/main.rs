use clap::{Parser, Subcommand};
use photostats::assets::{ApproxMetrics, LogoDirectory};
use photostats::display::resolve_display;
use photostats::form::{FormEdit, FormState, Orientation};
use photostats::layout::Composer;
use photostats::{config, output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photostats")]
#[command(about = "Camera-stats panels for photos")]
#[command(long_about = "\
Camera-stats panels for photos

Reads EXIF from a JPEG or TIFF, turns it into an editable set of display
fields (camera, brand, lens, aperture, shutter speed, focal length, ISO) and
lays out a panel below (portrait) or beside (landscape) the photo. The
layout is printed as a list of draw instructions any 2D surface can replay.

Field edits use --set FIELD=VALUE, for example:

  --set aperture=2.8 --set brand=Leica --set lens=other --set lens_custom='Summilux 35'

Fields: camera, brand, brand_custom, lens, lens_custom, aperture, shutter,
focal, iso, orientation. Brand takes none, other or a known brand; lens takes
other, a known lens brand, or an empty value to unset it.

Run 'photostats gen-config' to generate a documented photostats.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding photostats.toml (and, by default, logos/)
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Log decoder and layout decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Shared flags for commands that edit the form.
#[derive(clap::Args, Clone)]
struct EditArgs {
    /// Edit a form field (repeatable), applied in order
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    set: Vec<String>,

    /// Discard every --set edit and use the fields derived from metadata
    #[arg(long)]
    reset: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show decoded tags, the editable form and the resolved display
    Inspect {
        file: PathBuf,
        #[command(flatten)]
        edits: EditArgs,
    },
    /// Compute the panel layout for a photo
    Layout {
        file: PathBuf,
        /// Override the automatic orientation (portrait or landscape)
        #[arg(long, value_parser = parse_orientation)]
        orientation: Option<Orientation>,
        #[command(flatten)]
        edits: EditArgs,
        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode every JPEG/TIFF under a directory
    Scan {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Print a stock photostats.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Command::Inspect { file, edits } => {
            let mut photo = process::load_photo(&file)?;
            photo.state = apply_edits(&photo.state, None, &edits)?;
            let record = resolve_display(photo.state.live());
            output::print_inspect(&photo, &record);
        }
        Command::Layout {
            file,
            orientation,
            edits,
            json,
        } => {
            let config = config::load_config(&cli.config)?;
            let photo = process::load_photo(&file)?;
            let dimensions = photo.dimensions.ok_or_else(|| {
                format!("{}: pixel size unknown, cannot lay out", file.display())
            })?;
            let state = apply_edits(&photo.state, orientation, &edits)?;
            let form = state.live();
            let record = resolve_display(form);

            let logos = LogoDirectory::load(&config.logo_dir(&cli.config));
            log::debug!(
                "logos in {}: {:?}",
                logos.dir().display(),
                logos.names().collect::<Vec<_>>()
            );
            let metrics = ApproxMetrics::from_config(&config.font);
            let layout = Composer::new(&config.colors, &metrics, &logos)
                .compose(
                    &record,
                    dimensions.width,
                    dimensions.height,
                    form.orientation,
                )
                .ok_or("photo has a zero dimension or is too large to lay out")?;

            if json {
                let report = output::LayoutReport {
                    font_family: &config.font.family,
                    display: &record,
                    layout: &layout,
                };
                println!("{}", output::format_layout_json(&report)?);
            } else {
                output::print_layout(&layout);
            }
        }
        Command::Scan { dir } => {
            let config = config::load_config(&cli.config)?;
            init_thread_pool(&config.processing);
            let entries = process::scan_directory(&dir)?;
            output::print_scan(&entries, &dir);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn parse_orientation(value: &str) -> Result<Orientation, String> {
    Orientation::parse(value)
        .ok_or_else(|| format!("expected portrait or landscape, got '{value}'"))
}

/// Apply an orientation override and `--set` edits to the live form, or
/// reset it to the auto form.
fn apply_edits(
    state: &FormState,
    orientation: Option<Orientation>,
    edits: &EditArgs,
) -> Result<FormState, Box<dyn std::error::Error>> {
    let mut state = state.clone();
    if let Some(orientation) = orientation {
        state = state.edit(FormEdit::Orientation(orientation));
    }
    for assignment in &edits.set {
        state = state.edit(FormEdit::parse(assignment)?);
    }
    if edits.reset {
        state = state.reset();
        if let Some(orientation) = orientation {
            state = state.edit(FormEdit::Orientation(orientation));
        }
    }
    Ok(state)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
