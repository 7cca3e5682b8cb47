use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, bail};
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use pixel_engine_edit::{AlwaysConfirm, CanvasController, ConfirmGate, EditorSettings, ImageFormat, MAX_SURFACE_SIZE, RgbaSurface, palette_index};

mod options;
mod script;

#[derive(Parser, Debug)]
#[command(version, about = "Replays a pixel art editing script and exports the drawing", long_about = None)]
pub struct Args {
    /// Editing script to replay
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Image file to write. The format follows the extension unless --format is given
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Export format: png, jpeg, gif
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<ImageFormat>,

    /// Initial cells per side (overrides the settings file)
    #[arg(short, long)]
    resolution: Option<usize>,

    /// Side length of the drawing surface in pixels (overrides the settings file)
    #[arg(short, long)]
    size: Option<u32>,

    /// Answer yes to every confirmation instead of asking
    #[arg(short, long, default_value_t = false)]
    yes: bool,

    /// Print the export as a data: URL on stdout
    #[arg(long, default_value_t = false)]
    data_url: bool,

    /// Store the effective settings as the new defaults
    #[arg(long, default_value_t = false)]
    save_settings: bool,
}

/// Synchronous yes/no prompt on the controlling terminal.
struct TerminalConfirm;

impl ConfirmGate for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn start_logger() -> Option<LoggerHandle> {
    let Some(log_dir) = options::get_config_dir() else {
        eprintln!("Failed to create log file");
        return None;
    };
    let logger = Logger::try_with_env_or_str("info")
        .ok()?
        .log_to_file(FileSpec::default().directory(&log_dir).basename("pixel_draw").suffix("log").suppress_timestamp())
        .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
        .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
        .start();
    match logger {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

/// Rejects settings a session can't start with, whether they came from the
/// settings file or the command line.
fn validate_settings(settings: &EditorSettings) -> anyhow::Result<()> {
    let offered = settings.offered_resolutions();
    if !offered.contains(&settings.resolution) {
        bail!("resolution {} is not one of {:?}", settings.resolution, offered);
    }
    if settings.surface_size == 0 || settings.surface_size > MAX_SURFACE_SIZE {
        bail!("surface size {} must be between 1 and {MAX_SURFACE_SIZE} pixels", settings.surface_size);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = start_logger();

    log::info!("Starting pixel_draw {}", env!("CARGO_PKG_VERSION"));

    let mut settings = options::load_settings();
    if let Some(resolution) = args.resolution {
        settings.resolution = resolution;
    }
    if let Some(size) = args.size {
        settings.surface_size = size;
    }
    validate_settings(&settings)?;
    if args.save_settings {
        options::store_settings(&settings);
    }

    let format = match (args.format, &args.output) {
        (Some(format), _) => format,
        (None, Some(path)) => ImageFormat::from_path(path).with_context(|| format!("can't tell the image format of '{}'", path.display()))?,
        (None, None) => ImageFormat::Png,
    };

    let text = fs::read_to_string(&args.script).with_context(|| format!("can't read script '{}'", args.script.display()))?;
    let commands = script::parse_script(&text)?;

    // fails loudly here rather than halfway through the script
    let surface = RgbaSurface::new(settings.surface_size, settings.surface_size)?;
    let mut controller = CanvasController::new(surface, &settings)?;

    for command in commands {
        if args.yes {
            script::apply(&mut controller, command, &mut AlwaysConfirm);
        } else {
            script::apply(&mut controller, command, &mut TerminalConfirm);
        }
    }

    let color = controller.selected_color();
    match palette_index(color) {
        Some(index) => log::info!("final color {color} (palette swatch {index}), tool {}", controller.selected_tool()),
        None => log::info!("final color {color}, tool {}", controller.selected_tool()),
    }

    if let Some(path) = &args.output {
        controller
            .export_to_file(format, path)
            .with_context(|| format!("can't export to '{}'", path.display()))?;
        println!("{} → {}", format, path.display());
    }
    if args.data_url {
        println!("{}", controller.export_data_url(format)?);
    }
    if args.output.is_none() && !args.data_url {
        for row in controller.grid().rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.fill_color.to_hex()).collect();
            println!("{}", line.join(" "));
        }
    }

    Ok(())
}
