use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tilecut::sheets::TERRAIN_SHEETS;
use tilecut::{Mode, RunOptions, Strategy, TileParams, preview_file_name, run_sheets};

use super::args::CliArgs;
use super::errors::AppError;

const RULE: &str = "============================================================";

fn init_logging(debug: bool) -> Result<(), AppError> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn print_legend(mode: Mode, strategy: Strategy) {
    let previews: Vec<String> = (0..TERRAIN_SHEETS.len())
        .map(|i| preview_file_name(i, strategy))
        .collect();

    match (mode, strategy) {
        (Mode::Preview, Strategy::Auto) => {
            info!("Open {} to verify detection.", previews.join(" and "));
            info!("GREEN rectangles = auto-detected boundaries");
            info!("YELLOW dots = approximate search centers");
            info!("CYAN squares = detected corners");
            info!("RED crosses = tiles that could not be located");
        }
        (Mode::Preview, Strategy::Fixed) => {
            info!("Open {} to check crop boundaries.", previews.join(" and "));
            info!("GREEN rectangles = crop boundaries");
            info!("RED corners = exact corner positions");
        }
        (Mode::Extract, _) => {}
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.debug)?;

    let mode = args.effective_mode();
    let params = TileParams::default();
    debug!("Parameters: {}", serde_json::to_string(&params)?);

    info!("{}", RULE);
    match mode {
        Mode::Extract => info!("Terrain Tile Extractor - {} mode", args.strategy),
        Mode::Preview => info!("Terrain Tile Extractor - {} preview mode", args.strategy),
    }
    info!("{}", RULE);
    info!("Output directory: {}", args.output_dir.display());

    let options = RunOptions {
        mode,
        strategy: args.strategy,
        params,
        font: args.font.clone(),
    };
    if mode == Mode::Preview && options.font.is_none() {
        debug!("No --font given; labels use the built-in bitmap font");
    }

    let report = run_sheets(&args.input_dir, &args.output_dir, &TERRAIN_SHEETS, &options)
        .map_err(AppError::from)?;

    info!("{}", RULE);
    match mode {
        Mode::Extract => {
            info!("Extraction complete!");
            info!("Check {} for extracted tiles.", args.output_dir.display());
        }
        Mode::Preview => info!("Preview generated!"),
    }
    info!(
        "Sheets processed: {}, skipped: {}, errors: {}",
        report.processed, report.skipped, report.errors
    );
    info!(
        "Tiles located: {}, failed: {}",
        report.tiles_extracted, report.tiles_failed
    );
    if report.processed == 0 {
        warn!("No sheet was processed; check --input-dir");
    }
    print_legend(mode, args.strategy);
    info!("{}", RULE);

    Ok(())
}
