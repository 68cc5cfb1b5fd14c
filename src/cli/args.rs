use clap::Parser;
use std::path::PathBuf;

use tilecut::{Mode, Strategy};

#[derive(Parser, Debug)]
#[command(name = "tilecut", version, about = "Terrain tile extractor")]
pub struct CliArgs {
    /// What to produce: one PNG per tile, or annotated previews of the sheets
    #[arg(long, value_enum, default_value_t = Mode::Extract)]
    pub mode: Mode,

    /// Shorthand for --mode preview
    #[arg(short, long, default_value_t = false, conflicts_with = "mode")]
    pub preview: bool,

    /// How tiles are located (auto-detect edges, or the hand-tuned fixed grid)
    #[arg(long, value_enum, default_value_t = Strategy::Auto)]
    pub strategy: Strategy,

    /// Show per-tile detection details
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Directory holding the terrain sheets
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory for extracted tiles and previews (created if missing)
    #[arg(long, default_value = "tiles")]
    pub output_dir: PathBuf,

    /// TrueType font for preview labels; a built-in bitmap font is used without one
    #[arg(long)]
    pub font: Option<PathBuf>,
}

impl CliArgs {
    pub fn effective_mode(&self) -> Mode {
        if self.preview { Mode::Preview } else { self.mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_auto() {
        let args = CliArgs::try_parse_from(["tilecut"]).unwrap();
        assert_eq!(args.effective_mode(), Mode::Extract);
        assert_eq!(args.strategy, Strategy::Auto);
        assert!(!args.debug);
        assert_eq!(args.output_dir, PathBuf::from("tiles"));
    }

    #[test]
    fn preview_shorthand() {
        let args = CliArgs::try_parse_from(["tilecut", "-p", "-d", "--strategy", "fixed"]).unwrap();
        assert_eq!(args.effective_mode(), Mode::Preview);
        assert_eq!(args.strategy, Strategy::Fixed);
        assert!(args.debug);

        let args = CliArgs::try_parse_from(["tilecut", "--mode", "preview"]).unwrap();
        assert_eq!(args.effective_mode(), Mode::Preview);
    }

    #[test]
    fn mode_selectors_are_exclusive() {
        assert!(CliArgs::try_parse_from(["tilecut", "--preview", "--mode", "extract"]).is_err());
    }
}
