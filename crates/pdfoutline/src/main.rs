use std::path::{Path, PathBuf};

use crate::prelude::{eprintln, *};
use clap::Parser;
use outline_core::config::{
    DEFAULT_HEADING_TIERS, DEFAULT_MAX_PREFIX_GROUPS, DEFAULT_MIN_HEADING_CHARS,
    MAX_PREFIX_GROUPS_LIMIT,
};
use outline_core::HeuristicConfig;

mod batch;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Extract a title and an H1-H3 outline from every PDF in a directory"
)]
pub struct App {
    /// Directory scanned for `.pdf` files [default: /app/input, else app/input]
    #[clap(long, env = "PDFOUTLINE_INPUT")]
    input: Option<PathBuf>,

    /// Directory receiving one `<name>.json` per PDF [default: /app/output, else app/output]
    #[clap(long, env = "PDFOUTLINE_OUTPUT")]
    output: Option<PathBuf>,

    /// Minimum length, in characters, of a heading line
    #[clap(long, env = "PDFOUTLINE_MIN_HEADING_CHARS", default_value_t = DEFAULT_MIN_HEADING_CHARS)]
    min_heading_chars: usize,

    /// Number of largest font sizes treated as heading sizes
    #[clap(long, env = "PDFOUTLINE_HEADING_TIERS", default_value_t = DEFAULT_HEADING_TIERS)]
    heading_tiers: usize,

    /// Maximum number of `N.` groups in a numbered heading prefix (1-9)
    #[clap(
        long,
        env = "PDFOUTLINE_MAX_PREFIX_GROUPS",
        default_value_t = DEFAULT_MAX_PREFIX_GROUPS,
        value_parser = parse_prefix_groups
    )]
    max_prefix_groups: usize,

    /// Whether to display additional information.
    #[clap(long, env = "PDFOUTLINE_VERBOSE", default_value = "false")]
    verbose: bool,
}

impl App {
    fn heuristic_config(&self) -> HeuristicConfig {
        HeuristicConfig {
            min_heading_chars: self.min_heading_chars,
            heading_tiers: self.heading_tiers,
            max_prefix_groups: self.max_prefix_groups,
            ..HeuristicConfig::default()
        }
    }
}

fn parse_prefix_groups(s: &str) -> Result<usize, String> {
    let groups: usize = s
        .trim()
        .parse()
        .map_err(|e| f!("invalid group count {s:?}: {e}"))?;
    if (1..=MAX_PREFIX_GROUPS_LIMIT).contains(&groups) {
        Ok(groups)
    } else {
        Err(f!("group count must be between 1 and {MAX_PREFIX_GROUPS_LIMIT}"))
    }
}

/// The container path when it exists, otherwise the path relative to the
/// working directory.
fn default_dir(container: &str, local: &str) -> PathBuf {
    let container = Path::new(container);
    if container.exists() {
        container.to_path_buf()
    } else {
        PathBuf::from(local)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let config = app.heuristic_config();
    let input = app
        .input
        .clone()
        .unwrap_or_else(|| default_dir("/app/input", "app/input"));
    let output = app
        .output
        .clone()
        .unwrap_or_else(|| default_dir("/app/output", "app/output"));

    if app.verbose {
        eprintln!("Input: {}", input.display());
        eprintln!("Output: {}", output.display());
        eprintln!("{:?}", config);
    }

    let reports = batch::run(&input, &output, &config, app.verbose)?;
    batch::print_summary(&reports);

    Ok(())
}
