//! Question List Viewer - Entry Point

use clap::Parser;
use qlv::config::CliOverrides;
use qlv::model::TestInfo;
use qlv::state::{AppState, ControllerOptions, PageSize, QuestionListController};
use qlv::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// Question List Viewer - TUI for browsing and selecting test questions
#[derive(Parser, Debug)]
#[command(name = "qlv")]
#[command(version)]
#[command(about = "TUI application for browsing a test's question list")]
pub struct Args {
    /// Path to a questions file (.json or .toml); the built-in sample set is used otherwise
    #[arg(long)]
    pub questions: Option<PathBuf>,

    /// Start with a search term applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Rows revealed per Load More step (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Start in full view (every row expanded)
    #[arg(long)]
    pub full_view: bool,

    /// Start with the sidebar hidden
    #[arg(long)]
    pub no_sidebar: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            questions_file: self.questions.clone(),
            page_size: self
                .page_size
                .and_then(|n| PageSize::new(usize::try_from(n).ok()?)),
            full_view: self.full_view,
            no_sidebar: self.no_sidebar,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → config file → environment → CLI flags
    let config = qlv::config::resolve(args.config.clone(), args.overrides())?;

    qlv::logging::init(&config.log_file_path)?;

    let source = qlv::source::detect_question_source(config.questions_file.clone());
    let records = source.load()?;
    info!(
        source = %source.describe(),
        count = records.len(),
        "Questions loaded"
    );

    let controller = QuestionListController::new(
        records,
        ControllerOptions {
            page_size: config.page_size,
            truncate_at: config.truncate_at,
            full_view: config.full_view,
            columns: config.columns,
        },
    );

    let mut app_state = AppState::new(controller, TestInfo::default());
    app_state.sidebar_open = config.sidebar_open;
    if let Some(term) = args.search.as_deref() {
        app_state.set_search(term);
    }

    qlv::view::run(app_state, ColorConfig::from_env_and_args(args.no_color))?;

    Ok(())
}
