use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use crate::config::Config;
use crate::filter::{DashboardFilter, FilterConfig, StatusFilter};
use crate::models::Dashboard;
use crate::cli::output::{format_pipeline_table, get_terminal_width, is_tty};
use crate::cli::error::usage_error;
use anyhow::{Context, Result};

#[derive(Parser)]
#[command(name = "dashfilter")]
#[command(about = "Dashboard status filter - show the pipelines matching the selected statuses")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Status to show: paused, building, failing, cancelled (repeat or comma-separate; none shows all)
    #[arg(short = 's', long = "state", value_name = "STATUS", value_delimiter = ',')]
    pub state: Vec<StatusFilter>,
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
    /// Dashboard snapshot (JSON); "-" reads stdin. Defaults to data.location from ~/.dashfilter/rc
    pub snapshot: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    // RUST_LOG=debug shows filter decisions
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => usage_error(err),
    };

    handle_filter(cli)
}

fn read_dashboard(snapshot: Option<&Path>) -> Result<Dashboard> {
    match snapshot {
        Some(path) if path.as_os_str() == "-" => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read dashboard snapshot from stdin")?;
            Dashboard::from_json(&json)
        }
        Some(path) => Dashboard::load(path),
        None => {
            let path = Config::resolve_snapshot_path()?;
            Dashboard::load(&path)
        }
    }
}

fn handle_filter(cli: Cli) -> Result<()> {
    let dashboard = read_dashboard(cli.snapshot.as_deref())?;
    let filter = DashboardFilter::new(FilterConfig::new(cli.state));
    let matched = filter.filter_pipelines(&dashboard.pipelines);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else {
        println!("{}", format_pipeline_table(&matched, get_terminal_width(), is_tty()));
    }

    Ok(())
}
