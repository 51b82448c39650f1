use std::path::PathBuf;

use clap::Parser;

use douban_top100::config::{
    RunConfig, ScrapeConfig, DEFAULT_BASE_URL, DEFAULT_DB_PATH, DEFAULT_LOG_FILE,
    DEFAULT_PAGE_SIZE, DEFAULT_TOTAL,
};
use douban_top100::clients::douban_client::DEFAULT_USER_AGENT;
use douban_top100::error::AppError;
use douban_top100::logging;

#[derive(Parser)]
#[command(name = "douban_top100", about = "Scrape the Douban Top 100 into SQLite and chart it")]
struct Cli {
    /// Ranking page to walk
    #[arg(long, env = "DOUBAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Number of records to fetch
    #[arg(short = 'n', long, env = "DOUBAN_TOTAL", default_value_t = DEFAULT_TOTAL)]
    total: usize,
    /// Records per page
    #[arg(long, env = "DOUBAN_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    #[arg(long, env = "DOUBAN_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// SQLite database receiving the records
    #[arg(long, env = "DOUBAN_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,
    /// Skip the database insert
    #[arg(long)]
    no_db: bool,
    /// Also write the records to this CSV file
    #[arg(long, env = "DOUBAN_CSV_PATH")]
    csv: Option<PathBuf>,
    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,
    /// Directory for chart series CSV files
    #[arg(long, env = "DOUBAN_CHART_DIR")]
    chart_dir: Option<PathBuf>,
    #[arg(long, env = "DOUBAN_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            scrape: ScrapeConfig {
                base_url: cli.base_url,
                total: cli.total,
                page_size: cli.page_size,
                user_agent: cli.user_agent,
            },
            db_path: (!cli.no_db).then_some(cli.db_path),
            csv_path: cli.csv,
            render_charts: !cli.no_charts,
            chart_dir: cli.chart_dir,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::setup_logging(Some(&cli.log_file))?;

    let config = RunConfig::from(cli);
    if let Err(e) = douban_top100::run(&config).await {
        log::error!("Run aborted: {}", e);
        return Err(e);
    }

    Ok(())
}
