use clap::Parser;

/// Job runner for the Community Mangrove Watch backend. One invocation
/// performs one full leaderboard refresh; the recurring schedule lives in
/// whatever cron entry launches it.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Rows fetched per page while scanning verified reports
    /// (overrides REPORT_PAGE_SIZE)
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..))]
    pub page_size: Option<i64>,
}

pub fn parse_cli_args() -> Cli {
    Cli::parse()
}
