use crate::demo::{run_demo, run_rate, run_sheet, DemoArgs, RateArgs, SheetArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use review_rating::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Review Rating Engine",
    about = "Serve and exercise the weighted review rating engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rate a single review from per-criterion scores
    Rate(RateArgs),
    /// Rate every row of a CSV score sheet
    Sheet(SheetArgs),
    /// Walk through a scripted editing session across all profiles
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rate(args) => run_rate(args),
        Command::Sheet(args) => run_sheet(args),
        Command::Demo(args) => run_demo(args),
    }
}
