use crate::demo::{run_analyze, run_demo, run_simulate, AnalyzeArgs, DemoArgs, SimulateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use greentrack::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GreenTrack",
    about = "Score small-business carbon footprints and produce sustainability reports",
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
    /// Build sustainability reports from a JSON submission or a CSV export
    Analyze(AnalyzeArgs),
    /// Project a usage record under hypothetical reductions
    Simulate(SimulateArgs),
    /// Walk a sample restaurant through the report and a scenario
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
        Command::Analyze(args) => run_analyze(args).await,
        Command::Simulate(args) => run_simulate(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
