use crate::demo::{run_applicants, run_demo, run_score, run_score_file, ScoreArgs, ScoreFileArgs};
use crate::server;
use admission_score::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Admission Score",
    about = "Score university applicants from the command line or over HTTP",
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
    /// List the seeded applicants and programs
    Applicants,
    /// Score one seeded applicant
    Score(ScoreArgs),
    /// Score an applicant described by a CSV file
    ScoreFile(ScoreFileArgs),
    /// Score every seeded applicant and print the outcomes
    Demo,
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
        Command::Applicants => run_applicants(),
        Command::Score(args) => run_score(args),
        Command::ScoreFile(args) => run_score_file(args),
        Command::Demo => run_demo(),
    }
}
