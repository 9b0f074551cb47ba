use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Training trajectory viewer", long_about = None)]
pub struct Cli {
    /// JSON config file (defaults are used when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL serving the training result
    #[arg(long, env = "TRAJECTORY_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the chart window (Default)
    Gui,

    /// Fetch once and print the per-epoch listing
    Summary,

    /// Print the colors assigned to the first N classes
    Colors(ColorsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ColorsArgs {
    #[arg(long, default_value_t = 12)]
    pub count: usize,
}
