use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cuecheck",
    version,
    about = "Check cue-sheet CSV exports for duplicate (#Channel, #Cue) pairs"
)]
pub struct Cli {
    #[arg(
        value_name = "FILE",
        required = true,
        help = "One or more paths to the cue-sheet CSV files to check"
    )]
    pub files: Vec<PathBuf>,
}
