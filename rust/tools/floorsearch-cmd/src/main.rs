use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "floorsearch-cmd")]
#[command(about = "Command-line utility for predecessor search over sorted lists")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the predecessor index of every item in a sorted list
    Search {
        /// JSON file holding the sorted list (an array of numbers)
        #[arg(short, long)]
        list: String,

        /// JSON file holding the items to search for
        #[arg(short, long)]
        items: String,

        /// Element kind of both arrays: f64 or i32
        #[arg(short, long, default_value = "f64")]
        kind: String,

        /// Report 0-based indices instead of 1-based ones
        #[arg(long)]
        zero_based: bool,

        /// Skip checking that the list is sorted; an unsorted list then yields unspecified indices
        #[arg(long)]
        no_verify: bool,

        /// Reject items that are not in non-decreasing order
        #[arg(long)]
        strict_items: bool,

        /// Print search progress to stderr
        #[arg(long)]
        trace: bool,

        /// Output file for the resulting indices (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Find the predecessor of a single value within an optional index range
    Probe {
        /// JSON file holding the sorted list (an array of numbers)
        #[arg(short, long)]
        list: String,

        /// Value to search for
        #[arg(short, long, allow_negative_numbers = true)]
        value: f64,

        /// Lower bound of the search range (0-based, inclusive)
        #[arg(long)]
        lo: Option<usize>,

        /// Upper bound of the search range (0-based, inclusive)
        #[arg(long)]
        hi: Option<usize>,

        /// Print search progress to stderr
        #[arg(long)]
        trace: bool,

        /// Output file for the JSON result (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            list,
            items,
            kind,
            zero_based,
            no_verify,
            strict_items,
            trace,
            output,
        } => commands::search::run(commands::search::SearchArgs {
            list,
            items,
            kind,
            zero_based,
            no_verify,
            strict_items,
            trace,
            output,
        }),
        Commands::Probe {
            list,
            value,
            lo,
            hi,
            trace,
            output,
        } => commands::probe::run(list, value, lo, hi, trace, output),
    }
}
