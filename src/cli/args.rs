use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paircalc", version, about = "paircalc CLI")]
pub struct CliArgs {
    /// Arithmetic action applied to every row (plus, minus, multiply, division)
    #[arg(short, long)]
    pub action: String,

    /// Input CSV file of numeric pairs (first field holds "v1;v2")
    #[arg(short, long, default_value = "not_exists.csv")]
    pub file: PathBuf,

    /// Result log path (valid rows plus run markers)
    #[arg(long, default_value = "storage/result.csv")]
    pub result_log: PathBuf,

    /// Diagnostic log path (wrong rows plus run markers)
    #[arg(long, default_value = "storage/log.txt")]
    pub diagnostic_log: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
