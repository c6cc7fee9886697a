use clap::Parser;

#[derive(Parser)]
#[command(
    name = "movescan",
    about = "Detect moved code between two versions of a file",
    version,
)]
pub struct Cli {
    /// Path to the old/original file
    pub old_file: String,

    /// Path to the new/modified file
    pub new_file: String,

    /// Similarity threshold (0.0-1.0). Accepted for caller
    /// compatibility; matching is exact-equality only.
    #[arg(long, default_value_t = 0.7)]
    pub threshold: f64,

    /// Output as JSON (the default; output is always JSON)
    #[arg(long, default_value_t = true)]
    pub json: bool,
}
