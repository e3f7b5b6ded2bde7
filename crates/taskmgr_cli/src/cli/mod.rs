use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the configured color theme for this session
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Path handed to the storage backend (persistence is not implemented yet)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,
}
