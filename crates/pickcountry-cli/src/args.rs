use clap::Parser;
use pickcountry_core::loader::{ALPHA_FILENAME, CODES_FILENAME};
use pickcountry_core::DEFAULT_MAX_LIST_SIZE;
use std::net::IpAddr;
use std::path::PathBuf;

/// CLI arguments for pick-country
#[derive(Debug, Parser)]
#[command(
    name = "pick-country",
    version,
    about = "Serve the incremental country picker over HTTP"
)]
pub struct CliArgs {
    /// Port to run the server on
    #[arg(short = 'p', long = "port", default_value_t = 8081)]
    pub port: u16,

    /// Address to bind (e.g. 127.0.0.1 for local only)
    #[arg(long = "bind", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Primary table: country code -> list of names (first is canonical)
    #[arg(long = "codes", default_value = CODES_FILENAME)]
    pub codes: PathBuf,

    /// Secondary table: group -> list of {"n": name, "c": code}
    #[arg(long = "alpha", default_value = ALPHA_FILENAME)]
    pub alpha: PathBuf,

    /// Names shown before the list turns into a next-letter menu
    #[arg(short = 'm', long = "max-list-size", default_value_t = DEFAULT_MAX_LIST_SIZE)]
    pub max_list_size: usize,

    /// Directory holding index.html
    #[arg(long = "static-dir", default_value = "static")]
    pub static_dir: PathBuf,

    /// Number of request-handling threads
    #[arg(long = "workers", default_value_t = 4)]
    pub workers: usize,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
