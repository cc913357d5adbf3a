//! pick-country - serve the incremental country picker
//!
//! Usage examples
//! --------------
//!
//! - Serve on the default port with the bundled data
//!   $ pick-country
//!
//! - Custom port and a smaller name window
//!   $ pick-country -p 9000 -m 10
//!
//! - Explicit (optionally gzipped) data tables
//!   $ pick-country --codes my_codes.json.gz --alpha my_alpha.json
//!
//! Data source
//! -----------
//!
//! Each table path is tried as given, then two directories up, then in the
//! data directory bundled with `pickcountry-core`. An alias mapped to two
//! different codes is a data integrity error and stops startup.
use clap::Parser;
use pickcountry_cli::args::CliArgs;
use pickcountry_cli::server::PickServer;
use pickcountry_cli::{data, logging};
use pickcountry_core::{Config, Directory, Session};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init(args.verbose)?;

    info!("Starting pick-country...");

    // 1. Load data
    let codes_path = data::locate(&args.codes);
    let alpha_path = data::locate(&args.alpha);
    let directory = Directory::load_from_paths(&codes_path, &alpha_path).map_err(|e| {
        let what = if e.is_integrity_error() {
            "Data integrity error"
        } else {
            "Failed to read data"
        };
        anyhow::Error::new(e).context(format!(
            "{what} loading {} and {}",
            codes_path.display(),
            alpha_path.display()
        ))
    })?;
    info!("Loaded {} countries.", directory.stats().countries);

    // 2. Shared session
    let config = Config::new(args.max_list_size);
    let session = Arc::new(Session::new(Arc::new(directory), config));

    // 3. Serve
    let addr = SocketAddr::new(args.bind, args.port);
    let server = PickServer::bind(addr, session, args.static_dir)?;
    server.run(args.workers)
}
