use std::{error::Error, path::PathBuf};

mod config;
mod report;

/// Usage: `primodality-explorer [config.toml]`
///
/// Log level is taken from `RUST_LOG`.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::load_config(path.as_deref()).map_err(|err| {
        log::error!("{}", err);
        err
    })?;
    log::debug!("config: {:?}", config);
    let report = report::explore(&config).map_err(|err| {
        log::error!("{}", err);
        err
    })?;
    print!("{}", report);
    Ok(())
}
