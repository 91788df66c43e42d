//! Logger initialization for the create-module application.
//! Verbose mode raises the filter to Debug; the default is Info.

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}
