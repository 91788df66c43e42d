//! create-module's main application entry point.
//! Parses command-line arguments, configures logging and hands control to
//! the module generation pipeline.

use create_module::{
    cli::get_args,
    error::default_error_handler,
    logger::init_logger,
    pipeline::run,
};

fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
