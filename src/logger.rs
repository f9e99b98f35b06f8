/// Initializes the logger from the verbose flag.
///
/// User-facing confirmations go to stdout; the log carries diagnostics
/// only, so it stays off unless verbose is set.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();
}
