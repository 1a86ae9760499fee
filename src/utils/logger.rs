use colored::Colorize;
use env_logger::Builder;
use log::Level;
use std::io::Write;

pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // try_init: lib callers (and tests) may already have installed a logger.
    let _ = Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level) // Our crate: use requested level
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .try_init();
}

/// Prefixes of progress-log lines that report a failure.
const FAILURE_PREFIXES: [&str; 3] = ["Error processing", "Failed to save", "Cannot read"];

/// Render one progress-log line through the logger: failures at warn, everything else at info.
pub fn log_progress_line(message: &str) {
    if FAILURE_PREFIXES.iter().any(|p| message.starts_with(p)) {
        log::warn!("{}", message);
    } else if message.starts_with("Saved results") {
        log::info!("{}", message.green());
    } else {
        log::info!("{}", message);
    }
}
