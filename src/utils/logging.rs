// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Honors `RUST_LOG` when set, otherwise logs at info (or debug when verbose).
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    colored::control::set_override(colored_output);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatters_keep_message() {
        colored::control::set_override(false);
        assert_eq!(format_success("saved"), "✓ saved");
        assert_eq!(format_error("failed"), "✗ failed");
        assert_eq!(format_warning("careful"), "⚠ careful");
        assert_eq!(format_info("note"), "ℹ note");
    }
}
