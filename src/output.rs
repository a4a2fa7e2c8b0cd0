//! Small wrapper around stdout/stderr printing for consistent user-facing
//! messages. Colors are enabled only when the stream is a TTY, so scripted
//! output stays plain and parseable.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Used for primary outputs
/// such as success summaries, dry-run plan lines, help and version, which
/// users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
