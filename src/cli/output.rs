use colored::Colorize;

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a result line. Never colored, so output stays pipeable.
pub fn line(msg: &str) {
    println!("{msg}");
}
