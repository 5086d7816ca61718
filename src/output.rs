//! Colored terminal output utilities

use std::io::{self, BufRead, Write};

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// Colors
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Print a status message (cyan, bold prefix)
pub fn status(prefix: &str, message: &str) {
    println!("{BOLD}{CYAN}{prefix}{RESET} {message}");
}

/// Print an info message (blue)
pub fn info(message: &str) {
    println!("{BLUE}{message}{RESET}");
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{GREEN}{message}{RESET}");
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    println!("{YELLOW}warning:{RESET} {message}");
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{RED}error:{RESET} {message}");
}

/// Print a section header
pub fn header(message: &str) {
    println!("\n{BOLD}{MAGENTA}==> {message}{RESET}");
}

/// Print a list item
pub fn list_item(item: &str) {
    println!("  {DIM}-{RESET} {item}");
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("    {DIM}{key}:{RESET} {value}");
}

/// Print command being executed (dimmed)
pub fn command(cmd: &str) {
    println!("{DIM}$ {cmd}{RESET}");
}

/// Ask a yes/no question on stdin. Anything but "y"/"yes" is a no.
pub fn confirm(question: &str) -> bool {
    print!("{BOLD}{question}{RESET} [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
