//! Colored status lines and the dashboard banner.

use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{CYAN}i{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}✔{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}!{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}✘{RESET} {msg}");
}

/// Underlined report banner, sized to the title.
pub fn header<T: fmt::Display>(title: T) {
    let title = title.to_string();
    println!("{CYAN}{title}{RESET}");
    println!("{CYAN}{}{RESET}\n", "─".repeat(title.chars().count()));
}
