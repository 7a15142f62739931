//! Terminal output helpers for consistent CLI presentation.
//!
//! Red for errors, green for success, white for plain information and
//! bright_black for secondary details such as install commands.

use colored::*;

/// Formats and prints an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("{}", message.white());
}

/// Formats and prints a section header
///
/// # Format
/// ```text
///
/// <header>:
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:", header.white());
}

/// Prints one script line of a listing: name, kind and its command
pub fn print_script_line(name: &str, kind: &str, command: Option<&str>) {
    match command {
        Some(command) => println!(
            "   {} {} {}",
            format!("({kind})").bright_black(),
            name.white(),
            command.bright_black()
        ),
        None => println!(
            "   {} {} {}",
            format!("({kind})").bright_black(),
            name.white(),
            "unsupported file type".red()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Operation completed");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Information message");
    }

    #[test]
    fn test_print_script_line_does_not_panic() {
        print_script_line("a.sh", "shell", Some("curl -sSL 'https://x/a.sh' | bash"));
        print_script_line("a.txt", "unsupported", None);
    }
}
