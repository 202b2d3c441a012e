//! CLI command messaging
//!
//! Colored one-line reports for the planner and configure commands.

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    print_line("\x1b[1;33m[INFO]\x1b[0m", title, details);
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    print_line("\x1b[1;91m[WARN]\x1b[0m", title, details);
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    print_line("\x1b[1;32m[SUCCESS]\x1b[0m", title, details);
}

fn print_line(tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{} {}", tag, title);
    } else {
        println!("{} {}\t {}", tag, title, details);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
