use std::{
    io::{stderr, Write},
    path::Path,
};

use serde_yaml::Location;

pub fn print_error_with_source(
    source_id: &Path,
    source: &str,
    error: &serde_yaml::Error,
) {
    let message = error.to_string();
    match error.location() {
        Some(location) => {
            if !try_print_error_with_source(source_id, source, &message, &location)
            {
                print_message_and_loc(source_id, &message, &location);
            }
        }
        None => eprintln!("[{}] {message}", source_id.display()),
    }
}

fn try_print_error_with_source(
    source_id: &Path,
    source: &str,
    message: &str,
    location: &Location,
) -> bool {
    // lines are 1-based
    let Some(line_idx) = location.line().checked_sub(1) else {
        return false;
    };
    let Some(current_line) = source.lines().nth(line_idx) else {
        return false;
    };

    eprintln!("{}:", source_id.display());
    if let Some(prev_line) =
        line_idx.checked_sub(1).and_then(|i| source.lines().nth(i))
    {
        eprintln!("{:>5}│ {}", location.line() - 1, prev_line);
    }
    eprintln!("{:>5}│ {}", location.line(), current_line);
    let mut stderr = stderr().lock();
    for _ in 0..(5 + 2 + location.column().saturating_sub(1)) {
        stderr.write_all(&[b' ']).ok();
    }
    writeln!(stderr, "╰─► {message}").ok();

    true
}

fn print_message_and_loc(source_id: &Path, message: &str, location: &Location) {
    eprintln!(
        "[{} @ line {}, column {}] {message}",
        source_id.display(),
        location.line(),
        location.column()
    );
}
