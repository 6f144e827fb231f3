//! Output formatting for kubetypes

use owo_colors::{OwoColorize, Stream};

/// Format raw headers and rows as a table
pub fn format_table_raw(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "No resource types found".to_string();
    }

    // Calculate column widths
    let num_cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < num_cols {
                widths[i] = widths[i].max(strip_ansi_codes(cell).len());
            }
        }
    }

    let mut output = String::new();

    let mut header_line = String::new();
    for (i, header) in headers.iter().enumerate() {
        let padding = widths[i].saturating_sub(header.len());
        header_line.push_str(header);
        header_line.push_str(&" ".repeat(padding + 2));
    }
    output.push_str(
        &header_line
            .trim_end()
            .if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string(),
    );
    output.push('\n');

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i < num_cols {
                let stripped_len = strip_ansi_codes(cell).len();
                let padding = widths[i].saturating_sub(stripped_len);
                line.push_str(cell);
                line.push_str(&" ".repeat(padding + 2));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Strip ANSI escape codes for length calculation
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Colored yes/no cell for an availability flag
pub fn colorize_available(available: bool) -> String {
    if available {
        "yes".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
    } else {
        "no".if_supports_color(Stream::Stdout, |t| t.red()).to_string()
    }
}

/// Format a value as JSON
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Format a value as YAML
pub fn format_yaml<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}
