//! Small helpers shared by the front end.

use std::path::PathBuf;

use crate::error::{PdfToolError, Result};

/// Expand glob patterns into paths, keeping argument order.
///
/// Matches of one pattern are sorted, as `glob` yields them. An argument
/// without glob metacharacters, or a pattern that matches nothing, is kept
/// as a literal path so that validation can report it as missing.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !has_glob_chars(pattern) {
            resolved_paths.push(PathBuf::from(pattern));
            continue;
        }

        let matches = collect_paths_for_pattern(pattern)?;
        if matches.is_empty() {
            tracing::debug!(pattern, "pattern matched nothing, keeping it literally");
            resolved_paths.push(PathBuf::from(pattern));
        } else {
            resolved_paths.extend(matches);
        }
    }

    Ok(resolved_paths)
}

fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|err| {
        PdfToolError::invalid_config(format!("Invalid glob pattern '{pattern}': {err}"))
    })?;

    paths
        .map(|entry| entry.map_err(|err| PdfToolError::invalid_config(err.to_string())))
        .collect()
}

fn has_glob_chars(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Format a byte count for display, e.g. `1.50 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.2} {}", UNITS[unit])
    }
}
