//! Display formatting helpers

/// Format bytes with human-readable units
pub fn format_bytes_human(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: u64 = 1024;

    if bytes < THRESHOLD {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD as f64 && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD as f64;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Value shown in read-only summaries for an optional field left empty
pub fn or_none(value: &str) -> String {
    if value.trim().is_empty() {
        "None".to_string()
    } else {
        value.to_string()
    }
}
