const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Renders a volume in cubic centimetres with one decimal and thousands
/// separators, e.g. `1,203.5 cc`.
pub fn format_volume_cc(volume: f64) -> String {
    let rendered = format!("{:.1}", volume.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "0"));
    let sign = if volume < 0.0 { "-" } else { "" };
    format!("{sign}{}.{fraction} cc", group_thousands(whole))
}

pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", BYTE_UNITS[unit])
    }
}

pub fn pluralize(count: usize, singular: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {singular}{suffix}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volumes_use_thousands_separators() {
        assert_eq!(format_volume_cc(34.2), "34.2 cc");
        assert_eq!(format_volume_cc(752.8), "752.8 cc");
        assert_eq!(format_volume_cc(1203.5), "1,203.5 cc");
        assert_eq!(format_volume_cc(1_234_567.0), "1,234,567.0 cc");
        assert_eq!(format_volume_cc(0.0), "0.0 cc");
    }

    #[test]
    fn bytes_scale_to_the_largest_whole_unit() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5_583_457_485), "5.2 GB");
    }

    #[test]
    fn pluralize_handles_singular() {
        assert_eq!(pluralize(1, "structure"), "1 structure");
        assert_eq!(pluralize(5, "structure"), "5 structures");
    }
}
