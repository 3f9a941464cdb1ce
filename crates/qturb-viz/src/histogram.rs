//! Text histograms of measurement counts.

use qturb_hal::Counts;

/// Default number of outcomes listed before truncating.
pub const DEFAULT_MAX_ROWS: usize = 16;

/// Render counts as bars, most frequent first.
///
/// Each row shows the bitstring, its count, its percentage and a bar of one
/// block per two percent. Outcomes beyond `max_rows` are summarized in a
/// final line.
pub fn render_histogram(counts: &Counts, max_rows: usize) -> String {
    let sorted = counts.sorted();
    let total = counts.total_shots();
    if total == 0 {
        return "  (no counts)".to_string();
    }
    let total = total as f64;

    let mut lines: Vec<String> = sorted
        .iter()
        .take(max_rows)
        .map(|&(bitstring, &count)| {
            let prob = count as f64 / total * 100.0;
            let bar = "█".repeat((prob / 2.0).round() as usize);
            format!("  {bitstring}: {count:>6} ({prob:>5.2}%) {bar}")
        })
        .collect();

    if sorted.len() > max_rows {
        lines.push(format!(
            "  ... and {} more outcomes",
            sorted.len() - max_rows
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sorted_with_bars() {
        let counts: Counts = [("00".to_string(), 30), ("11".to_string(), 70)]
            .into_iter()
            .collect();
        let text = render_histogram(&counts, DEFAULT_MAX_ROWS);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("  11:     70 (70.00%) {}", "█".repeat(35)));
        assert_eq!(lines[1], format!("  00:     30 (30.00%) {}", "█".repeat(15)));
    }

    #[test]
    fn test_truncation_line() {
        let counts: Counts = (0..5).map(|i| (format!("{i:03b}"), 10 - i)).collect();
        let text = render_histogram(&counts, 3);
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with("  ... and 2 more outcomes"));
        assert!(text.starts_with("  000:     10"));
    }

    #[test]
    fn test_empty_counts() {
        assert_eq!(render_histogram(&Counts::new(), 4), "  (no counts)");
    }
}
