//! Human-readable regression report

use crate::regression::{ClassifiedResults, ComparisonResult};

const RULE_WIDE: usize = 60;
const RULE_NARROW: usize = 40;

/// Format a nanosecond duration in the largest unit that keeps it >= 1
///
/// ```
/// use benchgate::text_output::format_ns;
///
/// assert_eq!(format_ns(1_500_000_000.0), "1.50s");
/// assert_eq!(format_ns(42.0), "42ns");
/// ```
pub fn format_ns(ns: f64) -> String {
    if ns >= 1_000_000_000.0 {
        format!("{:.2}s", ns / 1_000_000_000.0)
    } else if ns >= 1_000_000.0 {
        format!("{:.2}ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2}µs", ns / 1_000.0)
    } else {
        format!("{:.0}ns", ns)
    }
}

/// Signed percentage with one decimal, e.g. `+11.0%` or `-15.0%`
pub fn format_pct(diff_pct: f64) -> String {
    format!("{:+.1}%", diff_pct)
}

/// Render the full report: regressions, improvements, summary
pub fn render(classified: &ClassifiedResults, threshold: f64) -> String {
    let mut report = String::new();

    let wide_rule = "=".repeat(RULE_WIDE);
    report.push('\n');
    report.push_str(&format!("{}\n", wide_rule));
    report.push_str("BENCHMARK REGRESSION CHECK\n");
    report.push_str(&format!("{}\n\n", wide_rule));

    let regressions = classified.sorted_regressions();
    if !regressions.is_empty() {
        report.push_str(&format!("⚠️  REGRESSIONS (>{}% slower):\n", threshold));
        push_entries(&mut report, &regressions);
    }

    let improvements = classified.sorted_improvements();
    if !improvements.is_empty() {
        report.push_str(&format!("✅ IMPROVEMENTS (>{}% faster):\n", threshold));
        push_entries(&mut report, &improvements);
    }

    report.push_str("📊 SUMMARY:\n");
    report.push_str(&format!("{}\n", "-".repeat(RULE_NARROW)));
    report.push_str(&format!(
        "  Regressions:  {}\n",
        classified.regressions.len()
    ));
    report.push_str(&format!(
        "  Improvements: {}\n",
        classified.improvements.len()
    ));
    report.push_str(&format!("  Unchanged:    {}\n", classified.unchanged.len()));
    report.push_str(&format!("  Threshold:    ±{}%\n", threshold));

    report
}

fn push_entries(report: &mut String, entries: &[&ComparisonResult]) {
    report.push_str(&format!("{}\n", "-".repeat(RULE_NARROW)));
    for entry in entries {
        report.push_str(&format!("  {}\n", entry.name));
        report.push_str(&format!("    Baseline: {}\n", format_ns(entry.baseline_ns)));
        report.push_str(&format!("    Current:  {}\n", format_ns(entry.current_ns)));
        report.push_str(&format!("    Change:   {}\n", format_pct(entry.diff_pct)));
    }
    report.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, baseline_ns: f64, current_ns: f64) -> ComparisonResult {
        ComparisonResult::new(name, baseline_ns, current_ns).unwrap()
    }

    #[test]
    fn test_format_ns_units() {
        assert_eq!(format_ns(1_500_000_000.0), "1.50s");
        assert_eq!(format_ns(2_500_000.0), "2.50ms");
        assert_eq!(format_ns(3_500.0), "3.50µs");
        assert_eq!(format_ns(42.0), "42ns");
    }

    #[test]
    fn test_format_ns_unit_boundaries() {
        assert_eq!(format_ns(1_000_000_000.0), "1.00s");
        assert_eq!(format_ns(1_000_000.0), "1.00ms");
        assert_eq!(format_ns(1_000.0), "1.00µs");
        assert_eq!(format_ns(999.0), "999ns");
        assert_eq!(format_ns(0.0), "0ns");
    }

    #[test]
    fn test_format_pct_sign() {
        assert_eq!(format_pct(11.0), "+11.0%");
        assert_eq!(format_pct(-15.0), "-15.0%");
        assert_eq!(format_pct(0.0), "+0.0%");
    }

    #[test]
    fn test_render_regression_section() {
        let classified = ClassifiedResults {
            regressions: vec![result("g/a", 100.0, 111.0)],
            ..Default::default()
        };
        let report = render(&classified, 10.0);

        assert!(report.contains("BENCHMARK REGRESSION CHECK"));
        assert!(report.contains("REGRESSIONS (>10% slower)"));
        assert!(report.contains("  g/a\n"));
        assert!(report.contains("Baseline: 100ns"));
        assert!(report.contains("Current:  111ns"));
        assert!(report.contains("Change:   +11.0%"));
        assert!(!report.contains("IMPROVEMENTS"));
        assert!(report.contains("Regressions:  1"));
        assert!(report.contains("Threshold:    ±10%"));
    }

    #[test]
    fn test_render_improvement_section() {
        let classified = ClassifiedResults {
            improvements: vec![result("g/a", 2_000_000.0, 1_000_000.0)],
            ..Default::default()
        };
        let report = render(&classified, 7.5);

        assert!(!report.contains("REGRESSIONS ("));
        assert!(report.contains("IMPROVEMENTS (>7.5% faster)"));
        assert!(report.contains("Baseline: 2.00ms"));
        assert!(report.contains("Current:  1.00ms"));
        assert!(report.contains("Change:   -50.0%"));
    }

    #[test]
    fn test_render_orders_regressions_worst_first() {
        let classified = ClassifiedResults {
            regressions: vec![
                result("g/mild", 100.0, 120.0),
                result("g/severe", 100.0, 300.0),
            ],
            ..Default::default()
        };
        let report = render(&classified, 10.0);
        let severe = report.find("g/severe").unwrap();
        let mild = report.find("g/mild").unwrap();
        assert!(severe < mild);
    }

    #[test]
    fn test_render_summary_only_when_all_unchanged() {
        let classified = ClassifiedResults {
            unchanged: vec![result("g/a", 100.0, 101.0), result("g/b", 100.0, 99.0)],
            ..Default::default()
        };
        let report = render(&classified, 10.0);
        assert!(!report.contains("REGRESSIONS ("));
        assert!(!report.contains("IMPROVEMENTS ("));
        assert!(report.contains("Unchanged:    2"));
    }
}
