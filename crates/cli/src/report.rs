use std::io::{self, Write};

use skincare_core::pipeline::analyze_image_use_case::{AnalysisReport, ConditionFinding};

/// Writes the advice blocks for a report in reading order.
pub fn write_text(report: &AnalysisReport, out: &mut impl Write) -> io::Result<()> {
    if report.findings.is_empty() {
        writeln!(out, "No detections found.")?;
        return Ok(());
    }

    writeln!(out, "Skincare Advice:")?;
    for finding in &report.findings {
        writeln!(out)?;
        write_finding(finding, out)?;
    }
    Ok(())
}

fn write_finding(finding: &ConditionFinding, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Condition: {}", capitalize(&finding.condition))?;
    writeln!(out, "Advice: {}", finding.advice.advice)?;
    writeln!(out, "Recommended Products:")?;
    for product in finding.advice.products {
        writeln!(out, "- {product}")?;
    }
    writeln!(out, "Prevention Tips:")?;
    for tip in finding.advice.prevention {
        writeln!(out, "- {tip}")?;
    }
    Ok(())
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skincare_core::advice::domain::advice_table::advice_for;
    use skincare_core::shared::frame::Frame;

    fn report(names: &[&str]) -> AnalysisReport {
        AnalysisReport {
            original: Frame::filled(2, 2, [0, 0, 0]),
            annotated: Frame::filled(2, 2, [0, 0, 0]),
            detections: Vec::new(),
            findings: names
                .iter()
                .map(|n| ConditionFinding {
                    condition: n.to_string(),
                    advice: advice_for(n),
                })
                .collect(),
            notices: Vec::new(),
        }
    }

    fn render(report: &AnalysisReport) -> String {
        let mut buf = Vec::new();
        write_text(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_no_findings_message() {
        assert_eq!(render(&report(&[])), "No detections found.\n");
    }

    #[test]
    fn test_acne_block() {
        let text = render(&report(&["acne"]));
        assert!(text.starts_with("Skincare Advice:\n"));
        assert!(text.contains("Condition: Acne\n"));
        assert!(text.contains("Recommended Products:\n- Salicylic Acid Cleanser\n"));
        assert!(text.contains("Prevention Tips:\n- Wash your face twice daily with a mild cleanser.\n"));
    }

    #[test]
    fn test_unknown_block_has_empty_lists() {
        let text = render(&report(&["Unknown"]));
        assert!(text.contains(
            "Condition: Unknown\nAdvice: No specific advice available for this condition.\nRecommended Products:\nPrevention Tips:\n"
        ));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("eyebag"), "Eyebag");
        assert_eq!(capitalize("UNKNOWN"), "Unknown");
        assert_eq!(capitalize(""), "");
    }
}
