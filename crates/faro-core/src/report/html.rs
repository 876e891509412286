use faro_model::report::Report;
use html_escape::encode_text;

/// Renders the report as an html fragment suitable for embedding. All report
/// text is escaped, including configuration-provided strings.
#[must_use]
pub fn render_html(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("<h1>{}</h1>\n", encode_text(&report.title)));
    out.push_str(&format!(
        "<h2>Result: {} ({} points)</h2>\n",
        encode_text(&report.level_label),
        report.total
    ));
    out.push_str(&format!(
        "<p class=\"definition\">{}</p>\n",
        encode_text(&report.narrative.definition)
    ));
    out.push_str(&format!(
        "<p class=\"characteristics\">{}</p>\n",
        encode_text(&report.narrative.characteristics)
    ));
    out.push_str("<h3>Suggested learning path</h3>\n");
    out.push_str(&format!("<p>{}</p>\n", encode_text(&report.narrative.learning_path)));
    if !report.areas.is_empty() {
        out.push_str("<h3>Areas to improve</h3>\n<ul>\n");
        for area in &report.areas {
            out.push_str(&format!("<li>{} (lowest score {})</li>\n", encode_text(&area.section), area.score));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("<h3>Your answers</h3>\n<table>\n<tr><th>Section</th><th>Question</th><th>Answer</th><th>Score</th></tr>\n");
    for answer in &report.breakdown {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            encode_text(&answer.section),
            encode_text(&answer.prompt),
            encode_text(&answer.label),
            answer.weight
        ));
    }
    out.push_str("</table>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build;
    use crate::report::tests::{test_assessment, test_result};
    use test_log::test;

    #[test]
    fn test_html_contains_report_content() {
        let report = build(&test_assessment(), &test_result()).unwrap();
        let html = render_html(&report);
        assert!(html.contains("Workplace Inclusion Assessment"));
        assert!(html.contains("Result: Intermediate (17 points)"));
        assert!(html.contains("Intermediate learning path"));
        assert!(html.contains("<td>We are drafting one</td>"));
    }

    #[test]
    fn test_html_escapes_markup() {
        let mut result = test_result();
        result.answers[0].label = "<script>alert(1)</script>".to_owned();
        let report = build(&test_assessment(), &result).unwrap();
        let html = render_html(&report);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
