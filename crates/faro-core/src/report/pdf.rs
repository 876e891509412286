use crate::report::error::RenderError;
use faro_model::report::Report;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

// US Letter with 0.8 inch margins.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 20.3;

const PT_TO_MM: f32 = 0.3528;
// Average Helvetica glyph width as a fraction of the font size. Good enough
// for wrapping; the builtin fonts ship no metrics to measure with.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

/// Tracks the write position on the current page and starts a new page when a
/// line would cross the bottom margin.
struct PageWriter<'d> {
    doc: &'d PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'d> PageWriter<'d> {
    fn new(doc: &'d PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        let line_height = size * PT_TO_MM * 1.4;
        self.ensure_space(line_height);
        self.y -= line_height;
        self.layer.use_text(text, size, Mm(MARGIN), Mm(self.y), font);
    }

    fn paragraph(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        for line in wrap(text, size) {
            self.line(&line, size, font);
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }
}

/// Greedy word wrap against the usable page width. Words longer than a line
/// are split at the line width.
fn wrap(text: &str, size: f32) -> Vec<String> {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    let max_chars = (usable / (size * PT_TO_MM * GLYPH_WIDTH_RATIO)).floor() as usize;
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len > max_chars {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                if chunk.len() == max_chars {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
            continue;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders the report as a single downloadable pdf document.
pub fn render_pdf(report: &Report) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new(&report.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let layer = doc.get_page(page).get_layer(layer);
    let mut writer = PageWriter::new(&doc, layer);

    writer.paragraph(&report.title, 16.0, &bold);
    writer.gap(4.0);
    writer.line(
        &format!("Result: {} ({} points)", report.level_label, report.total),
        13.0,
        &bold,
    );
    writer.gap(4.0);
    writer.paragraph(&report.narrative.definition, 11.0, &regular);
    writer.gap(2.0);
    writer.paragraph(&report.narrative.characteristics, 11.0, &regular);
    writer.gap(4.0);
    writer.line("Suggested learning path", 13.0, &bold);
    writer.paragraph(&report.narrative.learning_path, 11.0, &regular);

    if !report.areas.is_empty() {
        writer.gap(4.0);
        writer.line("Areas to improve", 13.0, &bold);
        for area in &report.areas {
            writer.paragraph(&format!("- {} (lowest score {})", area.section, area.score), 11.0, &regular);
        }
    }

    writer.gap(4.0);
    writer.line("Your answers", 13.0, &bold);
    for answer in &report.breakdown {
        writer.paragraph(&format!("[{}] {}", answer.section, answer.prompt), 11.0, &bold);
        writer.paragraph(&format!("{} ({} points)", answer.label, answer.weight), 11.0, &regular);
        writer.gap(2.0);
    }

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build;
    use crate::report::tests::{test_assessment, test_result};
    use test_log::test;

    /// Counts page objects, not the page tree node.
    fn page_count(bytes: &[u8]) -> usize {
        let body = String::from_utf8_lossy(bytes).replace(' ', "");
        body.matches("/Type/Page").count() - body.matches("/Type/Pages").count()
    }

    #[test]
    fn test_pdf_has_magic_bytes() {
        let report = build(&test_assessment(), &test_result()).unwrap();
        let bytes = render_pdf(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_long_report_spans_pages() {
        let mut result = test_result();
        let answer = result.answers[0].clone();
        for index in 0..60 {
            let mut answer = answer.clone();
            answer.question_id = format!("q{index}");
            answer.prompt = "A rather long question prompt that wraps over multiple lines on the page".to_owned();
            result.answers.push(answer);
        }
        let report = build(&test_assessment(), &result).unwrap();
        let bytes = render_pdf(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(page_count(&bytes) >= 2);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "word ".repeat(100);
        for line in wrap(&text, 11.0) {
            assert!(line.chars().count() <= 91);
        }
    }

    #[test]
    fn test_wrap_splits_oversized_words() {
        let text = format!("before {} after", "x".repeat(300));
        let lines = wrap(&text, 11.0);
        for line in &lines {
            assert!(line.chars().count() <= 91);
        }
        let rejoined: String = lines.concat().split_whitespace().collect();
        assert_eq!(rejoined, format!("before{}after", "x".repeat(300)));
    }
}
