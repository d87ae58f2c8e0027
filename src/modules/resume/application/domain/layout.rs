//! Line wrapping and pagination for [`ResumeDocument`].
//!
//! Works in millimetres with the page origin at the bottom-left corner, the
//! same convention the PDF writer uses. Text widths come from the standard
//! Helvetica metrics so the writer can use the built-in fonts without
//! embedding anything.

use crate::modules::resume::application::domain::document::{Line, ResumeDocument};

const PT_TO_MM: f32 = 0.3528;
const LEADING: f32 = 1.35;

const TITLE: TextStyle = TextStyle::new(20.0, true);
const TAGLINE: TextStyle = TextStyle::new(12.0, true);
const HEADING: TextStyle = TextStyle::new(14.0, false);
const BODY: TextStyle = TextStyle::new(10.0, false);

const TITLE_GAP_MM: f32 = 6.0;
const SECTION_GAP_MM: f32 = 5.0;
const HEADING_GAP_MM: f32 = 1.5;
const PARAGRAPH_GAP_MM: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl Default for PageGeometry {
    /// A4 portrait, 20 mm margins.
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 20.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    fn top(&self) -> f32 {
        self.height_mm - self.margin_mm
    }

    fn bottom(&self) -> f32 {
        self.margin_mm
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun {
    pub x_mm: f32,
    pub text: String,
    pub bold: bool,
}

/// One baseline of text; `y_mm` is measured from the bottom edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub y_mm: f32,
    pub size_pt: f32,
    pub runs: Vec<PlacedRun>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlacedPage {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size_pt: f32,
    centered: bool,
}

impl TextStyle {
    const fn new(size_pt: f32, centered: bool) -> Self {
        Self { size_pt, centered }
    }

    fn line_height(&self) -> f32 {
        self.size_pt * PT_TO_MM * LEADING
    }
}

/// Always returns at least one page.
pub fn layout_document(doc: &ResumeDocument, geometry: &PageGeometry) -> Vec<PlacedPage> {
    let mut pager = Paginator::new(*geometry);

    if let Some(title) = &doc.title {
        let name = Line::bold(&title.name);
        pager.place_rows(wrap(&name, TITLE.size_pt, geometry.content_width()), TITLE);

        let tagline = Line::plain(&title.tagline);
        pager.place_rows(wrap(&tagline, TAGLINE.size_pt, geometry.content_width()), TAGLINE);
        pager.gap(TITLE_GAP_MM);
    }

    for section in &doc.sections {
        pager.gap(SECTION_GAP_MM);

        let heading = wrap(
            &Line::bold(section.kind.heading()),
            HEADING.size_pt,
            geometry.content_width(),
        );
        // keep the heading with the first body line
        let heading_height = heading.len() as f32 * HEADING.line_height();
        pager.ensure_room(heading_height + HEADING_GAP_MM + BODY.line_height());
        pager.place_rows(heading, HEADING);
        pager.gap(HEADING_GAP_MM);

        for (index, paragraph) in section.paragraphs.iter().enumerate() {
            if index > 0 {
                pager.gap(PARAGRAPH_GAP_MM);
            }
            for line in &paragraph.lines {
                pager.place_rows(wrap(line, BODY.size_pt, geometry.content_width()), BODY);
            }
        }
    }

    pager.finish()
}

// ============================================================================
// Pagination
// ============================================================================

struct Paginator {
    geometry: PageGeometry,
    pages: Vec<PlacedPage>,
    current: PlacedPage,
    cursor: f32,
}

impl Paginator {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: PlacedPage::default(),
            cursor: geometry.top(),
        }
    }

    fn break_page(&mut self) {
        let full = std::mem::take(&mut self.current);
        self.pages.push(full);
        self.cursor = self.geometry.top();
    }

    /// Vertical space; swallowed at the top of a page.
    fn gap(&mut self, mm: f32) {
        if self.current.lines.is_empty() {
            return;
        }
        self.cursor -= mm;
    }

    fn ensure_room(&mut self, height: f32) {
        if !self.current.lines.is_empty() && self.cursor - height < self.geometry.bottom() {
            self.break_page();
        }
    }

    fn place_rows(&mut self, rows: Vec<Row>, style: TextStyle) {
        for row in rows {
            let line_height = style.line_height();
            self.ensure_room(line_height);

            let baseline = self.cursor - style.size_pt * PT_TO_MM;
            self.cursor -= line_height;

            let indent = if style.centered {
                ((self.geometry.content_width() - row.width) / 2.0).max(0.0)
            } else {
                0.0
            };
            let left = self.geometry.margin_mm + indent;

            self.current.lines.push(PlacedLine {
                y_mm: baseline,
                size_pt: style.size_pt,
                runs: row
                    .runs
                    .into_iter()
                    .map(|r| PlacedRun {
                        x_mm: left + r.offset,
                        text: r.text,
                        bold: r.bold,
                    })
                    .collect(),
            });
        }
    }

    fn finish(mut self) -> Vec<PlacedPage> {
        if !self.current.lines.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

// ============================================================================
// Wrapping
// ============================================================================

#[derive(Debug, Default)]
struct Row {
    runs: Vec<RowRun>,
    width: f32,
}

#[derive(Debug)]
struct RowRun {
    offset: f32,
    text: String,
    bold: bool,
}

impl Row {
    fn push(&mut self, word: &str, bold: bool, spaced: bool, size_pt: f32) {
        let gap = if spaced && !self.runs.is_empty() {
            text_width_mm(" ", bold, size_pt)
        } else {
            0.0
        };

        match self.runs.last_mut() {
            Some(last) if last.bold == bold => {
                if gap > 0.0 {
                    last.text.push(' ');
                }
                last.text.push_str(word);
            }
            _ => self.runs.push(RowRun {
                offset: self.width + gap,
                text: word.to_string(),
                bold,
            }),
        }
        self.width += gap + text_width_mm(word, bold, size_pt);
    }
}

struct Word {
    text: String,
    bold: bool,
    spaced: bool,
}

fn words(line: &Line) -> Vec<Word> {
    let mut out = Vec::new();
    let mut pending_space = false;

    for span in &line.spans {
        let text = sanitize(&span.text);
        let mut current = String::new();

        for c in text.chars() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    out.push(Word {
                        text: std::mem::take(&mut current),
                        bold: span.bold,
                        spaced: pending_space,
                    });
                }
                pending_space = true;
            } else {
                current.push(c);
            }
        }

        if !current.is_empty() {
            out.push(Word {
                text: current,
                bold: span.bold,
                spaced: pending_space,
            });
            pending_space = false;
        }
    }

    out
}

fn wrap(line: &Line, size_pt: f32, max_width: f32) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row = Row::default();

    for word in words(line) {
        let gap = if word.spaced && !row.runs.is_empty() {
            text_width_mm(" ", word.bold, size_pt)
        } else {
            0.0
        };
        let width = text_width_mm(&word.text, word.bold, size_pt);

        if row.width + gap + width <= max_width {
            row.push(&word.text, word.bold, word.spaced, size_pt);
            continue;
        }

        if !row.runs.is_empty() {
            rows.push(std::mem::take(&mut row));
        }

        let mut rest = word.text.as_str();
        while text_width_mm(rest, word.bold, size_pt) > max_width {
            let (head, tail) = split_to_fit(rest, word.bold, size_pt, max_width);
            row.push(head, word.bold, false, size_pt);
            rows.push(std::mem::take(&mut row));
            rest = tail;
        }
        if !rest.is_empty() {
            row.push(rest, word.bold, false, size_pt);
        }
    }

    if !row.runs.is_empty() {
        rows.push(row);
    }
    rows
}

/// Longest prefix that fits, never empty.
fn split_to_fit(word: &str, bold: bool, size_pt: f32, max_width: f32) -> (&str, &str) {
    let mut width = 0.0;
    let mut end = 0;

    for (index, c) in word.char_indices() {
        let w = f32::from(char_width(c, bold)) * size_pt * PT_TO_MM / 1000.0;
        if width + w > max_width && end > 0 {
            break;
        }
        width += w;
        end = index + c.len_utf8();
    }

    word.split_at(end)
}

// ============================================================================
// Metrics
// ============================================================================

/// Maps text onto the WinAnsi subset the built-in fonts cover: printable
/// ASCII plus Latin-1. Typographic punctuation falls back to ASCII and
/// anything else becomes `?`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' | '\u{a1}'..='\u{ff}' => out.push(c),
            '\t' | '\n' | '\r' | '\u{a0}' => out.push(' '),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{2032}' => out.push('\''),
            '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{2033}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('*'),
            _ => out.push('?'),
        }
    }
    out
}

/// Width in millimetres of already sanitized text.
pub fn text_width_mm(text: &str, bold: bool, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, bold))).sum();
    units as f32 * size_pt * PT_TO_MM / 1000.0
}

fn char_width(c: char, bold: bool) -> u16 {
    let (ascii, latin1) = if bold {
        (&HELVETICA_BOLD, &HELVETICA_BOLD_LATIN1)
    } else {
        (&HELVETICA, &HELVETICA_LATIN1)
    };
    match c {
        ' '..='~' => ascii[c as usize - 0x20],
        '\u{a0}'..='\u{ff}' => latin1[c as usize - 0xa0],
        _ => ascii['?' as usize - 0x20],
    }
}

// Advance widths for code points 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// Advance widths for U+00A0..=U+00FF.
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::resume::application::domain::builder::{build_resume, ResumeContent};
    use crate::modules::resume::application::domain::document::{
        Paragraph, Section, SectionKind, TitleBlock,
    };
    use crate::tests::support::fixtures::sample_profile;

    const EPSILON: f32 = 0.01;

    fn paragraph(i: usize) -> Paragraph {
        Paragraph::new(vec![
            Line::bold(format!("Project number {}", i)),
            Line::plain("A reasonably long description that should wrap onto more than one line once it reaches the right margin of an A4 page."),
            Line::labelled("Technologies", "Rust, Actix, PostgreSQL"),
        ])
    }

    fn document(paragraphs: usize) -> ResumeDocument {
        ResumeDocument {
            title: Some(TitleBlock {
                name: "Ada Lovelace".to_string(),
                tagline: "Analytical engines".to_string(),
            }),
            sections: SectionKind::ORDER
                .into_iter()
                .map(|kind| Section {
                    kind,
                    paragraphs: (0..paragraphs).map(paragraph).collect(),
                })
                .collect(),
        }
    }

    fn assert_within_margins(pages: &[PlacedPage], geometry: &PageGeometry) {
        for page in pages {
            for line in &page.lines {
                assert!(line.y_mm >= geometry.margin_mm - EPSILON);
                assert!(line.y_mm <= geometry.height_mm - geometry.margin_mm + EPSILON);
                for run in &line.runs {
                    let right = run.x_mm + text_width_mm(&run.text, run.bold, line.size_pt);
                    assert!(run.x_mm >= geometry.margin_mm - EPSILON);
                    assert!(right <= geometry.width_mm - geometry.margin_mm + EPSILON);
                }
            }
        }
    }

    #[test]
    fn short_document_fits_one_page_within_margins() {
        let geometry = PageGeometry::default();
        let pages = layout_document(&document(1), &geometry);

        assert_eq!(pages.len(), 1);
        assert_within_margins(&pages, &geometry);
    }

    #[test]
    fn long_document_spills_onto_more_pages() {
        let geometry = PageGeometry::default();
        let pages = layout_document(&document(12), &geometry);

        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| !p.lines.is_empty()));
        assert_within_margins(&pages, &geometry);
    }

    #[test]
    fn baselines_descend_within_a_page() {
        let pages = layout_document(&document(6), &PageGeometry::default());

        for page in &pages {
            for pair in page.lines.windows(2) {
                assert!(pair[1].y_mm < pair[0].y_mm);
            }
        }
    }

    #[test]
    fn headings_are_never_left_at_the_bottom_of_a_page() {
        let pages = layout_document(&document(9), &PageGeometry::default());

        for page in &pages[..pages.len() - 1] {
            let last = page.lines.last().unwrap();
            assert_ne!(last.size_pt, HEADING.size_pt);
        }
    }

    #[test]
    fn overlong_words_are_split_to_fit() {
        let geometry = PageGeometry::default();
        let doc = ResumeDocument {
            title: None,
            sections: vec![Section {
                kind: SectionKind::Projects,
                paragraphs: vec![Paragraph::new(vec![Line::plain(format!(
                    "https://example.com/{}",
                    "x".repeat(400)
                ))])],
            }],
        };

        let pages = layout_document(&doc, &geometry);

        assert!(pages[0].lines.len() > 2);
        assert_within_margins(&pages, &geometry);
    }

    #[test]
    fn labelled_line_keeps_bold_label_and_plain_value() {
        let rows = wrap(&Line::labelled("Email", "ada@example.com"), 10.0, 170.0);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].runs[0].text, "Email:");
        assert!(rows[0].runs[0].bold);
        assert_eq!(rows[0].runs[1].text, "ada@example.com");
        assert!(!rows[0].runs[1].bold);
        assert!(rows[0].runs[1].offset > text_width_mm("Email:", true, 10.0));
    }

    #[test]
    fn empty_document_yields_one_blank_page() {
        let pages = layout_document(&ResumeDocument::default(), &PageGeometry::default());

        assert_eq!(pages, vec![PlacedPage::default()]);
    }

    #[test]
    fn layout_is_deterministic() {
        let geometry = PageGeometry::default();
        let doc = document(8);

        assert_eq!(layout_document(&doc, &geometry), layout_document(&doc, &geometry));
    }

    #[test]
    fn sanitize_maps_typography_to_ascii() {
        assert_eq!(sanitize("2021 – Present"), "2021 - Present");
        assert_eq!(sanitize("“Quoted” it’s…"), "\"Quoted\" it's...");
        assert_eq!(sanitize("日本"), "??");
    }

    #[test]
    fn sanitize_keeps_latin1_letters() {
        for text in ["José Müller", "Zoë Ñúñez", "Straße £5 ©"] {
            assert_eq!(sanitize(text), text);
        }
    }

    #[test]
    fn accented_letters_use_their_own_widths() {
        assert!((text_width_mm("é", false, 10.0) - text_width_mm("e", false, 10.0)).abs() < EPSILON);
        assert!(text_width_mm("Æ", true, 10.0) > text_width_mm("A", true, 10.0));
        assert!((text_width_mm("Æ", false, 10.0) - 1000.0 * 10.0 * PT_TO_MM / 1000.0).abs() < EPSILON);
    }

    #[test]
    fn accented_profile_name_is_placed_unchanged() {
        let content = ResumeContent {
            profile: Some(sample_profile("José Müller")),
            ..ResumeContent::default()
        };
        let doc = build_resume(&content);

        let pages = layout_document(&doc, &PageGeometry::default());

        assert_eq!(pages[0].lines[0].runs[0].text, "José Müller");
    }

    #[test]
    fn overlong_accented_word_splits_on_char_boundaries() {
        let word = "é".repeat(200);
        let (head, tail) = split_to_fit(&word, false, 10.0, 50.0);

        assert!(!head.is_empty());
        assert!(!tail.is_empty());
        assert_eq!(head.chars().count() + tail.chars().count(), 200);
        assert!(text_width_mm(head, false, 10.0) <= 50.0 + EPSILON);
    }
}
