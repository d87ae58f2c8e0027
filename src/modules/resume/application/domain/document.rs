//! Format-independent résumé structure.
//!
//! The builder produces a [`ResumeDocument`]; the layout pass and the PDF
//! writer only ever see this model, never the store.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One hard line; the layout pass may wrap it further.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(vec![Span::bold(text)])
    }

    /// `Label: value` with the label in bold.
    pub fn labelled(label: &str, value: impl Into<String>) -> Self {
        Self::new(vec![Span::bold(format!("{}: ", label)), Span::plain(value)])
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub lines: Vec<Line>,
}

impl Paragraph {
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| !l.is_blank()).collect(),
        }
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Contact,
    Education,
    Skills,
    Experience,
    Projects,
    Achievements,
    Certifications,
}

impl SectionKind {
    /// Fixed rendering order.
    pub const ORDER: [SectionKind; 7] = [
        SectionKind::Contact,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Achievements,
        SectionKind::Certifications,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Contact => "CONTACT INFORMATION",
            SectionKind::Education => "EDUCATION",
            SectionKind::Skills => "TECHNICAL SKILLS",
            SectionKind::Experience => "EXPERIENCE",
            SectionKind::Projects => "FEATURED PROJECTS",
            SectionKind::Achievements => "ACHIEVEMENTS",
            SectionKind::Certifications => "CERTIFICATIONS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBlock {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResumeDocument {
    pub title: Option<TitleBlock>,
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn document_title(&self) -> String {
        match &self.title {
            Some(title) => format!("{} - CV", title.name),
            None => "Portfolio CV".to_string(),
        }
    }
}
