use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::career::application::domain::{Certification, Education, Experience};
use crate::modules::profile::application::domain::{ContactInfo, Profile};
use crate::modules::project::application::domain::Project;
use crate::modules::resume::application::domain::document::{
    Line, Paragraph, ResumeDocument, Section, SectionKind, Span, TitleBlock,
};
use crate::modules::skill::application::domain::{group_by_category, Skill};

const MAX_PROJECT_TECHNOLOGIES: usize = 5;

/// Store snapshot the résumé is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeContent {
    pub profile: Option<Profile>,
    pub contact_info: Option<ContactInfo>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
}

/// Pure: equal content always yields an equal document.
pub fn build_resume(content: &ResumeContent) -> ResumeDocument {
    let title = content.profile.as_ref().map(|p| TitleBlock {
        name: p.name.trim().to_string(),
        tagline: p.tagline.trim().to_string(),
    });

    let sections = SectionKind::ORDER
        .into_iter()
        .map(|kind| Section {
            kind,
            paragraphs: section_paragraphs(kind, content),
        })
        .filter(|s| !s.paragraphs.is_empty())
        .collect();

    ResumeDocument { title, sections }
}

fn section_paragraphs(kind: SectionKind, content: &ResumeContent) -> Vec<Paragraph> {
    let paragraphs: Vec<Paragraph> = match kind {
        SectionKind::Contact => contact_paragraph(content).into_iter().collect(),
        SectionKind::Education => content.education.iter().map(education_paragraph).collect(),
        SectionKind::Skills => skill_paragraphs(&content.skills),
        SectionKind::Experience => content.experience.iter().map(experience_paragraph).collect(),
        SectionKind::Projects => featured_projects(&content.projects)
            .into_iter()
            .map(project_paragraph)
            .collect(),
        SectionKind::Achievements => featured_achievements(&content.achievements)
            .into_iter()
            .map(achievement_paragraph)
            .collect(),
        SectionKind::Certifications => featured_certifications(&content.certifications)
            .into_iter()
            .map(certification_paragraph)
            .collect(),
    };

    paragraphs
        .into_iter()
        .filter(|p| !p.lines.is_empty())
        .collect()
}

// ============================================================================
// Sections
// ============================================================================

fn contact_paragraph(content: &ResumeContent) -> Option<Paragraph> {
    let lines = match (&content.contact_info, &content.profile) {
        (Some(info), _) => vec![
            Some(Line::labelled("Email", &info.email)),
            Some(Line::labelled("GitHub", &info.github_url)),
            info.linkedin_url.as_deref().map(|v| Line::labelled("LinkedIn", v)),
            info.phone.as_deref().map(|v| Line::labelled("Phone", v)),
            info.location.as_deref().map(|v| Line::labelled("Location", v)),
        ],
        (None, Some(profile)) => vec![
            Some(Line::labelled("Email", &profile.email)),
            profile.phone.as_deref().map(|v| Line::labelled("Phone", v)),
            profile.location.as_deref().map(|v| Line::labelled("Location", v)),
        ],
        (None, None) => return None,
    };

    Some(Paragraph::new(
        lines
            .into_iter()
            .flatten()
            .filter(|l| has_value(l))
            .collect(),
    ))
}

// `Label: ` with nothing after it
fn has_value(line: &Line) -> bool {
    line.spans.iter().skip(1).any(|s| !s.text.trim().is_empty())
}

fn education_paragraph(edu: &Education) -> Paragraph {
    let mut place = edu.institution.clone();
    if let Some(location) = non_empty(&edu.location) {
        place.push_str(&format!(", {}", location));
    }

    let mut period = vec![Span::plain(edu.period())];
    if let Some(score) = non_empty(&edu.score) {
        period.push(Span::plain(" | "));
        period.push(Span::bold("Score: "));
        period.push(Span::plain(score));
    }

    Paragraph::new(vec![
        Line::bold(&edu.degree),
        Line::plain(place),
        Line::new(period),
    ])
}

fn skill_paragraphs(skills: &[Skill]) -> Vec<Paragraph> {
    group_by_category(skills.to_vec())
        .iter()
        .map(|group| {
            let entries = group
                .skills
                .iter()
                .map(|s| format!("{} ({})", s.name, s.proficiency.label()))
                .collect::<Vec<_>>()
                .join(", ");

            Paragraph::new(vec![Line::new(vec![
                Span::bold(format!("{}: ", group.label())),
                Span::plain(entries),
            ])])
        })
        .collect()
}

fn experience_paragraph(exp: &Experience) -> Paragraph {
    let mut period = exp.period();
    if let Some(location) = non_empty(&exp.location) {
        period.push_str(&format!(" | {}", location));
    }

    Paragraph::new(vec![
        Line::new(vec![
            Span::bold(&exp.title),
            Span::plain(" at "),
            Span::bold(&exp.company),
        ]),
        Line::plain(period),
        Line::plain(&exp.description),
    ])
}

fn project_paragraph(project: &Project) -> Paragraph {
    let mut lines = vec![Line::bold(&project.title), Line::plain(&project.short_description)];

    if !project.technologies.is_empty() {
        let shown: Vec<&str> = project
            .technologies
            .iter()
            .take(MAX_PROJECT_TECHNOLOGIES)
            .map(String::as_str)
            .collect();
        lines.push(Line::labelled("Technologies", shown.join(", ")));
    }

    let mut facts = vec![
        Span::bold("Type: "),
        Span::plain(project.project_type.label()),
        Span::plain(" | "),
        Span::bold("Difficulty: "),
        Span::plain(project.difficulty_level.label()),
    ];
    if let Some(date) = project.completion_date {
        facts.push(Span::plain(" | "));
        facts.push(Span::bold("Completed: "));
        facts.push(Span::plain(month_year(date)));
    }
    lines.push(Line::new(facts));

    if let Some(url) = non_empty(&project.github_url) {
        lines.push(Line::labelled("Source", url));
    }
    if let Some(url) = non_empty(&project.live_url) {
        lines.push(Line::labelled("Live", url));
    }

    Paragraph::new(lines)
}

fn achievement_paragraph(achievement: &Achievement) -> Paragraph {
    Paragraph::new(vec![
        Line::bold(&achievement.title),
        Line::plain(&achievement.description),
        Line::new(vec![
            Span::bold("Type: "),
            Span::plain(achievement.achievement_type.label()),
            Span::plain(" | "),
            Span::bold("Date: "),
            Span::plain(month_year(achievement.date_achieved)),
        ]),
    ])
}

fn certification_paragraph(cert: &Certification) -> Paragraph {
    let mut dates = format!("Issued: {}", month_year(cert.issue_date));
    if let Some(expiry) = cert.expiry_date {
        dates.push_str(&format!(" | Expires: {}", month_year(expiry)));
    }

    Paragraph::new(vec![
        Line::new(vec![
            Span::bold(&cert.name),
            Span::plain(" from "),
            Span::bold(&cert.issuing_organization),
        ]),
        Line::plain(dates),
        Line::plain(&cert.description),
    ])
}

// ============================================================================
// Selection
// ============================================================================

fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    let mut rows: Vec<&Project> = projects.iter().filter(|p| p.featured).collect();
    // completion_date desc, undated last; stable for ties
    rows.sort_by_key(|p| (p.completion_date.is_none(), Reverse(p.completion_date)));
    rows
}

fn featured_achievements(achievements: &[Achievement]) -> Vec<&Achievement> {
    let mut rows: Vec<&Achievement> = achievements.iter().filter(|a| a.featured).collect();
    rows.sort_by_key(|a| Reverse(a.date_achieved));
    rows
}

fn featured_certifications(certifications: &[Certification]) -> Vec<&Certification> {
    let mut rows: Vec<&Certification> = certifications.iter().filter(|c| c.featured).collect();
    rows.sort_by_key(|c| Reverse(c.issue_date));
    rows
}

// ============================================================================
// Helpers
// ============================================================================

fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
