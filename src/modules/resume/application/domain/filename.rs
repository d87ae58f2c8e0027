use chrono::NaiveDate;

use crate::modules::profile::application::domain::Profile;

const FALLBACK_STEM: &str = "Portfolio";

/// `<Name>_CV[_YYYY-MM-DD].pdf`. Letters outside ASCII are kept; the web
/// adapter adds the ASCII fallback for the header.
pub fn resume_filename(profile: Option<&Profile>, stamp: Option<NaiveDate>) -> String {
    let stem = profile
        .map(|p| sanitize_stem(&p.name))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());

    match stamp {
        Some(date) => format!("{}_CV_{}.pdf", stem, date.format("%Y-%m-%d")),
        None => format!("{}_CV.pdf", stem),
    }
}

fn sanitize_stem(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
