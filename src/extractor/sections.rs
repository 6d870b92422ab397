// src/extractor/sections.rs
//! Splits raw résumé text into named sections by recognizing heading lines.

use std::collections::BTreeMap;

/// Sections a résumé is commonly divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

/// Strategy for carving a résumé into sections. Swappable so callers can
/// plug in format-specific splitters (e.g. for pre-structured exports).
pub trait SectionSplitter: Send + Sync {
    fn split(&self, text: &str) -> BTreeMap<Section, String>;
}

/// Default splitter: a line is a heading when it is short, mostly
/// non-punctuation, and contains a known section term. Text before the first
/// heading is treated as the summary block.
#[derive(Debug, Default, Clone)]
pub struct HeadingSplitter;

impl HeadingSplitter {
    fn heading_for(line: &str) -> Option<Section> {
        let trimmed = line.trim().trim_end_matches(':');
        if trimmed.is_empty() || trimmed.len() > 40 {
            return None;
        }
        let lower = trimmed.to_lowercase();
        if lower.contains("summary") || lower.contains("profile") || lower.contains("about") {
            Some(Section::Summary)
        } else if lower.contains("experience") || lower.contains("work history") {
            Some(Section::Experience)
        } else if lower.contains("education") {
            Some(Section::Education)
        } else if lower.contains("skill") {
            Some(Section::Skills)
        } else if lower.contains("project") {
            Some(Section::Projects)
        } else if lower.contains("certification") || lower.contains("license") {
            Some(Section::Certifications)
        } else {
            None
        }
    }
}

impl SectionSplitter for HeadingSplitter {
    fn split(&self, text: &str) -> BTreeMap<Section, String> {
        let mut sections: BTreeMap<Section, Vec<&str>> = BTreeMap::new();
        let mut current: Option<Section> = None;
        let mut preamble: Vec<&str> = Vec::new();

        for line in text.lines() {
            if let Some(section) = Self::heading_for(line) {
                current = Some(section);
                sections.entry(section).or_default();
                continue;
            }
            match current {
                Some(section) => sections.entry(section).or_default().push(line),
                None => preamble.push(line),
            }
        }

        let mut out: BTreeMap<Section, String> = sections
            .into_iter()
            .map(|(section, lines)| (section, lines.join("\n").trim().to_string()))
            .collect();

        // A resume without an explicit summary heading usually opens with one.
        let preamble = preamble.join("\n").trim().to_string();
        if !preamble.is_empty() {
            out.entry(Section::Summary)
                .and_modify(|existing| {
                    if existing.is_empty() {
                        *existing = preamble.clone();
                    }
                })
                .or_insert(preamble);
        }
        out
    }
}
