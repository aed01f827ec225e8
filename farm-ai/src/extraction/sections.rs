//! Narrative section splitting

use crate::models::NarrativeSections;

pub const LIFECYCLE_MARKER: &str = "**LIFECYCLE:**";
pub const CARE_MARKER: &str = "**CARE REQUIREMENTS:**";
pub const CLIMATE_MARKER: &str = "**IDEAL CLIMATE:**";
pub const FACTS_MARKER: &str = "**INTERESTING FACTS:**";
pub const SUMMARY_MARKER: &str = "**SUMMARY:**";

/// Markers in prompt order
pub const SECTION_MARKERS: [&str; 5] = [
    LIFECYCLE_MARKER,
    CARE_MARKER,
    CLIMATE_MARKER,
    FACTS_MARKER,
    SUMMARY_MARKER,
];

/// Split narrative text into its five sections
///
/// A trimmed line starting with a marker opens that section; text after the
/// marker on the header line itself is ignored. Non-empty lines up to the
/// next header are newline-joined. Text before the first header is dropped.
/// A repeated header replaces the earlier content unless its own is empty.
pub fn split_sections(text: &str) -> NarrativeSections {
    let mut sections: [String; 5] = Default::default();
    let mut current: Option<(usize, Vec<&str>)> = None;

    for line in text.lines().map(str::trim) {
        if let Some(index) = SECTION_MARKERS.iter().position(|m| line.starts_with(m)) {
            close_section(&mut sections, current.take());
            current = Some((index, Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }
    close_section(&mut sections, current);

    let [lifecycle, care_requirements, ideal_climate, interesting_facts, summary] = sections;

    NarrativeSections {
        lifecycle,
        care_requirements,
        ideal_climate,
        interesting_facts,
        summary,
    }
}

fn close_section(sections: &mut [String; 5], section: Option<(usize, Vec<&str>)>) {
    if let Some((index, lines)) = section {
        if !lines.is_empty() {
            sections[index] = lines.join("\n");
        }
    }
}
