//! Draft text stripping, classification, and section splitting.

use super::model::{DraftLine, DraftSections, MergeError, SECTION_SEPARATOR};

/// A colon this far into a line no longer marks a field label.
const LABEL_MAX_CHARS: usize = 20;

fn is_markup(c: char) -> bool {
    matches!(c, '*' | '#' | '_')
}

/// Drop decorative markup characters and surrounding whitespace. The target
/// rendering has no use for emphasis or heading markers the model may emit.
pub fn strip_markup(line: &str) -> String {
    line.chars()
        .filter(|c| !is_markup(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Classify a stripped, non-empty line.
///
/// A line is a field iff it contains `:` and the text before the first `:` is
/// shorter than [`LABEL_MAX_CHARS`] characters. Known limitation: a narrative
/// sentence with an early colon (e.g. quoted speech) classifies as a field;
/// the threshold only guards against colons deep in a sentence.
pub fn classify_line(clean: &str) -> DraftLine {
    if let Some((label, value)) = clean.split_once(':') {
        if label.chars().count() < LABEL_MAX_CHARS {
            return DraftLine::Field {
                label: label.trim().to_string(),
                value: value.trim().to_string(),
            };
        }
    }
    DraftLine::Narrative(clean.to_string())
}

/// Strip and classify every non-empty line of a draft block.
pub fn draft_lines(content: &str) -> Vec<DraftLine> {
    content
        .lines()
        .map(strip_markup)
        .filter(|line| !line.is_empty())
        .map(|line| classify_line(&line))
        .collect()
}

/// Split a draft into its opening, agenda, and closing sections. Any other
/// section count is a malformed draft, never a silent truncation.
pub fn split_sections(draft: &str) -> Result<DraftSections, MergeError> {
    let parts: Vec<&str> = draft.split(SECTION_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(MergeError::MalformedDraft {
            expected: 3,
            found: parts.len(),
        });
    }
    Ok(DraftSections {
        pembuka: parts[0].trim().to_string(),
        agenda: parts[1].trim().to_string(),
        penutup: parts[2].trim().to_string(),
    })
}
