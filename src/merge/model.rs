//! Data types for the draft merge.

use serde::Serialize;
use thiserror::Error;

/// Body tag filled with the opening section.
pub const TAG_PEMBUKA: &str = "{{pembuka}}";

/// Body tag filled with the agenda and closing sections.
pub const TAG_AGENDA: &str = "{{agenda}}";

/// Separator the draft must carry between its three sections.
pub const SECTION_SEPARATOR: &str = "===";

/// Classification of one non-empty draft line, derived at merge time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftLine {
    /// Label/value pair rendered with tab-stop alignment.
    Field { label: String, value: String },
    /// Prose rendered with a first-line indent.
    Narrative(String),
}

/// The three draft sections split on [`SECTION_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSections {
    pub pembuka: String,
    pub agenda: String,
    pub penutup: String,
}

/// Letter metadata substituted into the template header.
#[derive(Debug, Clone)]
pub struct LetterFields {
    pub nomor: String,
    pub hal: String,
    pub lampiran: String,
    pub yth: String,
    pub tempat: String,
    /// Full date line, e.g. `"Tegal, 21 Februari 2026"`.
    pub tanggal: String,
}

impl LetterFields {
    pub fn tag_map(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("{{nomor}}", self.nomor.as_str()),
            ("{{hal}}", self.hal.as_str()),
            ("{{yth}}", self.yth.as_str()),
            ("{{lamp}}", self.lampiran.as_str()),
            ("{{tempat}}", self.tempat.as_str()),
            ("{{tanggal}}", self.tanggal.as_str()),
        ]
    }
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error(
        "draft is malformed: expected {expected} sections separated by '===', found {found}; \
         fix the separators in the draft text"
    )]
    MalformedDraft { expected: usize, found: usize },
}

/// Outcome of filling one body tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFill {
    Filled { paragraphs: usize },
    /// The tag is absent from the template; the merge was a no-op for it.
    Missing,
}

/// Machine-readable result of a letter merge.
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub paragraphs_added: usize,
    pub header_tags_replaced: Vec<String>,
    pub missing_header_tags: Vec<String>,
    pub missing_body_tags: Vec<String>,
}
