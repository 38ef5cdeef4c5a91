//! Draft merging into the letter template.
//!
//! A merge is a pure, single-pass transformation: split the edited draft into
//! its three sections, substitute the header tags, then replace each body tag
//! with one formatted paragraph per non-empty draft line. The draft text is
//! never mutated and the merge performs no I/O.

mod format;
mod model;
mod parse;

pub use format::{draft_paragraph, BODY_HALF_POINTS, FONT_FAMILY, HEADER_HALF_POINTS};
pub use model::{
    DraftLine, DraftSections, LetterFields, MergeError, MergeSummary, TagFill, SECTION_SEPARATOR,
    TAG_AGENDA, TAG_PEMBUKA,
};
pub use parse::{classify_line, draft_lines, split_sections, strip_markup};

use crate::template::Template;

/// Replace `tag`'s paragraph with one formatted paragraph per non-empty line
/// of `content`, inserted at the tag's position in document order. A tag
/// absent from the template is a no-op, reported as [`TagFill::Missing`].
pub fn fill_tag(template: &mut Template, tag: &str, content: &str) -> TagFill {
    let Some(index) = template.find_tag(tag) else {
        return TagFill::Missing;
    };
    template.strip_tag(index, tag);
    let paragraphs: Vec<_> = draft_lines(content).iter().map(draft_paragraph).collect();
    let count = paragraphs.len();
    template.insert_paragraphs(index + 1, paragraphs);
    tracing::debug!(tag, paragraphs = count, "filled body tag");
    TagFill::Filled { paragraphs: count }
}

/// Merge an edited draft and letter metadata into the template.
///
/// Header tags absent from the template are skipped silently; body tags
/// absent from the template are no-ops. Both are recorded in the summary so
/// the caller can surface them.
pub fn merge_letter(
    template: &mut Template,
    fields: &LetterFields,
    draft: &str,
) -> Result<MergeSummary, MergeError> {
    let sections = split_sections(draft)?;

    let (header_tags_replaced, missing_header_tags) =
        template.replace_inline_tags(&fields.tag_map(), FONT_FAMILY, HEADER_HALF_POINTS);

    let mut summary = MergeSummary {
        paragraphs_added: 0,
        header_tags_replaced,
        missing_header_tags,
        missing_body_tags: Vec::new(),
    };

    let body = [
        (TAG_PEMBUKA, sections.pembuka.clone()),
        (
            TAG_AGENDA,
            format!("{}\n{}", sections.agenda, sections.penutup),
        ),
    ];
    for (tag, content) in body {
        match fill_tag(template, tag, &content) {
            TagFill::Filled { paragraphs } => summary.paragraphs_added += paragraphs,
            TagFill::Missing => summary.missing_body_tags.push(tag.to_string()),
        }
    }

    tracing::info!(
        paragraphs = summary.paragraphs_added,
        missing_body_tags = summary.missing_body_tags.len(),
        "merged draft into template"
    );
    Ok(summary)
}
