//! Fixed letter typography for emitted paragraphs.
//!
//! Every emitted paragraph is justified, 1.15-spaced Times New Roman 12pt.
//! Field lines get a left indent and one tab stop so their values align in a
//! column; narrative lines get a first-line indent.

use docx_rs::{
    AlignmentType, LineSpacing, LineSpacingType, Paragraph, Run, RunFonts, SpecialIndentType, Tab,
    TabValueType,
};

use super::model::DraftLine;

pub const FONT_FAMILY: &str = "Times New Roman";

/// Body text, half-points (12pt).
pub const BODY_HALF_POINTS: usize = 24;

/// Header text, half-points (11pt).
pub const HEADER_HALF_POINTS: usize = 22;

// Indents and tab positions in twentieths of a point: 1440 per inch.
const FIELD_LEFT_INDENT: i32 = 1440; // 1.00"
const FIELD_TAB_POS: usize = 3600; // 2.50"
const NARRATIVE_FIRST_LINE: i32 = 720; // 0.50"

/// Build the output paragraph for one classified draft line.
pub fn draft_paragraph(line: &DraftLine) -> Paragraph {
    match line {
        DraftLine::Field { label, value } => field_paragraph(label, value),
        DraftLine::Narrative(text) => narrative_paragraph(text),
    }
}

fn body_paragraph() -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Both)
        .line_spacing(LineSpacing::new().line_rule(LineSpacingType::Auto).line(276))
}

fn body_fonts() -> RunFonts {
    RunFonts::new().ascii(FONT_FAMILY).hi_ansi(FONT_FAMILY)
}

/// `label<TAB>: value`, tab-aligned at the fixed column.
fn field_paragraph(label: &str, value: &str) -> Paragraph {
    body_paragraph()
        .indent(Some(FIELD_LEFT_INDENT), None, None, None)
        .add_tab(
            Tab::new()
                .val(TabValueType::Left)
                .pos(FIELD_TAB_POS),
        )
        .add_run(
            Run::new()
                .add_text(label)
                .add_tab()
                .add_text(format!(": {value}"))
                .fonts(body_fonts())
                .size(BODY_HALF_POINTS),
        )
}

fn narrative_paragraph(text: &str) -> Paragraph {
    body_paragraph()
        .indent(
            None,
            Some(SpecialIndentType::FirstLine(NARRATIVE_FIRST_LINE)),
            None,
            None,
        )
        .add_run(
            Run::new()
                .add_text(text)
                .fonts(body_fonts())
                .size(BODY_HALF_POINTS),
        )
}
