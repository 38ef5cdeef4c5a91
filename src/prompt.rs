//! Prompt assembly for the drafting call.

// Prompt template loaded at compile time
const DRAFT_LETTER: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/draft_letter.md"
));

/// Build the drafting prompt for a free-text instruction. The template asks
/// the model for three sections separated by `===`, which the merge step
/// depends on.
pub fn draft_prompt(instruction: &str) -> String {
    DRAFT_LETTER.replace("{instruction}", instruction.trim())
}
