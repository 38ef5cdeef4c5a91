//! LM-assisted drafting and docx template merging for formal letters.
//!
//! The workflow has three steps: `draft` asks the generative-language API for
//! a three-section letter body, the user edits the draft text by hand, and
//! `merge` stamps the edited draft into a `.docx` letter template with fixed
//! typography.

pub mod cli;
pub mod config;
pub mod genai;
pub mod merge;
pub mod prompt;
pub mod template;
