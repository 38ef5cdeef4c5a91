//! List-based view over the docx template body.
//!
//! Placeholder work happens against the document's ordered child list with
//! indexed insertion, never against a live iteration target, so a tag is
//! replaced exactly once in document order and untouched paragraphs keep
//! their position and content.

use anyhow::{Context, Result};
use docx_rs::{read_docx, Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, RunFonts};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// A letter template loaded fresh per merge and serialized once.
pub struct Template {
    docx: Docx,
}

impl Template {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("read template {}", path.display()))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let docx = read_docx(bytes).context("parse docx template")?;
        Ok(Self { docx })
    }

    /// Visible text of every body paragraph, in document order.
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect()
    }

    /// Index of the first body child whose paragraph contains `tag`.
    pub fn find_tag(&self, tag: &str) -> Option<usize> {
        self.docx.document.children.iter().position(|child| {
            matches!(child, DocumentChild::Paragraph(p) if paragraph_text(p).contains(tag))
        })
    }

    /// Remove `tag` from the paragraph at `index`, preserving the paragraph's
    /// properties. The paragraph stays in place (possibly empty), which keeps
    /// every other child index stable.
    pub fn strip_tag(&mut self, index: usize, tag: &str) {
        let Some(DocumentChild::Paragraph(paragraph)) =
            self.docx.document.children.get_mut(index)
        else {
            return;
        };
        let text = paragraph_text(paragraph).replace(tag, "");
        let property = paragraph.property.clone();
        let mut rebuilt = Paragraph::new();
        if !text.is_empty() {
            rebuilt = rebuilt.add_run(Run::new().add_text(text));
        }
        rebuilt.property = property;
        **paragraph = rebuilt;
    }

    /// Insert paragraphs at `index`, shifting later children back.
    pub fn insert_paragraphs(&mut self, index: usize, paragraphs: Vec<Paragraph>) {
        let index = index.min(self.docx.document.children.len());
        self.docx.document.children.splice(
            index..index,
            paragraphs
                .into_iter()
                .map(|paragraph| DocumentChild::Paragraph(Box::new(paragraph))),
        );
    }

    /// Substitute header tags in place. Each paragraph containing a known tag
    /// is re-rendered as a single run in `font` at `half_points`, matching the
    /// source behavior of collapsing runs on header substitution. Returns the
    /// tags that were replaced and the tags never seen.
    pub fn replace_inline_tags(
        &mut self,
        tags: &[(&str, &str)],
        font: &str,
        half_points: usize,
    ) -> (Vec<String>, Vec<String>) {
        let mut replaced: Vec<String> = Vec::new();
        for child in &mut self.docx.document.children {
            let DocumentChild::Paragraph(paragraph) = child else {
                continue;
            };
            let original = paragraph_text(paragraph);
            let mut text = original.clone();
            for (tag, value) in tags {
                text = text.replace(tag, value);
            }
            if text == original {
                continue;
            }
            for (tag, _) in tags {
                if original.contains(tag) && !replaced.iter().any(|seen| seen == tag) {
                    replaced.push(tag.to_string());
                }
            }
            let property = paragraph.property.clone();
            let mut rebuilt = Paragraph::new().add_run(
                Run::new()
                    .add_text(text)
                    .fonts(RunFonts::new().ascii(font).hi_ansi(font))
                    .size(half_points),
            );
            rebuilt.property = property;
            **paragraph = rebuilt;
        }
        let missing = tags
            .iter()
            .map(|(tag, _)| tag.to_string())
            .filter(|tag| !replaced.contains(tag))
            .collect();
        (replaced, missing)
    }

    /// Serialize the document package to a byte stream for write-out or
    /// download.
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut cursor)
            .context("write docx package")?;
        Ok(cursor.into_inner())
    }
}

/// Visible text of a paragraph; run-level tabs render as `\t`.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        let ParagraphChild::Run(run) = child else {
            continue;
        };
        for part in &run.children {
            match part {
                RunChild::Text(text) => out.push_str(&text.text),
                RunChild::Tab(_) => out.push('\t'),
                _ => {}
            }
        }
    }
    out
}
