//! End-to-end merge behavior against an in-memory letter template.

use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;

use surat::merge::{self, LetterFields, MergeError, TAG_AGENDA, TAG_PEMBUKA};
use surat::template::Template;

const DRAFT: &str = "\
Assalamualaikum, semoga kabar Anda baik.
===
**Acara**: Halal Bi Halal
Waktu: 20.00 WIB
Tempat: Gedung TC
===
Pakaian silat lengkap dikenakan selama acara.
Demikian undangan ini kami sampaikan.";

fn line(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn pack(docx: Docx) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

fn full_template() -> Template {
    let docx = Docx::new()
        .add_paragraph(line("Nomor: {{nomor}}"))
        .add_paragraph(line("Lampiran: {{lamp}}"))
        .add_paragraph(line("Hal: {{hal}}"))
        .add_paragraph(line("Kepada Yth {{yth}} di {{tempat}}"))
        .add_paragraph(line("{{tanggal}}"))
        .add_paragraph(line("Dengan hormat,"))
        .add_paragraph(line("{{pembuka}}"))
        .add_paragraph(line("{{agenda}}"))
        .add_paragraph(line("Hormat kami, Pengurus"));
    Template::from_bytes(&pack(docx)).unwrap()
}

fn fields() -> LetterFields {
    LetterFields {
        nomor: "005/PSH/II/2026".to_string(),
        hal: "Undangan Halal Bi Halal".to_string(),
        lampiran: "-".to_string(),
        yth: "Seluruh Warga PSH Tegal".to_string(),
        tempat: "Tempat".to_string(),
        tanggal: "Tegal, 21 Februari 2026".to_string(),
    }
}

#[test]
fn merge_emits_one_paragraph_per_non_empty_line() {
    let mut template = full_template();
    let before = template.paragraph_texts().len();
    let summary = merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();

    // 1 opening line + 3 agenda lines + 2 closing lines
    assert_eq!(summary.paragraphs_added, 6);
    assert!(summary.missing_body_tags.is_empty());
    assert_eq!(template.paragraph_texts().len(), before + 6);
}

#[test]
fn field_lines_are_tab_aligned_and_markup_is_stripped() {
    let mut template = full_template();
    merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();
    let texts = template.paragraph_texts();

    assert!(texts.iter().any(|t| t == "Acara\t: Halal Bi Halal"));
    assert!(texts.iter().any(|t| t == "Waktu\t: 20.00 WIB"));
    assert!(texts.iter().any(|t| t == "Tempat\t: Gedung TC"));
    let narrative = texts
        .iter()
        .find(|t| t.starts_with("Pakaian silat"))
        .unwrap();
    assert!(!narrative.contains('\t'));
}

#[test]
fn placeholders_are_replaced_in_document_order() {
    let mut template = full_template();
    merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();
    let texts = template.paragraph_texts();

    assert!(!texts.iter().any(|t| t.contains(TAG_PEMBUKA)));
    assert!(!texts.iter().any(|t| t.contains(TAG_AGENDA)));
    let opening = texts
        .iter()
        .position(|t| t.starts_with("Assalamualaikum"))
        .unwrap();
    let agenda = texts.iter().position(|t| t.starts_with("Acara")).unwrap();
    let closing = texts
        .iter()
        .position(|t| t.starts_with("Demikian undangan"))
        .unwrap();
    assert!(opening < agenda && agenda < closing);
}

#[test]
fn paragraphs_without_tags_are_untouched() {
    let mut template = full_template();
    merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();
    let texts = template.paragraph_texts();

    assert!(texts.iter().any(|t| t == "Dengan hormat,"));
    assert!(texts.iter().any(|t| t == "Hormat kami, Pengurus"));
}

#[test]
fn header_tags_substitute_from_letter_fields() {
    let mut template = full_template();
    let summary = merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();
    let texts = template.paragraph_texts();

    assert!(texts.iter().any(|t| t == "Nomor: 005/PSH/II/2026"));
    assert!(texts.iter().any(|t| t == "Lampiran: -"));
    assert!(texts
        .iter()
        .any(|t| t == "Kepada Yth Seluruh Warga PSH Tegal di Tempat"));
    assert!(texts.iter().any(|t| t == "Tegal, 21 Februari 2026"));
    assert_eq!(summary.header_tags_replaced.len(), 6);
    assert!(summary.missing_header_tags.is_empty());
}

#[test]
fn round_trip_recovers_field_pairs() {
    let mut template = full_template();
    merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();

    let pairs: Vec<(String, String)> = template
        .paragraph_texts()
        .iter()
        .filter_map(|text| {
            let (label, rest) = text.split_once('\t')?;
            Some((
                label.to_string(),
                rest.strip_prefix(": ").unwrap_or(rest).to_string(),
            ))
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Acara".to_string(), "Halal Bi Halal".to_string()),
            ("Waktu".to_string(), "20.00 WIB".to_string()),
            ("Tempat".to_string(), "Gedung TC".to_string()),
        ]
    );
}

#[test]
fn empty_sections_remove_placeholders_and_add_nothing() {
    let mut template = full_template();
    let before = template.paragraph_texts().len();
    let summary = merge::merge_letter(&mut template, &fields(), "\n===\n===\n").unwrap();
    let texts = template.paragraph_texts();

    assert_eq!(summary.paragraphs_added, 0);
    assert_eq!(texts.len(), before);
    assert!(!texts.iter().any(|t| t.contains(TAG_PEMBUKA)));
    assert!(!texts.iter().any(|t| t.contains(TAG_AGENDA)));
}

#[test]
fn missing_body_tag_is_reported_and_leaves_the_rest_intact() {
    let docx = Docx::new()
        .add_paragraph(line("Nomor: {{nomor}}"))
        .add_paragraph(line("{{pembuka}}"))
        .add_paragraph(line("Hormat kami, Pengurus"));
    let mut template = Template::from_bytes(&pack(docx)).unwrap();

    let summary = merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();
    assert_eq!(summary.missing_body_tags, vec![TAG_AGENDA.to_string()]);

    let texts = template.paragraph_texts();
    assert!(texts.iter().any(|t| t.starts_with("Assalamualaikum")));
    assert!(!texts.iter().any(|t| t.starts_with("Acara")));
    assert!(texts.iter().any(|t| t == "Hormat kami, Pengurus"));
}

#[test]
fn malformed_draft_is_an_error_not_a_truncation() {
    let mut template = full_template();
    let err = merge::merge_letter(&mut template, &fields(), "tanpa pemisah").unwrap_err();
    assert!(matches!(err, MergeError::MalformedDraft { found: 1, .. }));

    // Nothing was merged.
    let texts = template.paragraph_texts();
    assert!(texts.iter().any(|t| t.contains(TAG_PEMBUKA)));
    assert!(texts.iter().any(|t| t.contains("{{nomor}}")));
}

#[test]
fn serialized_letter_reloads_with_formatting_intact() {
    let mut template = full_template();
    merge::merge_letter(&mut template, &fields(), DRAFT).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Surat_005_PSH_II_2026.docx");
    std::fs::write(&path, template.to_bytes().unwrap()).unwrap();

    let reloaded = Template::load(&path).unwrap();
    let texts = reloaded.paragraph_texts();
    assert!(texts.iter().any(|t| t == "Waktu\t: 20.00 WIB"));
    assert!(texts.iter().any(|t| t == "Nomor: 005/PSH/II/2026"));
}
