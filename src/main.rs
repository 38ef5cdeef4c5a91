use anyhow::{anyhow, Context, Result};
use clap::Parser;
use regex::Regex;
use std::fs;
use tracing_subscriber::EnvFilter;

use surat::cli::{Command, DraftArgs, MergeArgs, RootArgs};
use surat::config::GenAiConfig;
use surat::genai::GenAiClient;
use surat::merge::{self, LetterFields};
use surat::prompt;
use surat::template::Template;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match RootArgs::parse().command {
        Command::Draft(args) => cmd_draft(args),
        Command::Models(_) => cmd_models(),
        Command::Merge(args) => cmd_merge(args),
    }
}

fn cmd_draft(args: DraftArgs) -> Result<()> {
    let config = GenAiConfig::resolve(args.model)?;
    let client = GenAiClient::new(config);
    let model = client.resolve_model()?;
    tracing::info!(%model, "requesting draft");
    let draft = client.generate(&model, &prompt::draft_prompt(&args.instruction))?;
    match &args.out {
        Some(path) => {
            fs::write(path, &draft)
                .with_context(|| format!("write draft {}", path.display()))?;
            println!("Wrote draft to {}", path.display());
            println!("Edit the draft, keep the '===' separators, then run `surat merge`.");
        }
        None => println!("{draft}"),
    }
    Ok(())
}

fn cmd_models() -> Result<()> {
    let config = GenAiConfig::resolve(None)?;
    let client = GenAiClient::new(config);
    for model in client.list_models()? {
        let marker = if model.supports_generation() {
            "generate"
        } else {
            "-"
        };
        println!("{:<48} {}", model.name, marker);
    }
    Ok(())
}

fn cmd_merge(args: MergeArgs) -> Result<()> {
    let draft = fs::read_to_string(&args.draft)
        .with_context(|| format!("read draft {}", args.draft.display()))?;
    let mut template = Template::load(&args.template)?;

    let fields = LetterFields {
        nomor: args.nomor.clone(),
        hal: args.hal,
        lampiran: args.lamp,
        yth: args.yth,
        tempat: args.tempat,
        tanggal: format!("{}, {}", args.kota, args.tanggal),
    };

    let summary = merge::merge_letter(&mut template, &fields, &draft)?;
    if !summary.missing_body_tags.is_empty() {
        return Err(anyhow!(
            "template tag missing: {}; no output written, check the template",
            summary.missing_body_tags.join(", ")
        ));
    }

    let out_path = args.out.clone().unwrap_or_else(|| {
        args.out_dir
            .join(format!("Surat_{}.docx", sanitize_for_filename(&args.nomor)))
    });
    let bytes = template.to_bytes()?;
    fs::write(&out_path, bytes)
        .with_context(|| format!("write letter {}", out_path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Wrote letter to {}", out_path.display());
        println!("Paragraphs added: {}", summary.paragraphs_added);
        if !summary.missing_header_tags.is_empty() {
            println!(
                "Header tags not found: {}",
                summary.missing_header_tags.join(", ")
            );
        }
    }
    Ok(())
}

/// Letter numbers carry `/` separators; collapse anything unsafe for a file
/// name into underscores.
fn sanitize_for_filename(nomor: &str) -> String {
    let pattern = Regex::new(r"[^A-Za-z0-9._-]+").expect("regex for filename sanitization");
    pattern.replace_all(nomor, "_").trim_matches('_').to_string()
}
