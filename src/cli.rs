//! CLI argument parsing for the letter workflow.
//!
//! The CLI is intentionally thin: it collects plain strings and file paths and
//! hands them to the merge and generation modules, so the same core logic can
//! be reused elsewhere.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for drafting and merging letters.
#[derive(Parser, Debug)]
#[command(
    name = "surat",
    version,
    about = "LM-assisted drafting and docx merging for formal organization letters",
    after_help = "Examples:\n  surat draft --instruction \"Rapat tgl 25 jam 8 malam di TC, baju silat lengkap\" --out draf.txt\n  surat models\n  surat merge --template template_psh.docx --draft draf.txt \\\n      --nomor 005/PSH/II/2026 --hal \"Undangan Halal Bi Halal\" \\\n      --yth \"Seluruh Warga PSH Tegal\" --tanggal \"21 Februari 2026\"",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level workflow commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draft letter body text from an instruction via the generation API
    Draft(DraftArgs),
    /// List generation models available to the configured API key
    Models(ModelsArgs),
    /// Merge an edited draft into a docx letter template
    Merge(MergeArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Draft the three-section letter body from an instruction")]
pub struct DraftArgs {
    /// Free-text instruction describing the letter content
    #[arg(long)]
    pub instruction: String,

    /// Model override (e.g. models/gemini-1.5-flash); default is auto-scan
    #[arg(long)]
    pub model: Option<String>,

    /// Write the draft here instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(about = "List models and whether they support generation")]
pub struct ModelsArgs {}

#[derive(Parser, Debug)]
#[command(about = "Merge an edited draft into a docx letter template")]
pub struct MergeArgs {
    /// Letter template containing {{...}} tags
    #[arg(long, value_name = "PATH")]
    pub template: PathBuf,

    /// Edited draft text with '===' section separators
    #[arg(long, value_name = "PATH")]
    pub draft: PathBuf,

    /// Letter number, also used for the output file name
    #[arg(long)]
    pub nomor: String,

    /// Subject line (Hal)
    #[arg(long)]
    pub hal: String,

    /// Recipient (Kepada Yth)
    #[arg(long)]
    pub yth: String,

    /// Letter date; rendered on the date line as "<kota>, <tanggal>"
    #[arg(long)]
    pub tanggal: String,

    /// Attachment note (Lampiran)
    #[arg(long, default_value = "-")]
    pub lamp: String,

    /// Recipient place line
    #[arg(long, default_value = "Tempat")]
    pub tempat: String,

    /// City prefix for the date line
    #[arg(long, default_value = "Tegal")]
    pub kota: String,

    /// Explicit output path; overrides --out-dir
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Directory for the default Surat_<nomor>.docx output name
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Emit the merge summary as JSON
    #[arg(long)]
    pub json: bool,
}
