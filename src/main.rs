//! # DbcsEncode CLI - Double-Byte Code Page Converter
//!
//! Command-line interface for converting between UTF-8 text and legacy
//! double-byte code pages, validating encoded files and inspecting tables.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dbcs_encode::{
    ByteClass, Codec, CodePoint, CodingErrorAction, Error as CodecError, MappingTable,
    available_charsets, codec_for_name,
};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// DbcsEncode: double-byte legacy code page converter
#[derive(Parser)]
#[command(name = "dbcs-encode")]
#[command(version, about, long_about = None)]
#[command(author = "DbcsEncode Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Charset name or alias
    #[arg(short, long, global = true, default_value = "x-windows-950")]
    charset: String,

    /// Load the mapping table from a JSON file instead of a built-in charset
    #[arg(long, global = true)]
    table: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode UTF-8 text into the code page
    Encode(EncodeArgs),

    /// Decode code page bytes into UTF-8 text
    Decode(DecodeArgs),

    /// Validate that a file is properly encoded
    Validate(ValidateArgs),

    /// Display detailed information about the charset
    Info(InfoArgs),

    /// List all built-in charsets
    List,
}

#[derive(Args)]
struct EncodeArgs {
    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to do with characters the charset cannot represent
    #[arg(long, default_value = "report")]
    on_error: ErrorMode,

    /// Replacement text for `--on-error replace`
    #[arg(long, default_value = "?")]
    replacement: String,

    /// Strip a UTF-8 BOM from the input
    #[arg(long)]
    strip_bom: bool,
}

#[derive(Args)]
struct DecodeArgs {
    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to do with malformed byte sequences
    #[arg(long, default_value = "report")]
    on_error: ErrorMode,

    /// Add a UTF-8 BOM to the output
    #[arg(long)]
    add_bom: bool,
}

#[derive(Args)]
struct ValidateArgs {
    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Show position of first error
    #[arg(long)]
    show_errors: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Show character mapping samples
    #[arg(long)]
    samples: bool,
}

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ErrorMode {
    Report,
    Replace,
    Ignore,
}

impl From<ErrorMode> for CodingErrorAction {
    fn from(mode: ErrorMode) -> Self {
        match mode {
            ErrorMode::Report => CodingErrorAction::Report,
            ErrorMode::Replace => CodingErrorAction::Replace,
            ErrorMode::Ignore => CodingErrorAction::Ignore,
        }
    }
}

#[derive(Serialize)]
struct ConversionResult<'a> {
    success: bool,
    charset: &'a str,
    bytes_processed: usize,
    bytes_written: usize,
    characters: usize,
    processing_time_ms: u64,
}

#[derive(Serialize)]
struct ValidationResult<'a> {
    valid: bool,
    charset: &'a str,
    bytes: usize,
    characters: usize,
    error: Option<String>,
    error_position: Option<usize>,
}

#[derive(Serialize)]
struct CharsetInfo<'a> {
    name: &'a str,
    aliases: &'a [String],
    repertoire: usize,
    single_bytes: Vec<String>,
    lead_bytes: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Encode(ref args) => encode_command(args, &cli)?,
        Commands::Decode(ref args) => decode_command(args, &cli)?,
        Commands::Validate(ref args) => validate_command(args, &cli)?,
        Commands::Info(ref args) => info_command(args, &cli)?,
        Commands::List => list_command(&cli)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn load_codec(cli: &Cli) -> Result<Cow<'static, Codec>> {
    if let Some(ref path) = cli.table {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read table file: {}", path.display()))?;
        let table = MappingTable::from_json(&json)
            .with_context(|| format!("Invalid table file: {}", path.display()))?;
        tracing::info!(charset = table.name(), path = %path.display(), "loaded custom table");
        Ok(Cow::Owned(Codec::from_table(table)))
    } else {
        let codec = codec_for_name(&cli.charset)
            .with_context(|| format!("Cannot use charset {}", cli.charset))?;
        Ok(Cow::Borrowed(codec))
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "reading input");
        fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))
    } else {
        tracing::debug!("reading from stdin");
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, data)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote output");
    } else {
        io::stdout()
            .write_all(data)
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

fn report_conversion(cli: &Cli, result: &ConversionResult<'_>) -> Result<()> {
    tracing::debug!(
        bytes_in = result.bytes_processed,
        bytes_out = result.bytes_written,
        elapsed_ms = result.processing_time_ms,
        "conversion finished"
    );
    if let OutputFormat::Json = cli.format {
        eprintln!("{}", serde_json::to_string_pretty(result)?);
    }
    Ok(())
}

fn encode_command(args: &EncodeArgs, cli: &Cli) -> Result<()> {
    let start_time = std::time::Instant::now();
    let codec = load_codec(cli)?;

    let mut input = read_input(args.input.as_deref())?;
    if args.strip_bom && input.starts_with(UTF8_BOM) {
        input.drain(..UTF8_BOM.len());
        tracing::debug!("stripped UTF-8 BOM");
    }

    let text = std::str::from_utf8(&input).context("Input is not valid UTF-8")?;
    let code_points: Vec<CodePoint> = text.chars().map(CodePoint::from).collect();

    let action = CodingErrorAction::from(args.on_error);
    let replacement = match action {
        CodingErrorAction::Replace => codec
            .encode_str(&args.replacement)
            .context("Replacement text cannot be encoded in the target charset")?,
        _ => Vec::new(),
    };

    let output = codec
        .encode_with(&code_points, action, &replacement)
        .context("Encoding failed")?;

    write_output(args.output.as_deref(), &output)?;

    report_conversion(
        cli,
        &ConversionResult {
            success: true,
            charset: codec.name(),
            bytes_processed: input.len(),
            bytes_written: output.len(),
            characters: code_points.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        },
    )
}

fn decode_command(args: &DecodeArgs, cli: &Cli) -> Result<()> {
    let start_time = std::time::Instant::now();
    let codec = load_codec(cli)?;

    let input = read_input(args.input.as_deref())?;
    let text = codec
        .decode_to_string_with(&input, args.on_error.into())
        .context("Decoding failed")?;

    let mut output = Vec::with_capacity(text.len() + UTF8_BOM.len());
    if args.add_bom {
        output.extend_from_slice(UTF8_BOM);
    }
    output.extend_from_slice(text.as_bytes());

    write_output(args.output.as_deref(), &output)?;

    report_conversion(
        cli,
        &ConversionResult {
            success: true,
            charset: codec.name(),
            bytes_processed: input.len(),
            bytes_written: output.len(),
            characters: text.chars().count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        },
    )
}

fn validate_command(args: &ValidateArgs, cli: &Cli) -> Result<()> {
    let codec = load_codec(cli)?;
    let input = read_input(args.input.as_deref())?;

    let outcome = codec.decode_to_vec(&input);
    let result = ValidationResult {
        valid: outcome.is_ok(),
        charset: codec.name(),
        bytes: input.len(),
        characters: outcome.as_ref().map(Vec::len).unwrap_or(0),
        error: outcome.as_ref().err().map(ToString::to_string),
        error_position: match outcome {
            Err(CodecError::MalformedInput { position, .. }) => Some(position),
            _ => None,
        },
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if result.valid {
                println!("✓ File is valid {}", result.charset);
            } else {
                println!("✗ File is not valid {}", result.charset);
                if args.show_errors {
                    if let Some(ref error) = result.error {
                        println!("  Error: {}", error);
                    }
                }
            }
        }
    }

    std::process::exit(if result.valid { 0 } else { 1 });
}

fn info_command(args: &InfoArgs, cli: &Cli) -> Result<()> {
    let codec = load_codec(cli)?;
    let table = codec.table();

    let info = CharsetInfo {
        name: codec.name(),
        aliases: codec.aliases(),
        repertoire: codec.repertoire_len(),
        single_bytes: format_ranges(table, ByteClass::Single),
        lead_bytes: format_ranges(table, ByteClass::Lead),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Text => {
            println!("Charset Information: {}", info.name);
            if !info.aliases.is_empty() {
                println!("Aliases: {}", info.aliases.join(", "));
            }
            println!("Repertoire: {} characters", info.repertoire);
            println!("Single bytes: {}", info.single_bytes.join(", "));
            println!("Lead bytes: {}", info.lead_bytes.join(", "));

            if args.samples {
                println!("\nCharacter Samples:");
                print_character_samples(table);
            }
        }
    }

    Ok(())
}

fn list_command(cli: &Cli) -> Result<()> {
    let mut charsets = Vec::new();
    for name in available_charsets() {
        let codec = codec_for_name(name)?;
        charsets.push((codec.name(), codec.aliases()));
    }

    match cli.format {
        OutputFormat::Json => {
            let json: Vec<_> = charsets
                .iter()
                .map(|(name, aliases)| serde_json::json!({ "name": name, "aliases": aliases }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("Supported Charsets ({} total):", charsets.len());
            println!();
            for (name, aliases) in charsets {
                println!("{:15} {}", name, aliases.join(", "));
            }
        }
    }

    Ok(())
}

fn format_ranges(table: &MappingTable, class: ByteClass) -> Vec<String> {
    table
        .byte_ranges(class)
        .into_iter()
        .map(|range| {
            if range.start() == range.end() {
                format!("0x{:02X}", range.start())
            } else {
                format!("0x{:02X}-0x{:02X}", range.start(), range.end())
            }
        })
        .collect()
}

fn print_character_samples(table: &MappingTable) {
    let samples = table
        .entries()
        .filter(|(_, seq)| seq.len() == 2)
        .step_by(64)
        .take(8);

    for (code_point, seq) in samples {
        let glyph = code_point.to_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        println!("  {:02X?} -> {} {}", seq.as_slice(), code_point, glyph);
    }
}
