use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use one_base64::codec::{Alphabet, Utf8Policy};
use one_base64::editor::Selection;
use one_base64::notification::NotificationService;
use one_base64::{Extension, InMemoryEditor, LogNotifier, Operation, Settings, TextDocument};

/// Encode or decode text as Base64, reporting like the editor commands do
#[derive(Parser, Debug)]
#[command(name = "one-base64", version, about)]
struct Cli {
    /// Command to run on the input
    #[arg(value_enum)]
    command: CliCommand,

    /// Read the input from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when decoded text is not valid UTF-8 instead of replacing it
    #[arg(long)]
    strict: bool,

    /// Use the URL-safe alphabet
    #[arg(long)]
    url_safe: bool,

    /// Transform the trailing newline of the input too
    #[arg(long)]
    keep_newline: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliCommand {
    Encode,
    Decode,
}

impl From<CliCommand> for Operation {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Encode => Operation::Encode,
            CliCommand::Decode => Operation::Decode,
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if cli.strict {
        settings.decode.utf8_policy = Utf8Policy::Strict;
    }
    if cli.url_safe {
        settings.alphabet = Alphabet::UrlSafe;
    }

    let input = read_input(cli.input.as_ref())?;

    let mut extension = Extension::builder().with_settings(settings).build();
    extension.activate()?;
    let output = transform_input(
        &extension,
        cli.command.into(),
        input,
        cli.keep_newline,
        &mut LogNotifier,
    )?;
    extension.deactivate();

    let Some(output) = output else {
        return Ok(ExitCode::FAILURE);
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Run `operation` over `input` and return the resulting text, or `None` when
/// the command did not complete. The outcome has already been reported
/// through `notifier` by then.
fn transform_input<N: NotificationService>(
    extension: &Extension,
    operation: Operation,
    input: String,
    keep_newline: bool,
    notifier: &mut N,
) -> Result<Option<String>> {
    let mut editor = InMemoryEditor::with_document(document_for_input(input, keep_newline)?);

    debug!("Running {}", operation.command_id());
    let outcome = extension.execute_command(operation.command_id(), &mut editor, notifier)?;
    if !outcome.is_completed() {
        return Ok(None);
    }

    let document = editor.close().context("editor lost its document")?;
    Ok(Some(document.text().to_string()))
}

/// Select the whole input, minus its line ending unless `keep_newline` is set
fn document_for_input(input: String, keep_newline: bool) -> Result<TextDocument> {
    let selection_end = if keep_newline {
        input.len()
    } else {
        input.len() - trailing_newline_len(&input)
    };

    let mut document = TextDocument::new(input);
    document.select(Selection::new(0, selection_end))?;
    Ok(document)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn trailing_newline_len(text: &str) -> usize {
    if text.ends_with("\r\n") {
        2
    } else if text.ends_with('\n') {
        1
    } else {
        0
    }
}
