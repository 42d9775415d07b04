use anyhow::{Context, Result};
use boxnote2md::render_note;
use clap::{Arg, ArgAction, Command};
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const NOTE_EXTENSION: &str = ".boxnote";

fn cli() -> Command {
    Command::new("boxnote2md")
        .about("Convert Box Notes to GitHub-Flavored Markdown")
        .long_about(
            "Convert Box Notes to GitHub-Flavored Markdown.\n\n\
             With no FILES, reads a note from stdin and writes Markdown to stdout. \
             Each FILE is written next to the input as <name>.md with the note name as title.",
        )
        .arg(
            Arg::new("files")
                .help("Input .boxnote files")
                .value_name("FILES")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite output files without prompting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "boxnote2md=debug" } else { "boxnote2md=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let force = matches.get_flag("force");
    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();

    if files.is_empty() {
        return match convert_stdin() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{:#}", err);
                ExitCode::FAILURE
            }
        };
    }

    let mut had_error = false;
    for path in &files {
        match process_file(path, force) {
            Ok(()) => eprintln!("OK: {}", path.display()),
            Err(err) => {
                debug!(path = %path.display(), "conversion failed");
                eprintln!("ERROR: {}: {:#}", path.display(), err);
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert_stdin() -> Result<()> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;
    let input = decode_input(&bytes);
    if input.trim().is_empty() {
        return Ok(());
    }

    let output = render_note(&input)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn process_file(input_path: &Path, force: bool) -> Result<()> {
    let bytes = fs::read(input_path).context("failed to read")?;
    let input = decode_input(&bytes);

    let output_path = output_path_for(input_path);
    if output_path.exists() && !force && !confirm_overwrite(&output_path)? {
        anyhow::bail!("overwrite declined");
    }

    let output = if input.trim().is_empty() {
        String::new()
    } else {
        let markdown = render_note(&input)?;
        match title_from_path(input_path) {
            Some(title) => format!("# {}\n\n{}", title, markdown),
            None => markdown,
        }
    };

    fs::write(&output_path, output).context("failed to write")?;
    info!("wrote {}", output_path.display());
    Ok(())
}

/// Invalid UTF-8 becomes U+FFFD instead of failing the whole note.
fn decode_input(bytes: &[u8]) -> Cow<'_, str> {
    let input = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = input {
        warn!("input is not valid UTF-8; replacing invalid bytes");
    }
    input
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    eprint!("overwrite {}? [y/N]: ", path.display());
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read overwrite confirmation")?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// `notes/a.boxnote` becomes `notes/a.md`; other names just gain `.md`.
fn output_path_for(input_path: &Path) -> PathBuf {
    let raw = input_path.to_string_lossy();
    let stem = raw.strip_suffix(NOTE_EXTENSION).unwrap_or(&raw);
    PathBuf::from(format!("{}.md", stem))
}

fn title_from_path(input_path: &Path) -> Option<String> {
    let base = input_path.file_name()?.to_string_lossy();
    let title = base.strip_suffix(NOTE_EXTENSION).unwrap_or(&base);
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
