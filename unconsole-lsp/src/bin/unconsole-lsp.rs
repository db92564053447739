use std::env;
use std::fs;
use std::process::ExitCode;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;
use unconsole_lsp::UnconsoleLanguageServer;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    // If called with the "strip" subcommand, handle it and exit
    if args.len() >= 2 && args[1] == "strip" {
        return handle_strip(&args[2..]);
    }

    // stdout carries the protocol, so logs go to stderr.
    // Set RUST_LOG=unconsole_lsp=debug to see per-command details.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting unconsole-lsp server");

    // Default: run as LSP server on stdin/stdout
    let stdin = stdin();
    let stdout = stdout();
    let (service, socket) = LspService::new(UnconsoleLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;

    tracing::info!("unconsole-lsp server stopped");
    ExitCode::SUCCESS
}

fn handle_strip(args: &[String]) -> ExitCode {
    use unconsole_core::remove::{apply_deletions, remove_matching_lines, removed_line_count};
    use unconsole_core::StatementKind;

    let mut input_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut kind_name: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--kind" && i + 1 < args.len() {
            kind_name = Some(&args[i + 1]);
            i += 2;
        } else if (arg == "-o" || arg == "--output") && i + 1 < args.len() {
            output_path = Some(&args[i + 1]);
            i += 2;
        } else if !arg.starts_with('-') && input_path.is_none() {
            input_path = Some(arg);
            i += 1;
        } else {
            i += 1;
        }
    }

    let Some(input) = input_path else {
        eprintln!("Error: No input file specified");
        return ExitCode::FAILURE;
    };

    let kind = match kind_name {
        Some(name) => match StatementKind::from_name(name) {
            Some(kind) => kind,
            None => {
                eprintln!(
                    "Error: Unknown statement kind '{name}' (expected log, error, warn, debug or all)"
                );
                return ExitCode::FAILURE;
            }
        },
        None => StatementKind::All,
    };

    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {input}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let spans = remove_matching_lines(&source, kind.pattern());
    let removed = removed_line_count(&spans);
    let stripped = apply_deletions(&source, &spans);

    // In-place rewrite unless an output path was given.
    let target = output_path.unwrap_or(input);
    if let Err(e) = fs::write(target, stripped) {
        eprintln!("Error writing {target}: {e}");
        return ExitCode::FAILURE;
    }

    eprintln!("Removed {removed} line(s) from {input}");
    ExitCode::SUCCESS
}
