//! Implementation of the `pos scan` command.
//!
//! Responsibility: resolve the catalog, wire scanner → controller → view,
//! and feed barcodes in.  The three-branch decision itself lives in
//! `pos_core::application::SaleController`; this file never looks at a
//! price.

use std::io::{self, BufRead};

use tracing::{debug, info, instrument};

use pos_adapters::{ConsoleView, ManualScanner, RecordingView};
use pos_core::application::{SaleController, ports::SaleView};

use crate::{
    cli::{OutputFormat, ScanArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `pos scan` command.
///
/// Dispatch sequence:
/// 1. Check there is something to scan
/// 2. Resolve the catalog (flag → config file → built-in demo)
/// 3. Wire scanner → controller → view
/// 4. Raise one scan per code, in order
/// 5. For JSON output, dump the recorded display calls at the end
///
/// Scan outcomes never fail the command: unknown and empty codes come back
/// as display lines and the exit code stays 0.
#[instrument(skip_all, fields(codes = args.codes.len()))]
pub fn execute(
    args: ScanArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. There must be some input route.
    ensure_scannable(&args)?;

    // 2. Resolve the catalog.
    let catalog = super::resolve_catalog(&global, &config)?;
    debug!(entries = catalog.len(), "catalog resolved");

    // 3. Wire the flow.  The controller subscribes itself to the scanner;
    //    after this point every raised scan ends in one display call.
    let scanner = ManualScanner::new();
    let json = output.format() == OutputFormat::Json;
    let recording = RecordingView::new();

    let view: Box<dyn SaleView> = if json {
        Box::new(recording.clone())
    } else {
        Box::new(ConsoleView::new())
    };
    let _controller = SaleController::attach(&scanner, Box::new(catalog), view);

    // 4. Feed the scanner.
    if args.interactive {
        #[cfg(feature = "interactive")]
        run_interactive(&scanner, &config.scanner.prompt, &output)?;

        #[cfg(not(feature = "interactive"))]
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    } else if args.stdin {
        let codes = read_codes(io::stdin().lock())?;
        info!(count = codes.len(), "scanning codes from stdin");
        for code in &codes {
            scanner.scan(code);
        }
    } else {
        info!(count = args.codes.len(), "scanning codes from arguments");
        for code in &args.codes {
            scanner.scan(code);
        }
    }

    // 5. JSON is emitted as one parseable block on stdout (bypasses
    //    OutputManager so pipes always get valid JSON).
    if json {
        let rendered = serde_json::to_string_pretty(&recording.calls())
            .unwrap_or_else(|_| "[]".into());
        println!("{rendered}");
    }

    Ok(())
}

/// At least one input route must be selected; bare `pos scan` is a usage
/// error, not a scan of nothing.
fn ensure_scannable(args: &ScanArgs) -> CliResult<()> {
    if args.codes.is_empty() && !args.stdin && !args.interactive {
        return Err(CliError::NothingToScan);
    }
    Ok(())
}

/// Read one barcode per line, exactly as written.
///
/// No trimming: a line of spaces is a real (unknown) code, and a blank
/// line is a scan that carried no code.
fn read_codes(reader: impl BufRead) -> CliResult<Vec<String>> {
    let mut codes = Vec::new();
    for line in reader.lines() {
        let line = line.with_cli_context(|| "failed to read barcodes from stdin")?;
        codes.push(line);
    }
    Ok(codes)
}

// ── interactive mode ──────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn run_interactive(
    scanner: &ManualScanner,
    prompt: &str,
    output: &OutputManager,
) -> CliResult<()> {
    use dialoguer::Input;

    output.info("Interactive session - Ctrl-C or Ctrl-D ends it")?;

    loop {
        let entry = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match entry {
            Ok(code) => scanner.scan(&code),
            // Interrupt or closed stdin ends the session cleanly.
            Err(err) => {
                debug!(error = %err, "interactive session ended");
                break;
            }
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_args(codes: &[&str], stdin: bool, interactive: bool) -> ScanArgs {
        ScanArgs {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            stdin,
            interactive,
        }
    }

    // ── ensure_scannable ──────────────────────────────────────────────────

    #[test]
    fn bare_scan_is_rejected() {
        assert!(matches!(
            ensure_scannable(&scan_args(&[], false, false)),
            Err(CliError::NothingToScan)
        ));
    }

    #[test]
    fn positional_codes_are_enough() {
        assert!(ensure_scannable(&scan_args(&["123"], false, false)).is_ok());
    }

    #[test]
    fn an_explicit_empty_code_is_enough() {
        // `pos scan ""` is one deliberate empty scan, not "nothing to scan".
        assert!(ensure_scannable(&scan_args(&[""], false, false)).is_ok());
    }

    #[test]
    fn stdin_route_is_enough() {
        assert!(ensure_scannable(&scan_args(&[], true, false)).is_ok());
    }

    #[test]
    fn interactive_route_is_enough() {
        assert!(ensure_scannable(&scan_args(&[], false, true)).is_ok());
    }

    // ── read_codes ────────────────────────────────────────────────────────

    #[test]
    fn stdin_lines_become_codes_verbatim() {
        let codes = read_codes(io::Cursor::new("123\n\n  99999  \n")).unwrap();
        assert_eq!(codes, vec!["123", "", "  99999  "]);
    }

    #[test]
    fn empty_stdin_yields_no_codes() {
        let codes = read_codes(io::Cursor::new("")).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn final_line_without_newline_still_counts() {
        let codes = read_codes(io::Cursor::new("123")).unwrap();
        assert_eq!(codes, vec!["123"]);
    }
}
