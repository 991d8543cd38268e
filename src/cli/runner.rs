use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use talegen::{Error, convert_file_to_writer};

use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print a fatal error as one line and return the exit code.
///
/// Output failures go to `err_out`, since `out` is the stream that failed.
fn report_error<O: Write, E: Write>(out: &mut O, err_out: &mut E, e: &Error) -> i32 {
    debug!("Conversion failed: {:?}", e);
    let target: &mut dyn Write = match e {
        Error::Environment(_) => err_out,
        _ => out,
    };
    let _ = writeln!(target, "{}", e);
    let _ = target.flush();
    e.exit_code()
}

/// Run the converter and return the process exit code.
///
/// Fatal errors are reported as a single line on stdout.
pub fn run(args: CliArgs) -> i32 {
    init_logging();

    if args.ignored() > 0 {
        info!("Ignoring {} extra argument(s)", args.ignored());
    }
    // No path behaves like a path that cannot be opened.
    let input = args.input().cloned().unwrap_or_else(PathBuf::new);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match convert_file_to_writer(&input, &mut out) {
        Ok(report) => {
            info!(
                "Skipped: {} incomplete, {} malformed, {} bad ordinal",
                report.skipped_fields, report.skipped_malformed, report.skipped_ordinal
            );
            0
        }
        Err(e) => report_error(&mut out, &mut std::io::stderr(), &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let code = report_error(&mut out, &mut err_out, &Error::Format);
        assert_eq!(code, 1);
        assert_eq!(out, b"Unexpected file format\n");
        assert!(err_out.is_empty());
    }

    #[test]
    fn test_output_failure_goes_to_stderr() {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let e = Error::Environment(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        let code = report_error(&mut out, &mut err_out, &e);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        let message = String::from_utf8(err_out).unwrap();
        assert!(message.starts_with("Cannot write output"));
        assert_eq!(message.lines().count(), 1);
    }
}
