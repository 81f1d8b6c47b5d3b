use std::path::Path;

use graphql_typegen::GenerationSummary;

use crate::errors::CliError;

/// reports a fatal error to stderr
pub(crate) fn error(error: &CliError) {
    eprintln!("Error: {error}");
}

/// reports the outcome of a generation run
pub(crate) fn summary(out_dir: &Path, summary: &GenerationSummary) {
    println!(
        "Generated {} of {} artifacts in {}",
        summary.written.len(),
        summary.written.len() + summary.failures.len(),
        out_dir.display()
    );

    for failure in &summary.failures {
        eprintln!("Failed to write {}: {}", failure.artifact, failure.reason);
    }
}
