use owo_colors::OwoColorize;

use lexiscore_core::{BatchOutcome, MetricRecord, RowFailure};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Lexiscore".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Sentiment and readability metrics for web articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print one processed row
pub fn print_record(position: usize, total: usize, record: &MetricRecord) {
    eprintln!(
        "  {} {} {} {} {}",
        format!("{}/{}", position, total).dimmed(),
        record.url_id.bright_white(),
        format!("words={}", record.word_count).dimmed(),
        format!("polarity={:.3}", record.polarity_score).dimmed(),
        format!("fog={:.2}", record.fog_index).dimmed()
    );
}

/// Print one skipped row
pub fn print_skipped(position: usize, total: usize, failure: &RowFailure) {
    eprintln!(
        "  {} {} {} {}",
        format!("{}/{}", position, total).dimmed(),
        failure.url_id.bright_white(),
        format!("[{}]", failure.kind).yellow(),
        failure.message.dimmed()
    );
}

/// Print the batch summary
pub fn print_summary(outcome: &BatchOutcome, total: usize, elapsed: std::time::Duration) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Batch Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!(
        "  {} {}",
        "Processed:".dimmed(),
        format!("{}/{}", outcome.report.len(), total).bright_white()
    );
    eprintln!(
        "  {} {}",
        "Skipped:".dimmed(),
        outcome.failures.len().to_string().bright_white()
    );
    eprintln!(
        "  {} {:.2}s\n",
        "Elapsed:".dimmed(),
        elapsed.as_secs_f64()
    );

    for failure in &outcome.failures {
        print_warning(&format!("{} ({}): {}", failure.url_id, failure.url, failure.message));
    }
}
