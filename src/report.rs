use crate::config::Config;
use crate::runner::RunSummary;
use crate::types::ApiError;
use colored::Colorize;

const DIVIDER_WIDTH: usize = 80;

fn divider() -> String {
    "=".repeat(DIVIDER_WIDTH)
}

pub fn print_header(config: &Config, case_count: usize) {
    println!("model: {}", config.model);
    println!("api base: {}", config.api_base);
    println!("cases: {}", case_count);
    println!("{}", divider());
}

pub fn print_case_start(index: usize, input: &str) {
    println!();
    println!("{}", format!("--- Case {} ---", index).bold());
    println!("input:  {}", input);
}

pub fn print_case_output(output: &str, elapsed_ms: f64) {
    println!("output: {}", output);
    println!("elapsed: {}", format_elapsed(elapsed_ms));
}

pub fn print_case_failure(error: &ApiError) {
    println!("{} {}", "failed:".red(), error);
}

/// Final lines after the pass. An aborted run prints nothing here: the
/// failing case already carried its report, and a partial average would be
/// misleading.
pub fn print_summary(summary: &RunSummary) {
    if summary.aborted {
        return;
    }

    println!();
    println!("{}", divider());
    if summary.failed > 0 {
        println!("corrected: {}  failed: {}", summary.corrected, summary.failed);
    }
    match mean_ms(&summary.elapsed_ms) {
        Some(average) => println!("average: {}", format_elapsed(average).bold()),
        None => println!("no completed cases"),
    }
}

pub fn mean_ms(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

pub fn format_elapsed(ms: f64) -> String {
    format!("{:.0}ms", ms)
}
