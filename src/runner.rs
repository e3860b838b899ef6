use crate::api::CorrectionService;
use crate::report;
use std::time::Instant;
use log::{debug, error};

/// Outcome of one pass over the corpus. Elapsed samples cover corrected
/// cases only; a fail-fast run that stopped early is marked aborted.
#[derive(Debug)]
pub struct RunSummary {
    pub corrected: usize,
    pub failed: usize,
    pub elapsed_ms: Vec<f64>,
    pub aborted: bool,
}

/// Dispatch the cases strictly in order, one blocking call at a time. Each
/// case is fully reported before the next request goes out. By default the
/// first failure ends the run; with `keep_going` the failure is reported for
/// that case and the pass continues.
pub async fn run_cases(
    service: &dyn CorrectionService,
    cases: &[String],
    keep_going: bool,
) -> RunSummary {
    let mut summary = RunSummary {
        corrected: 0,
        failed: 0,
        elapsed_ms: Vec::with_capacity(cases.len()),
        aborted: false,
    };

    for (i, input) in cases.iter().enumerate() {
        let index = i + 1;
        report::print_case_start(index, input);
        debug!("Dispatching case {}/{}", index, cases.len());

        let start = Instant::now();
        match service.correct(input).await {
            Ok(output) => {
                let elapsed = start.elapsed().as_secs_f64() * 1000.0;
                report::print_case_output(&output, elapsed);
                summary.corrected += 1;
                summary.elapsed_ms.push(elapsed);
            }
            Err(err) => {
                error!("Case {} failed: {}", index, err);
                report::print_case_failure(&err);
                summary.failed += 1;
                if !keep_going {
                    summary.aborted = true;
                    break;
                }
            }
        }
    }

    summary
}
