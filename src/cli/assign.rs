//! Assign command implementation

use crate::assignment::Dispatcher;
use crate::cli::output::{format_assignments_json, format_assignments_table};
use crate::cli::AssignArgs;
use crate::config::TriageConfig;
use crate::dataset::{write_records, Dataset};

/// Handle `triage assign`: the whole pipeline in one pass.
///
/// Loads the dataset, runs the dispatcher, writes the result document, and
/// returns the text to print. A missing dataset is an error.
pub fn run_assign(
    args: &AssignArgs,
    config: &TriageConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let dataset = Dataset::load(&args.input)?;

    let dispatcher = Dispatcher::new(config.scoring);
    let records = dispatcher.assign(&dataset.agents, &dataset.tickets);

    write_records(&args.output, &records)?;

    let mut out = String::new();
    if args.table {
        out.push_str(&format_assignments_table(&records));
        out.push('\n');
    }
    if args.json {
        out.push_str(&format_assignments_json(&records));
        out.push('\n');
    }
    out.push_str(&format!(
        "Assigned {} tickets. Results in {}.",
        records.len(),
        args.output.display()
    ));

    Ok(out)
}
