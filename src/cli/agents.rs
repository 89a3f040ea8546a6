//! Agents command implementation

use crate::cli::output::{format_agents_json, format_agents_table, AgentView};
use crate::cli::AgentsArgs;
use crate::dataset::Dataset;

/// Handle `triage agents` command
pub fn handle_agents(args: &AgentsArgs) -> Result<String, Box<dyn std::error::Error>> {
    let dataset = Dataset::load(&args.input)?;

    let wanted = match args.status.as_deref() {
        None => None,
        Some(s) if s.eq_ignore_ascii_case("available") => Some(true),
        Some(s) if s.eq_ignore_ascii_case("unavailable") => Some(false),
        Some(s) => return Err(format!("Unknown status filter: {}", s).into()),
    };

    let agents: Vec<AgentView> = dataset
        .agents
        .iter()
        .filter(|a| wanted.map_or(true, |w| a.is_available() == w))
        .map(AgentView::from)
        .collect();

    if args.json {
        Ok(format_agents_json(&agents))
    } else {
        Ok(format_agents_table(&agents))
    }
}
