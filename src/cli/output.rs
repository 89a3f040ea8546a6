//! Output formatting helpers for CLI commands

use crate::assignment::extract_tags;
use crate::dataset::{Agent, AssignmentRecord, Ticket};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for agent display
#[derive(Debug, Clone, serde::Serialize)]
pub struct AgentView {
    pub agent_id: String,
    pub skills: Vec<String>,
    pub experience_level: f64,
    pub current_load: i64,
    pub available: bool,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        // Sorted so listings are stable across runs
        let mut skills: Vec<String> = agent
            .skills
            .iter()
            .map(|(tag, level)| format!("{} ({})", tag, level))
            .collect();
        skills.sort();

        Self {
            agent_id: agent.agent_id.to_string(),
            skills,
            experience_level: agent.experience_level,
            current_load: agent.current_load,
            available: agent.is_available(),
        }
    }
}

/// View model for ticket display
#[derive(Debug, Clone, serde::Serialize)]
pub struct TicketView {
    pub ticket_id: String,
    pub title: String,
    pub created: String,
    pub tags: Vec<String>,
}

impl From<&Ticket> for TicketView {
    fn from(ticket: &Ticket) -> Self {
        let created = chrono::DateTime::from_timestamp(ticket.creation_timestamp as i64, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| ticket.creation_timestamp.to_string());

        Self {
            ticket_id: ticket.ticket_id.to_string(),
            title: ticket.title.clone(),
            created,
            tags: extract_tags(&ticket.title).into_iter().collect(),
        }
    }
}

/// Format agents as a table
pub fn format_agents_table(agents: &[AgentView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Agent", "Skills", "Experience", "Load", "Status"]);

    for a in agents {
        let status_str = if a.available {
            "Available".green().to_string()
        } else {
            "Unavailable".red().to_string()
        };

        table.add_row(vec![
            Cell::new(&a.agent_id),
            Cell::new(a.skills.join(", ")),
            Cell::new(a.experience_level),
            Cell::new(a.current_load),
            Cell::new(status_str),
        ]);
    }

    table.to_string()
}

/// Format agents as JSON
pub fn format_agents_json(agents: &[AgentView]) -> String {
    serde_json::to_string_pretty(&json!({
        "agents": agents
    }))
    .unwrap()
}

/// Format tickets as a table
pub fn format_tickets_table(tickets: &[TicketView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ticket", "Title", "Created", "Tags"]);

    for t in tickets {
        table.add_row(vec![
            Cell::new(&t.ticket_id),
            Cell::new(&t.title),
            Cell::new(&t.created),
            Cell::new(t.tags.join(", ")),
        ]);
    }

    table.to_string()
}

/// Format tickets as JSON
pub fn format_tickets_json(tickets: &[TicketView]) -> String {
    serde_json::to_string_pretty(&json!({
        "tickets": tickets
    }))
    .unwrap()
}

/// Format assignment records as a table
pub fn format_assignments_table(records: &[AssignmentRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ticket", "Agent", "Rationale"]);

    for r in records {
        let agent_str = match &r.assigned_agent_id {
            Some(id) => id.to_string().green().to_string(),
            None => "unassigned".red().to_string(),
        };

        table.add_row(vec![
            Cell::new(r.ticket_id.to_string()),
            Cell::new(agent_str),
            Cell::new(&r.rationale),
        ]);
    }

    table.to_string()
}

/// Format assignment records as JSON
pub fn format_assignments_json(records: &[AssignmentRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap()
}
