//! Tickets command implementation

use crate::cli::output::{format_tickets_json, format_tickets_table, TicketView};
use crate::cli::TicketsArgs;
use crate::dataset::Dataset;

/// Handle `triage tickets` command.
///
/// Tickets are listed in processing order (oldest first), the same order
/// the dispatcher serves them.
pub fn handle_tickets(args: &TicketsArgs) -> Result<String, Box<dyn std::error::Error>> {
    let dataset = Dataset::load(&args.input)?;

    let mut tickets = dataset.tickets;
    tickets.sort_by(|a, b| a.creation_timestamp.total_cmp(&b.creation_timestamp));

    let views: Vec<TicketView> = tickets.iter().map(TicketView::from).collect();

    if args.json {
        Ok(format_tickets_json(&views))
    } else {
        Ok(format_tickets_table(&views))
    }
}
