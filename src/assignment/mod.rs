//! Greedy ticket assignment
//!
//! This module implements the central loop: tickets are processed oldest
//! first, every available agent is scored against the ticket's tags, and
//! the best-scoring agent wins the ticket and gains one unit of tracked
//! load. The pass is deterministic: tags iterate lexicographically, agents
//! in input order, and ties keep the first candidate seen.

pub mod scoring;
pub mod tags;

pub use scoring::{score_agent, ScoringWeights};
pub use tags::extract_tags;

use crate::dataset::{Agent, AssignmentRecord, Id, Ticket};
use std::collections::HashMap;
use tracing::{debug, info};

/// Live per-agent load for one assignment run.
///
/// Seeded from each agent's declared `current_load` and mutated only by
/// [`Dispatcher::assign_with_tracker`]; counts never decrease. Owning this
/// state explicitly (rather than mutating the agents) keeps the assignment
/// pass a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    loads: HashMap<Id, i64>,
}

impl LoadTracker {
    /// Seed the tracker from the agents' declared loads.
    pub fn seed(agents: &[Agent]) -> Self {
        Self {
            loads: agents
                .iter()
                .map(|a| (a.agent_id.clone(), a.current_load))
                .collect(),
        }
    }

    /// Current tracked load for an agent; unknown agents read as 0.
    pub fn load(&self, agent_id: &Id) -> i64 {
        self.loads.get(agent_id).copied().unwrap_or(0)
    }

    /// Record one assignment and return the load after the increment.
    pub fn record_assignment(&mut self, agent_id: &Id) -> i64 {
        let load = self.loads.entry(agent_id.clone()).or_insert(0);
        *load += 1;
        *load
    }
}

/// Assigns tickets to agents using skill-match scoring and load balancing.
///
/// # Examples
///
/// ```
/// use triage::assignment::Dispatcher;
/// use triage::dataset::Dataset;
///
/// let dataset: Dataset = serde_json::from_str(r#"{
///     "agents": [{"agent_id": "a1", "skills": {"Email": 5},
///                 "availability_status": "available"}],
///     "tickets": [{"ticket_id": 1, "title": "Email outage"}]
/// }"#).unwrap();
///
/// let records = Dispatcher::default().assign(&dataset.agents, &dataset.tickets);
/// assert_eq!(records.len(), 1);
/// assert!(records[0].assigned_agent_id.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    weights: ScoringWeights,
}

impl Dispatcher {
    /// Create a dispatcher with explicit scoring weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Assign every ticket, seeding load state from the agents' declared
    /// loads. Returns one record per ticket in processing order.
    pub fn assign(&self, agents: &[Agent], tickets: &[Ticket]) -> Vec<AssignmentRecord> {
        let mut tracker = LoadTracker::seed(agents);
        self.assign_with_tracker(agents, tickets, &mut tracker)
    }

    /// Assign every ticket against caller-owned load state.
    ///
    /// Tickets are processed in ascending `creation_timestamp` order
    /// (stable for ties), so the output order is the processing order, not
    /// the input order. Every ticket produces exactly one record; a ticket
    /// nobody can take gets a `None` agent and the "No available agent"
    /// rationale, which is a normal outcome rather than an error.
    pub fn assign_with_tracker(
        &self,
        agents: &[Agent],
        tickets: &[Ticket],
        tracker: &mut LoadTracker,
    ) -> Vec<AssignmentRecord> {
        let mut ordered: Vec<&Ticket> = tickets.iter().collect();
        ordered.sort_by(|a, b| a.creation_timestamp.total_cmp(&b.creation_timestamp));

        let mut records = Vec::with_capacity(ordered.len());
        for ticket in ordered {
            let ticket_tags = extract_tags(&ticket.title);

            let mut best_score = f64::NEG_INFINITY;
            let mut best: Option<(&Agent, Vec<String>)> = None;
            for agent in agents {
                if !agent.is_available() {
                    continue;
                }
                let (base, matched) = score_agent(agent, &ticket_tags, &self.weights);
                // Live load is subtracted here, on top of the scorer's own
                // declared-load term; ties keep the first candidate.
                let score =
                    base - tracker.load(&agent.agent_id) as f64 * self.weights.rebalance_penalty;
                if score > best_score {
                    best_score = score;
                    best = Some((agent, matched));
                }
            }

            let record = match best {
                Some((agent, matched)) => {
                    let load_after = tracker.record_assignment(&agent.agent_id);
                    debug!(
                        ticket = %ticket.ticket_id,
                        agent = %agent.agent_id,
                        score = best_score,
                        load_after,
                        "ticket assigned"
                    );
                    AssignmentRecord {
                        ticket_id: ticket.ticket_id.clone(),
                        assigned_agent_id: Some(agent.agent_id.clone()),
                        rationale: build_rationale(agent, &matched, load_after),
                    }
                }
                None => {
                    debug!(ticket = %ticket.ticket_id, "no available agent");
                    AssignmentRecord {
                        ticket_id: ticket.ticket_id.clone(),
                        assigned_agent_id: None,
                        rationale: "No available agent".to_string(),
                    }
                }
            };
            records.push(record);
        }

        info!(
            tickets = records.len(),
            assigned = records.iter().filter(|r| r.assigned_agent_id.is_some()).count(),
            "assignment pass complete"
        );
        records
    }
}

fn build_rationale(agent: &Agent, matched: &[String], load_after: i64) -> String {
    let skills = if matched.is_empty() {
        "None".to_string()
    } else {
        matched.join(", ")
    };
    format!(
        "Matched skills: {}; Agent experience: {}; Current load after assignment: {}",
        skills, agent.experience_level, load_after
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_agent(id: &str, skills: &[(&str, f64)], experience: f64, load: i64) -> Agent {
        Agent {
            agent_id: Id::from(id),
            skills: skills
                .iter()
                .map(|(tag, level)| (tag.to_string(), *level))
                .collect(),
            availability_status: Some("available".to_string()),
            experience_level: experience,
            current_load: load,
        }
    }

    fn create_test_ticket(id: i64, title: &str, timestamp: f64) -> Ticket {
        Ticket {
            ticket_id: Id::from(id),
            title: title.to_string(),
            creation_timestamp: timestamp,
        }
    }

    #[test]
    fn one_record_per_ticket() {
        let agents = vec![create_test_agent("a1", &[("Email", 3.0)], 1.0, 0)];
        let tickets = vec![
            create_test_ticket(1, "Email down", 10.0),
            create_test_ticket(2, "Printer jam", 20.0),
            create_test_ticket(3, "Email slow", 30.0),
        ];

        let records = Dispatcher::default().assign(&agents, &tickets);
        assert_eq!(records.len(), tickets.len());
    }

    #[test]
    fn tickets_are_processed_oldest_first() {
        let agents = vec![create_test_agent("a1", &[], 1.0, 0)];
        let tickets = vec![
            create_test_ticket(1, "newest", 300.0),
            create_test_ticket(2, "oldest", 100.0),
            create_test_ticket(3, "middle", 200.0),
        ];

        let records = Dispatcher::default().assign(&agents, &tickets);
        let order: Vec<_> = records.iter().map(|r| r.ticket_id.clone()).collect();
        assert_eq!(order, [Id::from(2), Id::from(3), Id::from(1)]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let agents = vec![create_test_agent("a1", &[], 1.0, 0)];
        let tickets = vec![
            create_test_ticket(10, "first", 100.0),
            create_test_ticket(11, "second", 100.0),
            create_test_ticket(12, "third", 100.0),
        ];

        let records = Dispatcher::default().assign(&agents, &tickets);
        let order: Vec<_> = records.iter().map(|r| r.ticket_id.clone()).collect();
        assert_eq!(order, [Id::from(10), Id::from(11), Id::from(12)]);
    }

    #[test]
    fn missing_timestamp_sorts_first() {
        let agents = vec![create_test_agent("a1", &[], 1.0, 0)];
        let tickets = vec![
            create_test_ticket(1, "dated", 50.0),
            Ticket {
                ticket_id: Id::from(2),
                title: "undated".to_string(),
                creation_timestamp: 0.0,
            },
        ];

        let records = Dispatcher::default().assign(&agents, &tickets);
        assert_eq!(records[0].ticket_id, Id::from(2));
    }

    #[test]
    fn no_available_agents_yields_null_records() {
        let mut unavailable = create_test_agent("a1", &[("Email", 5.0)], 10.0, 0);
        unavailable.availability_status = Some("offline".to_string());
        let mut missing_flag = create_test_agent("a2", &[("Email", 5.0)], 10.0, 0);
        missing_flag.availability_status = None;

        let tickets = vec![
            create_test_ticket(1, "Email down", 1.0),
            create_test_ticket(2, "Server down", 2.0),
        ];

        let records = Dispatcher::default().assign(&[unavailable, missing_flag], &tickets);
        for record in &records {
            assert_eq!(record.assigned_agent_id, None);
            assert_eq!(record.rationale, "No available agent");
        }
    }

    #[test]
    fn best_skill_match_wins() {
        let agents = vec![
            create_test_agent("generalist", &[], 10.0, 0),
            create_test_agent("specialist", &[("Email", 5.0)], 0.0, 0),
        ];
        let tickets = vec![create_test_ticket(1, "Email outage", 1.0)];

        let records = Dispatcher::default().assign(&agents, &tickets);
        assert_eq!(records[0].assigned_agent_id, Some(Id::from("specialist")));
    }

    #[test]
    fn ties_go_to_first_agent_in_input_order() {
        let agents = vec![
            create_test_agent("first", &[], 5.0, 0),
            create_test_agent("second", &[], 5.0, 0),
        ];
        let tickets = vec![create_test_ticket(1, "anything here", 1.0)];

        let records = Dispatcher::default().assign(&agents, &tickets);
        assert_eq!(records[0].assigned_agent_id, Some(Id::from("first")));
    }

    #[test]
    fn accumulated_load_spreads_tickets() {
        // Identical agents: each win costs one rebalance unit, so three
        // tickets alternate first/second/first.
        let agents = vec![
            create_test_agent("a1", &[], 5.0, 0),
            create_test_agent("a2", &[], 5.0, 0),
        ];
        let tickets = vec![
            create_test_ticket(1, "ticket one", 1.0),
            create_test_ticket(2, "ticket two", 2.0),
            create_test_ticket(3, "ticket three", 3.0),
        ];

        let records = Dispatcher::default().assign(&agents, &tickets);
        let winners: Vec<_> = records
            .iter()
            .map(|r| r.assigned_agent_id.clone().unwrap())
            .collect();
        assert_eq!(winners, [Id::from("a1"), Id::from("a2"), Id::from("a1")]);
    }

    #[test]
    fn load_increments_by_one_per_win_and_never_decreases() {
        let agents = vec![create_test_agent("a1", &[], 1.0, 2)];
        let tickets = vec![
            create_test_ticket(1, "ticket one", 1.0),
            create_test_ticket(2, "ticket two", 2.0),
        ];

        let mut tracker = LoadTracker::seed(&agents);
        assert_eq!(tracker.load(&Id::from("a1")), 2);

        Dispatcher::default().assign_with_tracker(&agents, &tickets, &mut tracker);
        assert_eq!(tracker.load(&Id::from("a1")), 4);
    }

    #[test]
    fn declared_load_penalty_stays_static_while_live_load_grows() {
        // "busy" declares load 1 and scores a constant -2 -1 = -3; "idle"
        // declares 0 and pays only the growing live penalty. Once idle has
        // won three tickets both sit at -3 and the tie goes to busy, the
        // earlier agent. The scorer never re-reads the declared field from
        // the tracker.
        let agents = vec![
            create_test_agent("busy", &[], 0.0, 1),
            create_test_agent("idle", &[], 0.0, 0),
        ];
        let tickets = vec![
            create_test_ticket(1, "ticket one", 1.0),
            create_test_ticket(2, "ticket two", 2.0),
            create_test_ticket(3, "ticket three", 3.0),
            create_test_ticket(4, "ticket four", 4.0),
        ];

        let records = Dispatcher::default().assign(&agents, &tickets);
        let winners: Vec<_> = records
            .iter()
            .map(|r| r.assigned_agent_id.clone().unwrap())
            .collect();
        assert_eq!(
            winners,
            [
                Id::from("idle"),
                Id::from("idle"),
                Id::from("idle"),
                Id::from("busy")
            ]
        );
    }

    #[test]
    fn rationale_lists_matched_skills_and_post_increment_load() {
        let agents = vec![create_test_agent(
            "a1",
            &[("Email", 4.0), ("Server", 2.0)],
            7.0,
            1,
        )];
        let tickets = vec![create_test_ticket(1, "Email Server down", 1.0)];

        let records = Dispatcher::default().assign(&agents, &tickets);
        assert_eq!(
            records[0].rationale,
            "Matched skills: Email, Server; Agent experience: 7; Current load after assignment: 2"
        );
    }

    #[test]
    fn rationale_uses_none_when_nothing_matched() {
        let agents = vec![create_test_agent("a1", &[], 3.0, 0)];
        let tickets = vec![create_test_ticket(1, "completely unrelated", 1.0)];

        let records = Dispatcher::default().assign(&agents, &tickets);
        assert_eq!(
            records[0].rationale,
            "Matched skills: None; Agent experience: 3; Current load after assignment: 1"
        );
    }

    #[test]
    fn identical_input_produces_identical_output() {
        let agents = vec![
            create_test_agent("a1", &[("Email", 2.0)], 3.0, 1),
            create_test_agent("a2", &[("Server", 4.0)], 1.0, 0),
        ];
        let tickets = vec![
            create_test_ticket(1, "Email Server outage", 5.0),
            create_test_ticket(2, "Password reset", 3.0),
            create_test_ticket(3, "Server maintenance", 5.0),
        ];

        let dispatcher = Dispatcher::default();
        let first = dispatcher.assign(&agents, &tickets);
        let second = dispatcher.assign(&agents, &tickets);
        assert_eq!(first, second);
    }
}
