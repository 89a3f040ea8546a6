use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier for an agent or ticket.
///
/// Datasets in the wild carry both string and integer identifiers; the
/// output document must echo whichever representation the input used, so
/// both are accepted and round-tripped unchanged.
///
/// # Examples
///
/// ```
/// use triage::dataset::Id;
///
/// let id: Id = serde_json::from_str("42").unwrap();
/// assert_eq!(id, Id::Int(42));
///
/// let id: Id = serde_json::from_str("\"agent-7\"").unwrap();
/// assert_eq!(id.to_string(), "agent-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Integer identifier
    Int(i64),
    /// String identifier
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

/// A human support agent.
///
/// Loaded once from the input document and never mutated by the engine;
/// the load that changes during a run lives in
/// [`LoadTracker`](crate::assignment::LoadTracker), not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier
    pub agent_id: Id,
    /// Skill tag to proficiency level
    pub skills: HashMap<String, f64>,
    /// Availability flag, compared case-insensitively to "available".
    /// Missing means unavailable.
    #[serde(default)]
    pub availability_status: Option<String>,
    /// General experience bonus applied once per score
    #[serde(default)]
    pub experience_level: f64,
    /// Tickets already on this agent's plate when the dataset was exported
    #[serde(default)]
    pub current_load: i64,
}

impl Agent {
    /// Whether this agent may receive tickets at all.
    ///
    /// Availability is a static input flag; an agent never becomes
    /// unavailable mid-run no matter how many tickets it accumulates.
    pub fn is_available(&self) -> bool {
        self.availability_status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("available"))
    }
}

/// A support ticket awaiting assignment. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier
    pub ticket_id: Id,
    /// Free-text title; the only source of skill tags
    pub title: String,
    /// Unix timestamp; lower means older and therefore higher priority
    #[serde(default)]
    pub creation_timestamp: f64,
}

/// The input document: all agents and tickets for one assignment run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub agents: Vec<Agent>,
    pub tickets: Vec<Ticket>,
}

/// One assignment decision, emitted exactly once per input ticket.
///
/// `assigned_agent_id` is `null` in the output document when no agent was
/// available for the ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub ticket_id: Id,
    pub assigned_agent_id: Option<Id>,
    pub rationale: String,
}
