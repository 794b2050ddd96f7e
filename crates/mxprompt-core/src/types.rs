//! Form domain types: agent roles and the form input record

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Persona the generated prompt is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    #[default]
    ResearchAssistant,
    CodeReviewer,
    FinancialAnalyst,
    TechnicalWriter,
}

impl AgentRole {
    /// All roles in selector order
    pub const ALL: [AgentRole; 4] = [
        AgentRole::ResearchAssistant,
        AgentRole::CodeReviewer,
        AgentRole::FinancialAnalyst,
        AgentRole::TechnicalWriter,
    ];

    /// Human-readable label, exactly as it appears in the generated prompt
    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::ResearchAssistant => "Research Assistant",
            AgentRole::CodeReviewer => "Code Reviewer",
            AgentRole::FinancialAnalyst => "Financial Analyst",
            AgentRole::TechnicalWriter => "Technical Writer",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    /// Next role in selector order (wraps)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous role in selector order (wraps)
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgentRole {
    type Err = Error;

    /// Accepts the label ("Code Reviewer"), snake_case ("code_reviewer")
    /// or kebab-case ("code-reviewer"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|role| role.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| Error::invalid_role(s))
    }
}

/// The three user-editable form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormInput {
    pub task_context: String,
    pub goals: String,
    pub agent_role: AgentRole,
}

impl FormInput {
    pub fn new(
        task_context: impl Into<String>,
        goals: impl Into<String>,
        agent_role: AgentRole,
    ) -> Self {
        Self {
            task_context: task_context.into(),
            goals: goals.into(),
            agent_role,
        }
    }

    /// Generation is only offered once a task context has been entered
    pub fn has_task_context(&self) -> bool {
        !self.task_context.is_empty()
    }
}
