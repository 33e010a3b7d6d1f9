//! Account role selection

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Account role chosen in the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Placeholder, nothing chosen yet
    #[default]
    Unselected,
    Individual,
    Business,
}

/// Error returned when a role value is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct ParseRoleError(pub String);

impl Role {
    /// Roles a user can actually pick
    pub const OPTIONS: [Role; 2] = [Role::Individual, Role::Business];

    /// Select value of the role; the placeholder is the `"role"` sentinel
    pub fn value(&self) -> &'static str {
        match self {
            Self::Unselected => "role",
            Self::Individual => "individual",
            Self::Business => "business",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => "Select a role",
            Self::Individual => "Individual",
            Self::Business => "Business",
        }
    }

    pub fn is_selected(&self) -> bool {
        *self != Self::Unselected
    }

    /// Next option; the placeholder moves to the first option
    pub fn next(&self) -> Self {
        match self.option_index() {
            Some(i) => Self::OPTIONS[(i + 1) % Self::OPTIONS.len()],
            None => Self::OPTIONS[0],
        }
    }

    /// Previous option; the placeholder moves to the last option
    pub fn prev(&self) -> Self {
        let len = Self::OPTIONS.len();
        match self.option_index() {
            Some(i) => Self::OPTIONS[(i + len - 1) % len],
            None => Self::OPTIONS[len - 1],
        }
    }

    fn option_index(&self) -> Option<usize> {
        Self::OPTIONS.iter().position(|r| r == self)
    }

    /// Quick-pick by first letter of the label
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(Self::Individual),
            'b' => Some(Self::Business),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "role" => Ok(Self::Unselected),
            "individual" => Ok(Self::Individual),
            "business" => Ok(Self::Business),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
