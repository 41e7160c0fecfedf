//! Shared types used across paircalc.
//! `Action` is the arithmetic operation selected for a run; its `Display`
//! form is the lowercase CLI name, which also appears in the log markers.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Plus,
    Minus,
    Multiply,
    Division,
}

impl Action {
    /// All actions, in registration order.
    pub const ALL: [Action; 4] = [
        Action::Plus,
        Action::Minus,
        Action::Multiply,
        Action::Division,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Plus => "plus",
            Action::Minus => "minus",
            Action::Multiply => "multiply",
            Action::Division => "division",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" => Ok(Action::Plus),
            "minus" => Ok(Action::Minus),
            "multiply" => Ok(Action::Multiply),
            "division" => Ok(Action::Division),
            _ => Err(crate::error::Error::WrongAction {
                action: s.to_string(),
            }),
        }
    }
}
