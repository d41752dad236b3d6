//! About page tab domain: identifiers, static content, and the switch
//! state machine. The frontend only renders what these types describe.

pub mod dataset;
pub mod state;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of tabs on the About page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    History,
    Vision,
    Goals,
}

impl TabId {
    /// String form, used as the DOM element id.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::History => "history",
            TabId::Vision => "vision",
            TabId::Goals => "goals",
        }
    }

    /// Caption shown on the tab button.
    pub fn label(&self) -> &'static str {
        match self {
            TabId::History => "History",
            TabId::Vision => "Vision",
            TabId::Goals => "Goals",
        }
    }

    /// Accessible label for the tab button.
    pub fn aria_label(&self) -> &'static str {
        match self {
            TabId::History => "history button",
            TabId::Vision => "vision button",
            TabId::Goals => "goals button",
        }
    }

    /// All tabs in display order.
    pub fn all() -> [TabId; 3] {
        [TabId::History, TabId::Vision, TabId::Goals]
    }

    /// The tab that is active on first render.
    pub fn first() -> TabId {
        TabId::History
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabId {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "history" => Ok(TabId::History),
            "vision" => Ok(TabId::Vision),
            "goals" => Ok(TabId::Goals),
            _ => Err(TabError::UnknownTab(s.to_string())),
        }
    }
}

/// Errors at the string-keyed boundary of the tab domain. Typed-id paths
/// cannot fail; only untyped keys coming from the DOM can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("unknown tab id: {0}")]
    UnknownTab(String),
}
