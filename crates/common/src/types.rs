use serde::{Deserialize, Serialize};

/// Recognized review outcomes for a submitted work item.
///
/// This is a closed set: the upstream API only ever reports these three codes,
/// and each maps to one fixed human-readable sentence. The sentences are part
/// of the message contract with downstream consumers and must not be reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// Parse an upstream status code. Returns `None` for anything outside the
    /// recognized set — the caller decides how to report that.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Verdict::Approved),
            "reviewing" => Some(Verdict::Reviewing),
            "rejected" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    /// The canonical human sentence for this verdict.
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Approved => write!(f, "approved"),
            Verdict::Reviewing => write!(f, "reviewing"),
            Verdict::Rejected => write!(f, "rejected"),
        }
    }
}
