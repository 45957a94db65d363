use serde::{Deserialize, Serialize};

/// Partner quality tier for a make, as recorded in approved_makes.
///
/// The closed set is small but upstream report exports spell it freely
/// ("A+", "a+", "A PLUS"); `parse` folds all of those onto one variant.
/// Anything unrecognized lands on `Unranked` rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    Pending,
    Unranked,
}

impl Rank {
    /// Canonicalize a free-form rank string: case-insensitive, whitespace
    /// stripped ("A PLUS", "a+", "A +" all fold to `APlus`).
    pub fn parse(raw: &str) -> Self {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        match folded.as_str() {
            "A+" | "APLUS" | "A-PLUS" => Rank::APlus,
            "A" => Rank::A,
            "B" => Rank::B,
            "C" => Rank::C,
            "PENDING" => Rank::Pending,
            _ => Rank::Unranked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::APlus => "A+",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::Pending => "Pending",
            Rank::Unranked => "Unranked",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
