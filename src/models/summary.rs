use super::line::Section;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One line/day with at least one offline head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub line: String,
    pub section: Section,
    pub date: String,
    #[serde(deserialize_with = "heads_from_list_or_text")]
    pub offline_heads: Vec<u8>,
    pub issues: String,
}

impl SummaryRow {
    /// Offline heads as "1, 3, 7".
    pub fn offline_heads_text(&self) -> String {
        self.offline_heads
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HeadsRepr {
    List(Vec<u8>),
    Text(String),
}

/// Older exports wrote `offlineHeads` as `"1, 3"`; newer ones as `[1, 3]`.
fn heads_from_list_or_text<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    match HeadsRepr::deserialize(deserializer)? {
        HeadsRepr::List(v) => Ok(v),
        HeadsRepr::Text(s) => s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                p.parse::<u8>()
                    .map_err(|_| de::Error::custom(format!("invalid head number '{p}'")))
            })
            .collect(),
    }
}
