use std::collections::{BTreeMap, BTreeSet};

use getset::Getters;
use rust_decimal::Decimal;

use super::records::ProcessedToll;

/// Per-owner running total plus the set of tags that contributed to it.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct TollTotal {
    owner: String,
    tags: BTreeSet<String>,
    amount: Decimal,
}

impl TollTotal {
    fn new(owner: &str) -> TollTotal {
        TollTotal {
            owner: owner.to_owned(),
            tags: BTreeSet::new(),
            amount: Decimal::ZERO,
        }
    }

    /// The tag set as one display string, e.g. `"T1, T2"`. One-directional,
    /// never parsed back.
    pub fn joined_tags(&self) -> String {
        self.tags.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Groups processed records by owner. Totals come out sorted by owner text
/// ascending, and each total's tag set is sorted and de-duplicated.
pub fn aggregate(records: &[ProcessedToll]) -> Vec<TollTotal> {
    let mut groups: BTreeMap<String, TollTotal> = BTreeMap::new();

    for record in records {
        let group = groups
            .entry(record.owner().clone())
            .or_insert_with(|| TollTotal::new(record.owner()));

        group.amount += *record.amount();
        group.tags.insert(record.tag().clone());
    }

    groups.into_values().collect()
}
