//! Groups sound records into tales.
//!
//! Records are filtered, mapped to `(name, ordinal)` via
//! [`derive_part_name`], accumulated per name in first-seen order and finally
//! sorted by ordinal within each tale.
use indexmap::IndexMap;
use tracing::debug;

use crate::core::naming::{SkipReason, derive_part_name};
use crate::types::{SoundRecord, Tale, TalePart};

/// A record that was left out, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of grouping one `sounds` array.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    pub tales: Vec<Tale>,
    pub skipped: Vec<Skipped>,
}

impl Grouping {
    /// Diagnostic tokens for skipped records, in input order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.skipped.iter().filter_map(|s| s.reason.diagnostic())
    }

    pub fn count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }
}

/// Accumulates parts per tale name, keeping first-seen key order.
#[derive(Debug, Default)]
pub struct TaleBuckets {
    buckets: IndexMap<String, Vec<TalePart>>,
}

impl TaleBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, part: TalePart) {
        match self.buckets.get_mut(name) {
            Some(parts) => parts.push(part),
            None => {
                self.buckets.insert(name.to_string(), vec![part]);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Sort every bucket by ordinal (stable on ties) and build the tales.
    pub fn into_tales(self) -> Vec<Tale> {
        self.buckets
            .into_iter()
            .map(|(name, mut parts)| {
                parts.sort_by_key(|p| p.ordinal);
                Tale::story(name, parts.into_iter().map(|p| p.id).collect())
            })
            .collect()
    }
}

/// Group raw `sounds` entries. Non-object entries count as missing fields.
pub fn group_values(sounds: &[serde_json::Value]) -> Grouping {
    let records: Vec<Option<SoundRecord>> = sounds.iter().map(SoundRecord::from_value).collect();
    group_records(&records)
}

/// Group typed records; `None` stands for an entry that was not an object.
pub fn group_records(records: &[Option<SoundRecord>]) -> Grouping {
    let mut buckets = TaleBuckets::new();
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let Some((id, original_name)) = record.as_ref().and_then(|r| r.required_fields()) else {
            skipped.push(Skipped {
                index,
                reason: SkipReason::MissingFields,
            });
            continue;
        };

        match derive_part_name(original_name) {
            Ok(part) => buckets.push(
                part.name,
                TalePart {
                    ordinal: part.ordinal,
                    id: id.to_string(),
                },
            ),
            Err(reason) => {
                debug!("Skipping sound {} ({:?}): {:?}", index, original_name, reason);
                skipped.push(Skipped { index, reason });
            }
        }
    }

    debug!(
        "Grouped {} of {} sounds into {} tales",
        records.len() - skipped.len(),
        records.len(),
        buckets.len()
    );
    Grouping {
        tales: buckets.into_tales(),
        skipped,
    }
}
