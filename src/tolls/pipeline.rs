use std::collections::HashMap;

use log::debug;

use super::records::{ProcessedToll, RawToll};
use super::totals::{self, TollTotal};
use super::BatchError;

/// Everything one batch run produces: the normalized records in input order
/// and the per-owner totals sorted by owner.
pub struct RunOutput {
    pub processed: Vec<ProcessedToll>,
    pub totals: Vec<TollTotal>,
}

/// Runs the whole batch: normalize every raw record in input order, then
/// aggregate per owner.
///
/// All-or-nothing: the first unparsable amount aborts the run with a
/// `BatchError` naming the 1-based record and the offending text, so a
/// displayed total can never silently omit a record. The output is a pure
/// function of the two inputs; rerunning with an updated mapping fully
/// replaces earlier results.
pub fn run(raw: &[RawToll], owners: &HashMap<String, String>) -> Result<RunOutput, BatchError> {
    let mut processed = Vec::with_capacity(raw.len());

    for (position, record) in raw.iter().enumerate() {
        match ProcessedToll::from_raw(record, owners) {
            Ok(toll) => processed.push(toll),
            Err(err) => {
                debug!("aborting batch at record {}, err={}", position + 1, err);
                return Err(BatchError {
                    record: position + 1,
                    source: err,
                });
            },
        }
    }

    let totals = totals::aggregate(&processed);

    Ok(RunOutput { processed, totals })
}
