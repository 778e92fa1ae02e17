//! SlotBinder - writes a BoundRecord into a fragment's slots
//!
//! Every element carrying the marker is a slot. Each of its path expressions
//! is resolved and written in order of appearance, so the last write to the
//! same target wins. Misses are written as `undefined`.

use tracing::{debug, instrument};

use crate::acquire::BoundRecord;
use crate::dom::Fragment;
use crate::util::SLOT_ATTRIBUTE;

use super::slot::{SlotSpec, SlotWrite};
use super::value::SlotValue;

/// Counts from one bind pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Marked elements visited
    pub slots: usize,
    /// Writes applied (one per path expression)
    pub writes: usize,
    /// Expressions that resolved to nothing
    pub misses: usize,
}

/// Populates slots marked with an attribute (`data-key` by default)
#[derive(Debug, Clone)]
pub struct SlotBinder {
    marker: String,
}

impl Default for SlotBinder {
    fn default() -> Self {
        Self::new(SLOT_ATTRIBUTE)
    }
}

impl SlotBinder {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    #[instrument(skip_all, fields(marker = %self.marker))]
    pub fn bind(&self, root: &mut Fragment, data: &BoundRecord) -> BindReport {
        let mut report = BindReport::default();

        root.for_each_marked_mut(&self.marker, |element| {
            let Some(spec) = SlotSpec::from_element(element, &self.marker) else {
                return;
            };
            report.slots += 1;

            for key in &spec.keys {
                let value = SlotValue::classify(data.resolve(key));
                if value.is_absent() {
                    report.misses += 1;
                    debug!(%key, tag = %element.tag, "path resolved to nothing");
                }
                let write = SlotWrite::plan(key, &value, spec.role);
                debug!(%key, ?write, "slot write");
                write.apply(element);
                report.writes += 1;
            }
        });

        debug!(?report, "bind complete");
        report
    }
}
