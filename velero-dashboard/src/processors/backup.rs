use kube::api::DynamicObject;

use crate::component::{Cell, Row};
use crate::processors::processor::Processor;
use crate::resources::Backup;
use crate::utils::{format_duration_opt, match_labels, or_none};

pub const COLUMNS: &[&str] = &[
    "Name",
    "Status",
    "Created",
    "Expires",
    "Storage Location",
    "Selector",
];

#[derive(Debug, Clone)]
pub struct BackupProcessor;

impl Processor for BackupProcessor {
    type Resource = Backup;

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, backup: &Self::Resource, obj: &DynamicObject) -> Row {
        let status = backup.status.as_ref();

        Row::from([
            ("Name", Cell::text(or_none(backup.metadata.name.as_deref()))),
            (
                "Status",
                Cell::text(or_none(status.and_then(|s| s.phase.as_deref()))),
            ),
            ("Created", Cell::text(self.get_created(obj))),
            ("Expires", Cell::text(format_duration_opt(backup.spec.ttl.as_ref()))),
            (
                "Storage Location",
                Cell::text(or_none(backup.spec.storage_location.as_deref())),
            ),
            (
                "Selector",
                Cell::labels(match_labels(backup.spec.label_selector.as_ref())),
            ),
        ])
    }
}
