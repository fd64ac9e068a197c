use kube::api::DynamicObject;

use crate::component::{Cell, Row};
use crate::processors::processor::Processor;
use crate::resources::Restore;
use crate::utils::{match_labels, or_none};

pub const COLUMNS: &[&str] = &[
    "Name", "Backup", "Status", "Warnings", "Errors", "Created", "Selector",
];

#[derive(Debug, Clone)]
pub struct RestoreProcessor;

impl Processor for RestoreProcessor {
    type Resource = Restore;

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, restore: &Self::Resource, obj: &DynamicObject) -> Row {
        let status = restore.status.clone().unwrap_or_default();

        Row::from([
            ("Name", Cell::text(or_none(restore.metadata.name.as_deref()))),
            (
                "Backup",
                Cell::text(or_none(restore.spec.backup_name.as_deref())),
            ),
            ("Status", Cell::text(or_none(status.phase.as_deref()))),
            ("Warnings", Cell::text(status.warnings.to_string())),
            ("Errors", Cell::text(status.errors.to_string())),
            ("Created", Cell::text(self.get_created(obj))),
            (
                "Selector",
                Cell::labels(match_labels(restore.spec.label_selector.as_ref())),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use k8s_openapi::serde_json::{self, json};

    fn object(value: serde_json::Value) -> DynamicObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_restore_counts_render_as_numbers() {
        let obj = object(json!({
            "metadata": { "name": "restore-1", "creationTimestamp": "2024-05-02T08:30:00Z" },
            "spec": { "backupName": "daily-1" },
            "status": { "phase": "PartiallyFailed", "warnings": 3, "errors": 12 }
        }));
        let row = RestoreProcessor.print(&obj).unwrap();

        assert_eq!(row.text("Name"), Some("restore-1"));
        assert_eq!(row.text("Backup"), Some("daily-1"));
        assert_eq!(row.text("Status"), Some("PartiallyFailed"));
        assert_eq!(row.text("Warnings"), Some("3"));
        assert_eq!(row.text("Errors"), Some("12"));
        assert_eq!(row.text("Created"), Some("2024-05-02 08:30:00 +0000 UTC"));
    }

    #[test]
    fn test_restore_without_status() {
        let obj = object(json!({
            "metadata": { "name": "pending" },
            "spec": { "backupName": "daily-1" }
        }));
        let row = RestoreProcessor.print(&obj).unwrap();

        assert_eq!(row.text("Status"), Some("<none>"));
        assert_eq!(row.text("Warnings"), Some("0"));
        assert_eq!(row.text("Errors"), Some("0"));
        assert_eq!(row.len(), COLUMNS.len());
        for column in COLUMNS {
            assert!(row.get(column).is_some(), "missing column {column}");
        }
    }

    #[test]
    fn test_restore_selector_is_labels() {
        let obj = object(json!({
            "metadata": { "name": "restore-2" },
            "spec": {
                "backupName": "daily-1",
                "labelSelector": { "matchLabels": { "tier": "web", "app": "shop" } }
            }
        }));
        let row = RestoreProcessor.print(&obj).unwrap();

        let Some(Cell::Labels { labels }) = row.get("Selector") else {
            panic!("selector should render as labels");
        };
        assert_eq!(labels.len(), 2);
        assert_eq!(labels["tier"], "web");
    }

    #[test]
    fn test_restore_non_numeric_count_fails() {
        let obj = object(json!({
            "metadata": { "name": "odd" },
            "spec": {},
            "status": { "warnings": "many" }
        }));
        assert!(RestoreProcessor.print(&obj).is_err());
    }

    #[test]
    fn test_restore_missing_spec_or_name_fails() {
        let no_spec = object(json!({ "metadata": { "name": "no-spec" } }));
        assert!(matches!(
            RestoreProcessor.print(&no_spec),
            Err(Error::Conversion { ref kind, .. }) if kind == "Restore"
        ));

        let no_name = object(json!({ "metadata": {}, "spec": { "backupName": "daily-1" } }));
        assert!(matches!(
            RestoreProcessor.print(&no_name),
            Err(Error::Conversion { .. })
        ));
    }
}
