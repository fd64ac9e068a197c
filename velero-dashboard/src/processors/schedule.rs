use kube::api::DynamicObject;

use crate::component::{Cell, Row};
use crate::processors::processor::Processor;
use crate::resources::Schedule;
use crate::utils::{format_duration_opt, format_time_opt, match_labels, or_none};

pub const COLUMNS: &[&str] = &[
    "Name",
    "Status",
    "Created",
    "Backup TTL",
    "Last Backup",
    "Selector",
];

#[derive(Debug, Clone)]
pub struct ScheduleProcessor;

impl Processor for ScheduleProcessor {
    type Resource = Schedule;

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, schedule: &Self::Resource, obj: &DynamicObject) -> Row {
        let status = schedule.status.as_ref();
        let template = &schedule.spec.template;

        Row::from([
            ("Name", Cell::text(or_none(schedule.metadata.name.as_deref()))),
            (
                "Status",
                Cell::text(or_none(status.and_then(|s| s.phase.as_deref()))),
            ),
            ("Created", Cell::text(self.get_created(obj))),
            (
                "Backup TTL",
                Cell::text(format_duration_opt(template.ttl.as_ref())),
            ),
            (
                "Last Backup",
                Cell::text(format_time_opt(status.and_then(|s| s.last_backup.as_ref()))),
            ),
            (
                "Selector",
                Cell::labels(match_labels(template.label_selector.as_ref())),
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
    fn test_schedule_reads_template() {
        let obj = object(json!({
            "metadata": { "name": "nightly", "creationTimestamp": "2024-01-01T00:00:00Z" },
            "spec": {
                "schedule": "0 1 * * *",
                "template": {
                    "ttl": "168h0m0s",
                    "labelSelector": { "matchLabels": { "backup": "true" } }
                }
            },
            "status": { "phase": "Enabled", "lastBackup": "2024-05-03T01:00:00Z" }
        }));
        let row = ScheduleProcessor.print(&obj).unwrap();

        assert_eq!(row.text("Name"), Some("nightly"));
        assert_eq!(row.text("Status"), Some("Enabled"));
        assert_eq!(row.text("Created"), Some("2024-01-01 00:00:00 +0000 UTC"));
        assert_eq!(row.text("Backup TTL"), Some("168h0m0s"));
        assert_eq!(row.text("Last Backup"), Some("2024-05-03 01:00:00 +0000 UTC"));
        assert!(matches!(row.get("Selector"), Some(Cell::Labels { labels }) if labels["backup"] == "true"));
    }

    #[test]
    fn test_schedule_never_run() {
        let obj = object(json!({
            "metadata": { "name": "weekly" },
            "spec": { "schedule": "@weekly", "template": {} }
        }));
        let row = ScheduleProcessor.print(&obj).unwrap();

        assert_eq!(row.text("Last Backup"), Some("<none>"));
        assert_eq!(row.text("Backup TTL"), Some("<none>"));
        assert_eq!(row.len(), COLUMNS.len());
    }

    #[test]
    fn test_schedule_bad_timestamp_fails() {
        let obj = object(json!({
            "metadata": { "name": "weekly" },
            "spec": { "schedule": "@weekly", "template": {} },
            "status": { "lastBackup": "yesterday" }
        }));
        assert!(ScheduleProcessor.print(&obj).is_err());
    }

    #[test]
    fn test_schedule_ttl_renders_as_go_duration() {
        let obj = object(json!({
            "metadata": { "name": "daily" },
            "spec": { "schedule": "@daily", "template": { "ttl": "24h" } }
        }));
        let row = ScheduleProcessor.print(&obj).unwrap();
        assert_eq!(row.text("Backup TTL"), Some("24h0m0s"));
    }

    #[test]
    fn test_schedule_unparseable_ttl_fails() {
        let obj = object(json!({
            "metadata": { "name": "daily" },
            "spec": { "schedule": "@daily", "template": { "ttl": "forever" } }
        }));
        assert!(matches!(
            ScheduleProcessor.print(&obj),
            Err(Error::Conversion { ref kind, .. }) if kind == "Schedule"
        ));
    }

    #[test]
    fn test_schedule_missing_spec_or_name_fails() {
        let no_spec = object(json!({ "metadata": { "name": "no-spec" } }));
        assert!(matches!(
            ScheduleProcessor.print(&no_spec),
            Err(Error::Conversion { .. })
        ));

        let no_name = object(json!({ "metadata": {}, "spec": { "template": {} } }));
        assert!(matches!(
            ScheduleProcessor.print(&no_name),
            Err(Error::Conversion { .. })
        ));
    }
}
