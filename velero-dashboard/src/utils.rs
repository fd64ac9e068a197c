use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, Time};
use kube::core::Duration;
use std::collections::BTreeMap;

pub const NONE: &str = "<none>";

/// Render a timestamp the way the API machinery prints it, e.g. `2024-05-01 10:00:00 +0000 UTC`.
pub fn format_time(ts: &Time) -> String {
    ts.0.format("%Y-%m-%d %H:%M:%S %z %Z").to_string()
}

pub fn format_time_opt(ts: Option<&Time>) -> String {
    ts.map(format_time).unwrap_or_else(|| NONE.into())
}

/// Render a duration the way Go's `time.Duration` prints it, e.g. `24h0m0s` or `1.5s`.
pub fn format_duration(duration: &Duration) -> String {
    let sign = if duration.is_negative() { "-" } else { "" };
    let duration: std::time::Duration = (*duration).into();
    let (secs, nanos) = (duration.as_secs(), duration.subsec_nanos());

    let body = match (secs, nanos) {
        (0, 0) => return "0s".into(),
        (0, n) if n < 1_000 => format!("{n}ns"),
        (0, n) if n < 1_000_000 => format!("{}\u{00b5}s", decimal(n / 1_000, n % 1_000, 3)),
        (0, n) => format!("{}ms", decimal(n / 1_000_000, n % 1_000_000, 6)),
        (secs, nanos) => {
            let (hours, minutes) = (secs / 3600, secs / 60 % 60);
            let seconds = decimal(secs % 60, nanos, 9);
            if hours > 0 {
                format!("{hours}h{minutes}m{seconds}s")
            } else if minutes > 0 {
                format!("{minutes}m{seconds}s")
            } else {
                format!("{seconds}s")
            }
        }
    };
    format!("{sign}{body}")
}

pub fn format_duration_opt(duration: Option<&Duration>) -> String {
    duration.map(format_duration).unwrap_or_else(|| NONE.into())
}

// `whole.frac` where `frac` has `digits` places, trailing zeros dropped.
fn decimal(whole: impl std::fmt::Display, frac: u32, digits: usize) -> String {
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:0digits$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

pub fn or_none(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NONE.into(),
    }
}

pub fn match_labels(selector: Option<&LabelSelector>) -> BTreeMap<String, String> {
    selector
        .and_then(|s| s.match_labels.clone())
        .unwrap_or_default()
}
