//! Typed views of the Velero custom resources, limited to the fields the
//! dashboard displays. Unknown fields are ignored when decoding.

mod backup;
mod restore;
mod schedule;

pub use backup::{Backup, BackupSpec, BackupStatus};
pub use restore::{Restore, RestoreSpec, RestoreStatus};
pub use schedule::{Schedule, ScheduleSpec, ScheduleStatus};

use kube::{api::GroupVersionKind, Resource};

pub fn gvk_of<K: Resource<DynamicType = ()>>() -> GroupVersionKind {
    GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()))
}
