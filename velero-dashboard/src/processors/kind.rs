use std::fmt;
use std::str::FromStr;

use kube::api::{DynamicObject, GroupVersionKind};

use crate::component::Row;
use crate::error::{Error, Result};
use crate::resources::{gvk_of, Backup, Restore, Schedule};

use super::{
    backup::BackupProcessor, processor::Processor, restore::RestoreProcessor,
    schedule::ScheduleProcessor,
};

pub type RowPrinter = fn(&DynamicObject) -> Result<Row>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VeleroKind {
    Backup,
    Restore,
    Schedule,
}

impl VeleroKind {
    /// Display order of the dashboard tables.
    pub const ALL: [VeleroKind; 3] = [Self::Backup, Self::Restore, Self::Schedule];

    pub fn accessor(self) -> &'static str {
        match self {
            Self::Backup => "backup",
            Self::Restore => "restore",
            Self::Schedule => "schedule",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Backup => "Backups",
            Self::Restore => "Restores",
            Self::Schedule => "Schedules",
        }
    }

    pub fn table_title(self) -> String {
        format!("Velero {}", self.plural())
    }

    pub fn placeholder(self) -> String {
        format!("We could not find any {}!", self.table_title())
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Backup => BackupProcessor.columns(),
            Self::Restore => RestoreProcessor.columns(),
            Self::Schedule => ScheduleProcessor.columns(),
        }
    }

    pub fn gvk(self) -> GroupVersionKind {
        match self {
            Self::Backup => gvk_of::<Backup>(),
            Self::Restore => gvk_of::<Restore>(),
            Self::Schedule => gvk_of::<Schedule>(),
        }
    }

    pub fn printer(self) -> RowPrinter {
        match self {
            Self::Backup => print_backup,
            Self::Restore => print_restore,
            Self::Schedule => print_schedule,
        }
    }

    pub fn print(self, obj: &DynamicObject) -> Result<Row> {
        (self.printer())(obj)
    }

    pub fn process(self, items: &[DynamicObject]) -> Vec<Row> {
        match self {
            Self::Backup => BackupProcessor.process(items),
            Self::Restore => RestoreProcessor.process(items),
            Self::Schedule => ScheduleProcessor.process(items),
        }
    }
}

impl FromStr for VeleroKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "backup" => Ok(Self::Backup),
            "restore" => Ok(Self::Restore),
            "schedule" => Ok(Self::Schedule),
            _ => Err(Error::UnknownAccessor {
                accessor: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for VeleroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.accessor())
    }
}

fn print_backup(obj: &DynamicObject) -> Result<Row> {
    BackupProcessor.print(obj)
}

fn print_restore(obj: &DynamicObject) -> Result<Row> {
    RestoreProcessor.print(obj)
}

fn print_schedule(obj: &DynamicObject) -> Result<Row> {
    ScheduleProcessor.print(obj)
}

/// Columns for an accessor name. Unknown names get no columns rather than an
/// error so a table skeleton can always be drawn.
pub fn columns_for_accessor(accessor: &str) -> &'static [&'static str] {
    accessor
        .parse::<VeleroKind>()
        .map(VeleroKind::columns)
        .unwrap_or(&[])
}

pub fn gvk_for_accessor(accessor: &str) -> Result<GroupVersionKind> {
    accessor.parse::<VeleroKind>().map(VeleroKind::gvk)
}

pub fn printer_for_accessor(accessor: &str) -> Result<RowPrinter> {
    accessor.parse::<VeleroKind>().map(VeleroKind::printer)
}
