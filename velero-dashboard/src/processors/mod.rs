pub mod backup;
pub mod processor;
pub mod restore;
pub mod schedule;

mod kind;

pub use kind::{
    columns_for_accessor, gvk_for_accessor, printer_for_accessor, RowPrinter, VeleroKind,
};
