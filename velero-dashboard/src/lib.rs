// lib.rs
pub mod component;
pub mod error;
pub mod log;
pub mod plugin;
pub mod processors;
pub mod resources;
pub mod store;
pub mod structs;
mod utils;

pub use error::{Error, Result};
pub use plugin::{
    VeleroPlugin, DELETE_ACTION, PLUGIN_DESCRIPTION, PLUGIN_NAME, SET_NAMESPACE_ACTION,
};
pub use processors::{
    columns_for_accessor, gvk_for_accessor, printer_for_accessor, RowPrinter, VeleroKind,
};
pub use store::{KubeStore, ObjectStore};
