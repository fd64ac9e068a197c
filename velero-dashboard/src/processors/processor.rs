use k8s_openapi::serde_json;
use kube::{api::DynamicObject, Resource, ResourceExt};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::warn;

use crate::{
    component::Row,
    error::{Error, Result},
    utils::format_time_opt,
};

/// Decode a generic object into the typed view `K`.
pub fn dynamic_to_typed<K>(obj: &DynamicObject) -> Result<K>
where
    K: Resource<DynamicType = ()> + DeserializeOwned,
{
    let kind = K::kind(&());
    if obj.metadata.name.is_none() {
        return Err(Error::conversion(kind, "missing metadata.name"));
    }

    let value = serde_json::to_value(obj).map_err(|e| Error::conversion(kind.clone(), e))?;
    serde_json::from_value(value).map_err(|e| Error::conversion(kind, e))
}

pub trait Processor: Debug + Send + Sync {
    type Resource: Resource<DynamicType = ()> + DeserializeOwned;

    /// Column names in display order. Every row built by this processor has exactly these keys.
    fn columns(&self) -> &'static [&'static str];

    fn build_row(&self, resource: &Self::Resource, obj: &DynamicObject) -> Row;

    fn print(&self, obj: &DynamicObject) -> Result<Row> {
        let resource: Self::Resource = dynamic_to_typed(obj)?;
        Ok(self.build_row(&resource, obj))
    }

    /// Print every object in store order, dropping the ones that fail to convert.
    #[tracing::instrument(skip(self, items), fields(item_count = items.len()))]
    fn process(&self, items: &[DynamicObject]) -> Vec<Row> {
        items
            .par_iter()
            .filter_map(|obj| match self.print(obj) {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!(name = %obj.name_any(), error = %e, "printing error");
                    None
                }
            })
            .collect()
    }

    fn get_created(&self, obj: &DynamicObject) -> String {
        format_time_opt(obj.metadata.creation_timestamp.as_ref())
    }
}
