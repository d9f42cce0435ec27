use kube::api::DynamicObject;

use super::*;
use crate::dataselect::{
    ComparableValue,
    DataCell,
    PropertyName,
};
use crate::jsonutils::*;
use crate::prelude::*;

/// Generic cell over a schema-less cluster object.  Name, namespace, labels and creation time
/// come from the object metadata; status is `.status.phase`.  Nothing generic can be said about
/// progress, so that's left to kind-specific cells that wrap this one.
#[derive(Clone, Debug)]
pub struct ObjectCell {
    pub obj: DynamicObject,
    resource_type: String,
}

impl ObjectCell {
    pub fn new(obj: DynamicObject, resource_type: &str) -> ObjectCell {
        ObjectCell { obj, resource_type: resource_type.into() }
    }

    pub fn phase(&self) -> Option<&str> {
        nested_str(&self.obj.data, &["status", "phase"]).found()
    }
}

impl AsRef<DynamicObject> for ObjectCell {
    fn as_ref(&self) -> &DynamicObject {
        &self.obj
    }
}

impl DataCell for ObjectCell {
    fn property(&self, name: &PropertyName) -> Option<ComparableValue> {
        let meta = &self.obj.metadata;
        match name {
            PropertyName::Name => meta.name.as_deref().map(ComparableValue::from),
            PropertyName::Namespace => meta.namespace.as_deref().map(ComparableValue::from),
            PropertyName::CreationTimestamp => meta.creation_timestamp.as_ref().map(|t| ComparableValue::Time(t.0)),
            PropertyName::Status => self.phase().map(ComparableValue::from),
            PropertyName::Label => meta.labels.as_ref().map(|l| format_labels(l).into()),
            PropertyName::Progress | PropertyName::Unknown(_) => None,
        }
    }

    fn resource_selector(&self) -> ResourceSelector {
        self.obj.resource_selector(&self.resource_type)
    }
}
