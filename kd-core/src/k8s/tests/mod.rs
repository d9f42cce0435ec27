mod namespace_test;
mod objects_test;

use assertables::*;
use httpmock::prelude::*;
use kd_testutils::*;
use rstest::*;
use serde_json::{
    Value,
    json,
};
use tracing_test::traced_test;

use super::*;
use crate::errors::ResourceError;
use crate::prelude::*;

fn error_kind(err: &anyhow::Error) -> Option<&ResourceError> {
    err.downcast_ref::<ResourceError>()
}

#[fixture]
fn velero_schema() -> CrdSchema {
    CrdSchema::from_crd(&serde_json::from_value(backup_crd()).unwrap()).unwrap()
}

#[fixture]
fn widget_schema() -> CrdSchema {
    CrdSchema::from_crd(&serde_json::from_value(widget_crd()).unwrap()).unwrap()
}
