mod select_test;

use assertables::*;
use clockabilly::{
    DateTime,
    TimeZone,
    Utc,
};
use rstest::*;

use super::*;

// A minimal cell for exercising the pipeline without any cluster objects in the picture.
#[derive(Clone, Debug, PartialEq)]
struct TestCell {
    name: &'static str,
    created: Option<DateTime<Utc>>,
    status: Option<&'static str>,
    progress: Option<i64>,
}

impl TestCell {
    fn new(name: &'static str, created_secs: i64, status: &'static str) -> TestCell {
        TestCell {
            name,
            created: Utc.timestamp_opt(created_secs, 0).single(),
            status: Some(status),
            progress: None,
        }
    }
}

impl DataCell for TestCell {
    fn property(&self, name: &PropertyName) -> Option<ComparableValue> {
        match name {
            PropertyName::Name => Some(self.name.into()),
            PropertyName::CreationTimestamp => self.created.map(ComparableValue::Time),
            PropertyName::Status => self.status.map(ComparableValue::from),
            PropertyName::Progress => self.progress.map(ComparableValue::Numeric),
            _ => None,
        }
    }

    fn resource_selector(&self) -> ResourceSelector {
        ResourceSelector {
            resource_type: "test".into(),
            resource_name: self.name.into(),
            ..Default::default()
        }
    }
}

fn names(cells: &[TestCell]) -> Vec<&'static str> {
    cells.iter().map(|c| c.name).collect()
}

#[fixture]
fn cells() -> Vec<TestCell> {
    vec![
        TestCell::new("b", 2000, "Completed"),
        TestCell::new("a", 1000, "Failed"),
        TestCell::new("d", 4000, "Failed"),
        TestCell::new("c", 3000, "InProgress"),
    ]
}
