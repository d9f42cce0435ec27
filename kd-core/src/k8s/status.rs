use kd_api::{
    Phase,
    ResourceStatus,
};

// Only the four phases we know about get their own bucket; everything else (including
// Velero's PartiallyFailed, FailedValidation, etc) counts as New.
pub fn classify(phase: &str) -> Phase {
    match phase {
        "InProgress" => Phase::InProgress,
        "Completed" => Phase::Completed,
        "Failed" => Phase::Failed,
        _ => Phase::New,
    }
}

pub fn resource_status<'a, I: IntoIterator<Item = &'a str>>(phases: I) -> ResourceStatus {
    phases.into_iter().fold(ResourceStatus::default(), |mut status, phase| {
        status.record(classify(phase));
        status
    })
}
