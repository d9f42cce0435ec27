mod backup;
mod custom_object;
mod restore;
mod schedule;
mod storage_location;

pub use backup::*;
pub use custom_object::*;
pub use restore::*;
pub use schedule::*;
pub use storage_location::*;
