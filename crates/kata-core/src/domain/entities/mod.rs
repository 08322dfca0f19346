pub mod common;
pub mod layout;
pub mod report;
pub mod session;
pub mod write_plan;

pub use common::RelativePath;
pub use layout::ProjectLayout;
pub use report::{InitReport, WriteOutcome};
pub use session::{Session, parse_yes};
pub use write_plan::{ArtifactKind, PlannedWrite, WritePlan};
