//! Routine generation and routine questions.

mod composer;
mod follow_up;
mod model;

pub use composer::compose;
pub use follow_up::follow_up;
pub use model::{Routine, RoutineSection, SectionKind, StepRole};
