//! Domain model: option sets, the editable form, and the generated document

mod document;
mod input;
mod options;

pub use document::{
    Assessment, Identification, Identity, InstructionalDesign, LessonPlan, MeetingExperience,
    PhaseActivity, Signatures,
};
pub use input::{FormError, FormState, LessonPlanInput};
pub use options::{EducationLevel, ExperienceFocus, GraduateDimension, PedagogicalPractice};
