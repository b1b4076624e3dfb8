//! rpmgen - Generator Rencana Pembelajaran Mendalam (RPM)
//!
//! rpmgen turns a teacher's structured lesson-plan inputs into a complete
//! RPM document by sending one structured-output request to a generative
//! model, then renders the result as an HTML report that can be copied to
//! the clipboard as rich text or exported as a paginated PDF.
//!
//! The crate is a library: it exposes the application shell and the pieces
//! underneath it to an embedding UI. There is no command-line surface.
//!
//! # Modules
//!
//! - [`domain`] - option sets, the editable form, and the document record
//! - [`llm`] - generation service client, error taxonomy, response schema
//! - [`prompts`] - embedded instruction template and rendering
//! - [`generator`] - input record to generated document, or categorized error
//! - [`render`] - HTML report rendering
//! - [`export`] - clipboard and PDF export adapters
//! - [`session`] - persistence of the last generated document
//! - [`app`] - application shell state machine
//! - [`config`] - configuration types and loading

pub mod app;
pub mod config;
pub mod domain;
pub mod export;
pub mod generator;
pub mod llm;
pub mod prompts;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use app::AppShell;
pub use config::{Config, ExportConfig, LlmConfig, StorageConfig};
pub use domain::{
    EducationLevel, ExperienceFocus, FormError, FormState, GraduateDimension, LessonPlan,
    LessonPlanInput, PedagogicalPractice,
};
pub use export::ExportError;
pub use generator::{GenerateError, PlanGenerator};
pub use llm::{GeminiClient, LlmError, Schema, StructuredRequest, TextCompletion};
pub use session::SessionStore;
