//! Editable form state for lesson-plan inputs
//!
//! `FormState` owns one `LessonPlanInput` and keeps its derived fields
//! consistent: the grade always belongs to the selected education level, and
//! the pedagogy list always holds exactly one entry per meeting. Both
//! derivations run synchronously inside the mutating call, so no consumer of
//! the record can observe an inconsistent intermediate state.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::options::{EducationLevel, GraduateDimension, PedagogicalPractice};

/// Errors from the form controller
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("meeting index {index} out of range for {meetings} meetings")]
    MeetingIndexOutOfRange { index: usize, meetings: u32 },
}

/// The validated set of user-supplied lesson-plan parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlanInput {
    pub school_name: String,
    pub teacher_name: String,
    pub teacher_nip: String,
    pub principal_name: String,
    pub principal_nip: String,
    pub education_level: EducationLevel,
    pub grade: String,
    pub subject: String,
    pub learning_outcomes: String,
    pub learning_objectives: String,
    pub learning_material: String,
    pub meetings: u32,
    pub meeting_duration: String,
    /// One practice per meeting; length always equals `meetings`
    pub pedagogical_practices: Vec<PedagogicalPractice>,
    /// Selected dimensions, in selection order (may be empty)
    pub graduate_dimensions: Vec<GraduateDimension>,
}

impl Default for LessonPlanInput {
    fn default() -> Self {
        Self {
            school_name: String::new(),
            teacher_name: String::new(),
            teacher_nip: String::new(),
            principal_name: String::new(),
            principal_nip: String::new(),
            education_level: EducationLevel::Smp,
            grade: EducationLevel::Smp.first_grade().to_string(),
            subject: String::new(),
            learning_outcomes: String::new(),
            learning_objectives: String::new(),
            learning_material: String::new(),
            meetings: 1,
            meeting_duration: "2 x 45 menit".to_string(),
            pedagogical_practices: vec![PedagogicalPractice::default()],
            graduate_dimensions: Vec::new(),
        }
    }
}

/// Form controller over a single editable `LessonPlanInput`
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: LessonPlanInput,
}

impl FormState {
    /// Create a form with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current record
    pub fn input(&self) -> &LessonPlanInput {
        &self.input
    }

    pub fn set_school_name(&mut self, value: impl Into<String>) {
        self.input.school_name = value.into();
    }

    pub fn set_teacher_name(&mut self, value: impl Into<String>) {
        self.input.teacher_name = value.into();
    }

    pub fn set_teacher_nip(&mut self, value: impl Into<String>) {
        self.input.teacher_nip = value.into();
    }

    pub fn set_principal_name(&mut self, value: impl Into<String>) {
        self.input.principal_name = value.into();
    }

    pub fn set_principal_nip(&mut self, value: impl Into<String>) {
        self.input.principal_nip = value.into();
    }

    pub fn set_subject(&mut self, value: impl Into<String>) {
        self.input.subject = value.into();
    }

    pub fn set_learning_outcomes(&mut self, value: impl Into<String>) {
        self.input.learning_outcomes = value.into();
    }

    pub fn set_learning_objectives(&mut self, value: impl Into<String>) {
        self.input.learning_objectives = value.into();
    }

    pub fn set_learning_material(&mut self, value: impl Into<String>) {
        self.input.learning_material = value.into();
    }

    pub fn set_meeting_duration(&mut self, value: impl Into<String>) {
        self.input.meeting_duration = value.into();
    }

    /// Set the grade within the current level's grade list
    pub fn set_grade(&mut self, value: impl Into<String>) {
        self.input.grade = value.into();
    }

    /// Change the education level and reset the grade to the new level's
    /// first entry, so level and grade are never mutually inconsistent
    pub fn set_education_level(&mut self, level: EducationLevel) {
        debug!(%level, "set_education_level: called");
        self.input.education_level = level;
        self.input.grade = level.first_grade().to_string();
    }

    /// Change the meeting count, coerced to a minimum of 1
    ///
    /// The pedagogy list is resized in the same call: shrinking truncates,
    /// growing fills new slots with the current first practice (or the
    /// default when the list was empty). Retained entries keep their values.
    pub fn set_meetings(&mut self, count: u32) {
        let count = count.max(1);
        debug!(count, "set_meetings: called");
        self.input.meetings = count;

        let fill = self
            .input
            .pedagogical_practices
            .first()
            .copied()
            .unwrap_or_default();
        self.input.pedagogical_practices.resize(count as usize, fill);
    }

    /// Replace the practice for meeting `index` (zero-based)
    pub fn set_practice(&mut self, index: usize, practice: PedagogicalPractice) -> Result<(), FormError> {
        if index >= self.input.meetings as usize {
            return Err(FormError::MeetingIndexOutOfRange {
                index,
                meetings: self.input.meetings,
            });
        }
        self.input.pedagogical_practices[index] = practice;
        Ok(())
    }

    /// Toggle a graduate dimension: add if absent, remove if present
    pub fn toggle_dimension(&mut self, dimension: GraduateDimension) {
        if let Some(pos) = self.input.graduate_dimensions.iter().position(|d| *d == dimension) {
            self.input.graduate_dimensions.remove(pos);
        } else {
            self.input.graduate_dimensions.push(dimension);
        }
    }

    /// Validate the form and emit the completed record
    ///
    /// All required scalar fields must be non-empty and the meeting count at
    /// least 1; otherwise no record is emitted and no generation request may
    /// be issued.
    pub fn submit(&self) -> Result<LessonPlanInput, FormError> {
        let required: [(&'static str, &str); 10] = [
            ("school_name", &self.input.school_name),
            ("teacher_name", &self.input.teacher_name),
            ("teacher_nip", &self.input.teacher_nip),
            ("principal_name", &self.input.principal_name),
            ("principal_nip", &self.input.principal_nip),
            ("grade", &self.input.grade),
            ("subject", &self.input.subject),
            ("learning_outcomes", &self.input.learning_outcomes),
            ("learning_objectives", &self.input.learning_objectives),
            ("learning_material", &self.input.learning_material),
        ];

        let mut missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if self.input.meeting_duration.trim().is_empty() {
            missing.push("meeting_duration");
        }
        if self.input.meetings == 0 {
            missing.push("meetings");
        }

        if !missing.is_empty() {
            debug!(?missing, "submit: rejected");
            return Err(FormError::MissingFields(missing));
        }

        Ok(self.input.clone())
    }
}
