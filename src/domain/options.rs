//! Closed option sets for the lesson-plan form
//!
//! Every set is a tagged enum with a fixed display label. The labels are the
//! wire strings: they appear in the prompt, in the generated document, and in
//! persisted JSON, so serde goes through the label rather than the variant
//! name.

use serde::{Deserialize, Serialize};

/// Education level (jenjang pendidikan)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "SD")]
    Sd,
    #[serde(rename = "SMP")]
    Smp,
    #[serde(rename = "SMA")]
    Sma,
}

impl EducationLevel {
    /// All levels, in form display order
    pub const ALL: [EducationLevel; 3] = [Self::Sd, Self::Smp, Self::Sma];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Smp => "SMP",
            Self::Sma => "SMA",
        }
    }

    /// Grade labels available at this level, in order
    pub fn grades(&self) -> &'static [&'static str] {
        match self {
            Self::Sd => &["1", "2", "3", "4", "5", "6"],
            Self::Smp => &["7", "8", "9"],
            Self::Sma => &["10", "11", "12"],
        }
    }

    /// First grade of this level, the default after a level change
    pub fn first_grade(&self) -> &'static str {
        self.grades()[0]
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pedagogical practice (praktik pedagogis), one per meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PedagogicalPractice {
    #[default]
    #[serde(rename = "Inkuiri-Discovery Learning")]
    InquiryDiscovery,
    #[serde(rename = "Project Based Learning (PjBL)")]
    ProjectBased,
    #[serde(rename = "Problem Based Learning")]
    ProblemBased,
    #[serde(rename = "Game Based Learning")]
    GameBased,
    #[serde(rename = "Station Learning")]
    Station,
}

impl PedagogicalPractice {
    /// All practices, in form display order
    pub const ALL: [PedagogicalPractice; 5] = [
        Self::InquiryDiscovery,
        Self::ProjectBased,
        Self::ProblemBased,
        Self::GameBased,
        Self::Station,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::InquiryDiscovery => "Inkuiri-Discovery Learning",
            Self::ProjectBased => "Project Based Learning (PjBL)",
            Self::ProblemBased => "Problem Based Learning",
            Self::GameBased => "Game Based Learning",
            Self::Station => "Station Learning",
        }
    }
}

impl std::fmt::Display for PedagogicalPractice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Graduate dimension (dimensi lulusan), selectable set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraduateDimension {
    #[serde(rename = "Keimanan & Ketakwaan")]
    Faith,
    #[serde(rename = "Kewargaan")]
    Citizenship,
    #[serde(rename = "Penalaran Kritis")]
    CriticalReasoning,
    #[serde(rename = "Kreativitas")]
    Creativity,
    #[serde(rename = "Kolaborasi")]
    Collaboration,
    #[serde(rename = "Kemandirian")]
    Independence,
    #[serde(rename = "Kesehatan")]
    Health,
    #[serde(rename = "Komunikasi")]
    Communication,
}

impl GraduateDimension {
    /// All dimensions, in form display order
    pub const ALL: [GraduateDimension; 8] = [
        Self::Faith,
        Self::Citizenship,
        Self::CriticalReasoning,
        Self::Creativity,
        Self::Collaboration,
        Self::Independence,
        Self::Health,
        Self::Communication,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Faith => "Keimanan & Ketakwaan",
            Self::Citizenship => "Kewargaan",
            Self::CriticalReasoning => "Penalaran Kritis",
            Self::Creativity => "Kreativitas",
            Self::Collaboration => "Kolaborasi",
            Self::Independence => "Kemandirian",
            Self::Health => "Kesehatan",
            Self::Communication => "Komunikasi",
        }
    }
}

impl std::fmt::Display for GraduateDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Experience focus attached to each learning-experience phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceFocus {
    #[serde(rename = "berkesadaran")]
    Mindful,
    #[serde(rename = "bermakna")]
    Meaningful,
    #[serde(rename = "menggembirakan")]
    Joyful,
}

impl ExperienceFocus {
    /// All focus values
    pub const ALL: [ExperienceFocus; 3] = [Self::Mindful, Self::Meaningful, Self::Joyful];

    /// Wire/display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mindful => "berkesadaran",
            Self::Meaningful => "bermakna",
            Self::Joyful => "menggembirakan",
        }
    }
}

impl std::fmt::Display for ExperienceFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
