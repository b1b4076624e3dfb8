//! Plan generation
//!
//! Turns a validated input record into exactly one structured-output request
//! and parses the reply into a `LessonPlan`, or fails with a categorized
//! error. No caching and no retry: repeated calls with the same input may
//! yield different content.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{LessonPlan, LessonPlanInput};
use crate::llm::{LlmError, Schema, StructuredRequest, TextCompletion};
use crate::prompts;

/// Sampling temperature: moderate, for varied but coherent phrasing
const TEMPERATURE: f32 = 0.7;

/// Errors from a generation attempt
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Transport or backend failure, including an empty reply
    #[error("generation service failed: {0}")]
    Service(#[from] LlmError),

    /// The reply did not parse as the requested document shape
    #[error("response did not match the document shape: {0}")]
    ResponseFormat(String),

    /// The instruction block could not be rendered
    #[error("prompt rendering failed: {0}")]
    Prompt(#[from] handlebars::RenderError),
}

impl GenerateError {
    /// User-facing message, in the application language
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ResponseFormat(_) => {
                "Gagal mem-parsing respons dari AI. Coba ubah input Anda sedikit dan jalankan lagi."
            }
            Self::Service(_) | Self::Prompt(_) => {
                "Terjadi kesalahan pada layanan AI. Mohon coba beberapa saat lagi."
            }
        }
    }
}

/// Structural contract for the generated document, mirrored by `LessonPlan`
pub fn document_schema() -> Schema {
    Schema::Object(vec![
        (
            "identitas",
            Schema::Object(vec![
                ("namaSatuanPendidikan", Schema::String),
                ("mataPelajaran", Schema::String),
                ("kelasSemester", Schema::String),
                ("durasiPertemuan", Schema::String),
            ]),
        ),
        (
            "identifikasi",
            Schema::Object(vec![
                ("siswa", Schema::String),
                ("materiPelajaran", Schema::String),
                ("capaianDimensiLulusan", Schema::array(Schema::String)),
            ]),
        ),
        (
            "desainPembelajaran",
            Schema::Object(vec![
                ("capaianPembelajaran", Schema::String),
                ("lintasDisiplinIlmu", Schema::String),
                ("tujuanPembelajaran", Schema::String),
                ("topikPembelajaran", Schema::array(Schema::String)),
                ("praktikPedagogis", Schema::array(Schema::String)),
                ("kemitraanPembelajaran", Schema::String),
                ("lingkunganPembelajaran", Schema::String),
                ("pemanfaatanDigital", Schema::String),
            ]),
        ),
        (
            "pengalamanBelajar",
            Schema::array(Schema::Object(vec![
                ("pertemuan", Schema::Integer),
                ("memahami", phase_schema()),
                ("mengaplikasi", phase_schema()),
                ("refleksi", phase_schema()),
            ])),
        ),
        (
            "asesmenPembelajaran",
            Schema::Object(vec![
                ("asesmenAwal", Schema::String),
                ("asesmenProses", Schema::String),
                ("asesmenAkhir", Schema::String),
            ]),
        ),
        (
            "signatures",
            Schema::Object(vec![
                ("teacherName", Schema::String),
                ("teacherNip", Schema::String),
                ("principalName", Schema::String),
                ("principalNip", Schema::String),
            ]),
        ),
    ])
}

fn phase_schema() -> Schema {
    Schema::Object(vec![("kegiatan", Schema::String), ("fokus", Schema::String)])
}

/// Generates one `LessonPlan` per validated input record
pub struct PlanGenerator {
    client: Arc<dyn TextCompletion>,
}

impl PlanGenerator {
    /// Create a generator over a completion client
    pub fn new(client: Arc<dyn TextCompletion>) -> Self {
        Self { client }
    }

    /// Generate one document from a validated input record
    ///
    /// The reply is parsed in three steps: JSON parse, shape check against
    /// the request's own schema declaration, typed deserialize. Field values
    /// are returned as the model produced them; only the shape contract is
    /// enforced. Note the shape contract is per-element: a reply whose
    /// `pengalamanBelajar` length differs from the requested meeting count
    /// is still accepted.
    pub async fn generate(&self, input: &LessonPlanInput) -> Result<LessonPlan, GenerateError> {
        let prompt = prompts::render_prompt(input)?;
        let schema = document_schema();
        debug!(meetings = input.meetings, "generate: dispatching request");

        let text = self
            .client
            .complete(StructuredRequest {
                prompt,
                schema: schema.clone(),
                temperature: TEMPERATURE,
            })
            .await?;

        let value: serde_json::Value =
            serde_json::from_str(text.trim()).map_err(|e| GenerateError::ResponseFormat(e.to_string()))?;
        schema.check(&value).map_err(GenerateError::ResponseFormat)?;
        let plan: LessonPlan =
            serde_json::from_value(value).map_err(|e| GenerateError::ResponseFormat(e.to_string()))?;

        info!(
            subject = %plan.identitas.mata_pelajaran,
            meetings = plan.pengalaman_belajar.len(),
            "generate: document parsed"
        );
        Ok(plan)
    }
}
