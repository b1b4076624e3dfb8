//! The generated RPM document record
//!
//! Field names serialize to the camelCase wire format the generation service
//! is asked to produce, so a parsed reply maps directly onto these types and
//! the persisted session file uses the same layout.

use serde::{Deserialize, Serialize};

use super::options::ExperienceFocus;

/// A complete generated lesson-plan document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlan {
    pub identitas: Identity,
    pub identifikasi: Identification,
    pub desain_pembelajaran: InstructionalDesign,
    /// One entry per meeting
    pub pengalaman_belajar: Vec<MeetingExperience>,
    pub asesmen_pembelajaran: Assessment,
    /// Copied through from the input record, not re-derived by the model
    pub signatures: Signatures,
}

/// Section A: school, subject, class/semester, duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub nama_satuan_pendidikan: String,
    pub mata_pelajaran: String,
    pub kelas_semester: String,
    pub durasi_pertemuan: String,
}

/// Section B: learner characteristics, material, targeted dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub siswa: String,
    pub materi_pelajaran: String,
    pub capaian_dimensi_lulusan: Vec<String>,
}

/// Section C: outcomes, objectives, topics, practices, environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionalDesign {
    pub capaian_pembelajaran: String,
    pub lintas_disiplin_ilmu: String,
    pub tujuan_pembelajaran: String,
    pub topik_pembelajaran: Vec<String>,
    pub praktik_pedagogis: Vec<String>,
    pub kemitraan_pembelajaran: String,
    pub lingkungan_pembelajaran: String,
    pub pemanfaatan_digital: String,
}

/// Section D entry: the three-phase experience of one meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingExperience {
    /// 1-based meeting number
    pub pertemuan: u32,
    pub memahami: PhaseActivity,
    pub mengaplikasi: PhaseActivity,
    pub refleksi: PhaseActivity,
}

/// One phase of a meeting: the activity and its experience focus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseActivity {
    pub kegiatan: String,
    pub fokus: ExperienceFocus,
}

/// Section E: initial, process, and final assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub asesmen_awal: String,
    pub asesmen_proses: String,
    pub asesmen_akhir: String,
}

/// Closing block: teacher and principal names and NIPs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signatures {
    pub teacher_name: String,
    pub teacher_nip: String,
    pub principal_name: String,
    pub principal_nip: String,
}
