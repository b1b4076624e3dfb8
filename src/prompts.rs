//! Embedded instruction template for RPM generation
//!
//! The instruction block is rendered deterministically from the input
//! record. Everything the model needs is restated here: every scalar field,
//! the meeting count, the practice chosen for each meeting, and the selected
//! graduate dimensions. The list fields are joined into display strings at
//! this boundary only; the rest of the crate works with typed variants.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::domain::LessonPlanInput;

/// Instruction block sent as the single user prompt
const RPM_PROMPT: &str = r#"Anda adalah seorang ahli perancang kurikulum dan asisten pedagogis untuk guru di Indonesia. Tugas Anda adalah membuat Rencana Pembelajaran Mendalam (RPM) yang terstruktur, komprehensif, dan berkualitas tinggi dalam format JSON.

Gunakan data berikut untuk menghasilkan RPM:
- Satuan Pendidikan: {{school_name}}
- Guru: {{teacher_name}} (NIP: {{teacher_nip}})
- Kepala Sekolah: {{principal_name}} (NIP: {{principal_nip}})
- Jenjang: {{education_level}}, Kelas: {{grade}}
- Mata Pelajaran: {{subject}}
- Capaian Pembelajaran (CP): {{learning_outcomes}}
- Tujuan Pembelajaran: {{learning_objectives}}
- Materi Pelajaran: {{learning_material}}
- Jumlah Pertemuan: {{meetings}}
- Durasi per Pertemuan: {{meeting_duration}}
- Dimensi Lulusan yang dituju: {{dimensions}}
- Praktik Pedagogis per pertemuan: {{practices}}

Instruksi untuk konten yang harus di-generate:
1.  **Identitas**: Isi berdasarkan data yang diberikan. Untuk 'kelasSemester', tentukan semester (Ganjil/Genap) secara logis berdasarkan kelas.
2.  **Identifikasi**:
    -   'siswa': Deskripsikan secara singkat karakteristik umum siswa pada jenjang dan kelas yang ditentukan.
    -   'materiPelajaran': Gunakan materi yang diberikan.
    -   'capaianDimensiLulusan': Gunakan dimensi yang dipilih pengguna.
3.  **Desain Pembelajaran**:
    -   'capaianPembelajaran' & 'tujuanPembelajaran': Gunakan data yang diberikan.
    -   'lintasDisiplinIlmu': Identifikasi dan jelaskan kaitan materi dengan 2-3 disiplin ilmu lain.
    -   'topikPembelajaran': Pecah 'Materi Pelajaran' menjadi topik-topik spesifik untuk setiap pertemuan.
    -   'praktikPedagogis': Gunakan yang sudah dipilih pengguna.
    -   'kemitraanPembelajaran': Sarankan kemitraan yang relevan (misal: orang tua, komunitas, profesional).
    -   'lingkunganPembelajaran': Deskripsikan lingkungan belajar yang ideal (fisik dan non-fisik).
    -   'pemanfaatanDigital': Rekomendasikan 2-3 alat/platform digital spesifik yang relevan dengan materi, sertakan contoh penggunaannya.
4.  **Pengalaman Belajar**: Untuk setiap pertemuan:
    -   Buat langkah-langkah kegiatan yang jelas dan berurutan untuk 'Memahami' (kegiatan awal/apersepsi), 'Mengaplikasi' (kegiatan inti), dan 'Refleksi' (kegiatan penutup).
    -   Pastikan kegiatan 'Mengaplikasi' SANGAT SESUAI dengan sintaks dari 'Praktik Pedagogis' yang dipilih untuk pertemuan tersebut. Contoh, jika PjBL, harus ada langkah seperti "Penentuan Pertanyaan Mendasar", "Mendesain Perencanaan Proyek", dst.
    -   Untuk 'fokus' di setiap tahap, pilih salah satu dari: 'berkesadaran', 'bermakna', atau 'menggembirakan' yang paling sesuai dengan deskripsi kegiatannya.
5.  **Asesmen Pembelajaran**:
    -   'asesmenAwal': Berikan contoh asesmen diagnostik atau apersepsi yang relevan.
    -   'asesmenProses': Berikan contoh teknik asesmen formatif (misal: rubrik observasi, pertanyaan diskusi).
    -   'asesmenAkhir': Berikan contoh asesmen sumatif yang mengukur ketercapaian tujuan (misal: proyek, presentasi, portofolio).
6.  **Signatures**: Isi nama dan NIP guru serta kepala sekolah.

Pastikan seluruh output dalam Bahasa Indonesia yang baik, benar, dan profesional. Teks pada bagian deskriptif harus dalam bentuk paragraf yang utuh.
"#;

/// Context for rendering the instruction template
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    school_name: &'a str,
    teacher_name: &'a str,
    teacher_nip: &'a str,
    principal_name: &'a str,
    principal_nip: &'a str,
    education_level: &'static str,
    grade: &'a str,
    subject: &'a str,
    learning_outcomes: &'a str,
    learning_objectives: &'a str,
    learning_material: &'a str,
    meetings: u32,
    meeting_duration: &'a str,
    /// Selected dimension labels, comma-joined
    dimensions: String,
    /// "Pertemuan i: practice" per meeting, semicolon-joined
    practices: String,
}

impl<'a> PromptContext<'a> {
    fn from_input(input: &'a LessonPlanInput) -> Self {
        Self {
            school_name: &input.school_name,
            teacher_name: &input.teacher_name,
            teacher_nip: &input.teacher_nip,
            principal_name: &input.principal_name,
            principal_nip: &input.principal_nip,
            education_level: input.education_level.label(),
            grade: &input.grade,
            subject: &input.subject,
            learning_outcomes: &input.learning_outcomes,
            learning_objectives: &input.learning_objectives,
            learning_material: &input.learning_material,
            meetings: input.meetings,
            meeting_duration: &input.meeting_duration,
            dimensions: input
                .graduate_dimensions
                .iter()
                .map(|d| d.label())
                .collect::<Vec<_>>()
                .join(", "),
            practices: input
                .pedagogical_practices
                .iter()
                .enumerate()
                .map(|(i, p)| format!("Pertemuan {}: {}", i + 1, p.label()))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Render the instruction block for one input record
pub fn render_prompt(input: &LessonPlanInput) -> Result<String, handlebars::RenderError> {
    debug!(meetings = input.meetings, "render_prompt: called");
    let mut hbs = Handlebars::new();
    // The output is a plain-text prompt, not HTML
    hbs.register_escape_fn(handlebars::no_escape);

    hbs.render_template(RPM_PROMPT, &PromptContext::from_input(input))
}
