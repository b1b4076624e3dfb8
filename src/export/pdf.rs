//! Paginated PDF export
//!
//! Wraps the report markup in a printable page and runs printpdf's HTML
//! pipeline: content that exceeds one A4 page's height flows onto further
//! pages. The file is named from the subject, whitespace replaced by
//! underscores.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use printpdf::{GeneratePdfOptions, PdfDocument};
use tracing::{info, warn};

use super::ExportError;
use crate::domain::LessonPlan;
use crate::render;

/// Uniform page margin, in millimeters
const PAGE_MARGIN_MM: u32 = 15;

/// File name for an exported document: `RPM-<subject>.pdf`
pub fn pdf_file_name(plan: &LessonPlan) -> String {
    let subject: String = plan
        .identitas
        .mata_pelajaran
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("RPM-{subject}.pdf")
}

/// Full printable page around the report markup
fn page_html(plan: &LessonPlan) -> String {
    format!(
        "<!DOCTYPE html><html><head><style>body {{ margin: {PAGE_MARGIN_MM}mm; font-family: 'Times New Roman', serif; }}</style></head><body>{}</body></html>",
        render::render_html(plan)
    )
}

/// Render the report as a PDF and write it into `dir`, returning the path
pub fn export_pdf(plan: &LessonPlan, dir: &Path) -> Result<PathBuf, ExportError> {
    let html = page_html(plan);
    let mut warnings = Vec::new();

    // No images or extra fonts to embed; A4 portrait is the renderer default
    let doc = PdfDocument::from_html(
        &html,
        &BTreeMap::new(),
        &BTreeMap::new(),
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| ExportError::Pdf(e.to_string()))?;

    if !warnings.is_empty() {
        warn!(count = warnings.len(), "export_pdf: renderer warnings");
    }

    let bytes = doc.save(&Default::default(), &mut warnings);

    let path = dir.join(pdf_file_name(plan));
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), "export_pdf: report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Assessment, Identification, Identity, InstructionalDesign, Signatures,
    };

    fn minimal_plan(subject: &str) -> LessonPlan {
        LessonPlan {
            identitas: Identity {
                nama_satuan_pendidikan: "SMP Negeri 1".to_string(),
                mata_pelajaran: subject.to_string(),
                kelas_semester: "7/Ganjil".to_string(),
                durasi_pertemuan: "2 x 45 menit".to_string(),
            },
            identifikasi: Identification {
                siswa: "Peserta didik".to_string(),
                materi_pelajaran: "Ekosistem".to_string(),
                capaian_dimensi_lulusan: vec![],
            },
            desain_pembelajaran: InstructionalDesign {
                capaian_pembelajaran: String::new(),
                lintas_disiplin_ilmu: String::new(),
                tujuan_pembelajaran: String::new(),
                topik_pembelajaran: vec![],
                praktik_pedagogis: vec![],
                kemitraan_pembelajaran: String::new(),
                lingkungan_pembelajaran: String::new(),
                pemanfaatan_digital: String::new(),
            },
            pengalaman_belajar: vec![],
            asesmen_pembelajaran: Assessment {
                asesmen_awal: String::new(),
                asesmen_proses: String::new(),
                asesmen_akhir: String::new(),
            },
            signatures: Signatures {
                teacher_name: String::new(),
                teacher_nip: String::new(),
                principal_name: String::new(),
                principal_nip: String::new(),
            },
        }
    }

    #[test]
    fn test_pdf_file_name_replaces_whitespace() {
        let plan = minimal_plan("Ilmu Pengetahuan Alam");
        assert_eq!(pdf_file_name(&plan), "RPM-Ilmu_Pengetahuan_Alam.pdf");
    }

    #[test]
    fn test_pdf_file_name_replaces_each_whitespace_char() {
        let plan = minimal_plan("A  B\tC");
        assert_eq!(pdf_file_name(&plan), "RPM-A__B_C.pdf");
    }

    #[test]
    fn test_page_html_sets_margin() {
        let html = page_html(&minimal_plan("IPA"));
        assert!(html.contains("margin: 15mm"));
        assert!(html.contains(render::REPORT_TITLE));
    }
}
