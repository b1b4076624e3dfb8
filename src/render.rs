//! HTML report rendering
//!
//! Pure rendering of a `LessonPlan` into the fixed report layout: a centered
//! title, one table with sections A-E in fixed order, then the principal and
//! teacher signature blocks. The markup is what gets copied to the clipboard
//! and fed to the PDF exporter; all document text is escaped.

use crate::domain::{LessonPlan, MeetingExperience, PhaseActivity};

/// Report heading
pub const REPORT_TITLE: &str = "RENCANA PEMBELAJARAN MENDALAM (RPM)";

fn esc(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!(
        "<tr><td colspan=\"2\" style=\"background: #e5e7eb; padding: 6px; font-weight: bold;\">{title}</td></tr>"
    ));
}

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "<tr><td style=\"padding: 6px; vertical-align: top; font-weight: 600; width: 25%;\">{label}</td><td style=\"padding: 6px; vertical-align: top; text-align: justify;\">{value}</td></tr>"
    ));
}

fn row_text(out: &mut String, label: &str, value: &str) {
    row(out, label, &esc(value));
}

fn row_list(out: &mut String, label: &str, tag: &str, items: &[String]) {
    let mut list = format!("<{tag}>");
    for item in items {
        list.push_str(&format!("<li>{}</li>", esc(item)));
    }
    list.push_str(&format!("</{tag}>"));
    row(out, label, &list);
}

fn phase_row(out: &mut String, label: &str, phase: &PhaseActivity) {
    let value = format!(
        "{} <em>({})</em>",
        esc(&phase.kegiatan),
        phase.fokus.label()
    );
    row(out, label, &value);
}

fn meeting_block(out: &mut String, meeting: &MeetingExperience) {
    out.push_str(&format!(
        "<tr><td colspan=\"2\" style=\"padding: 6px; background: #f3f4f6; font-weight: 600;\">Pertemuan ke-{}</td></tr>",
        meeting.pertemuan
    ));
    phase_row(out, "Memahami", &meeting.memahami);
    phase_row(out, "Mengaplikasi", &meeting.mengaplikasi);
    phase_row(out, "Refleksi", &meeting.refleksi);
}

fn signature_block(out: &mut String, heading: &str, role: &str, name: &str, nip: &str) {
    out.push_str("<div style=\"text-align: center;\">");
    if !heading.is_empty() {
        out.push_str(&format!("<p>{heading}</p>"));
    }
    out.push_str(&format!("<p>{role}</p><br><br><br><br>"));
    out.push_str(&format!(
        "<p style=\"font-weight: bold; text-decoration: underline;\">{}</p><p>NIP. {}</p>",
        esc(name),
        esc(nip)
    ));
    out.push_str("</div>");
}

/// Render the full report markup for one document
pub fn render_html(plan: &LessonPlan) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<h2 style=\"text-align: center; font-weight: bold; margin-bottom: 1rem;\">{REPORT_TITLE}</h2>"
    ));
    html.push_str(
        "<table style=\"width: 100%; border-collapse: collapse; font-family: 'Times New Roman', serif; font-size: 10pt;\"><tbody>",
    );

    section(&mut html, "A. IDENTITAS");
    row_text(&mut html, "Nama Satuan Pendidikan", &plan.identitas.nama_satuan_pendidikan);
    row_text(&mut html, "Mata Pelajaran", &plan.identitas.mata_pelajaran);
    row_text(&mut html, "Kelas/Semester", &plan.identitas.kelas_semester);
    row_text(&mut html, "Durasi Pertemuan", &plan.identitas.durasi_pertemuan);

    section(&mut html, "B. IDENTIFIKASI");
    row_text(&mut html, "Siswa", &plan.identifikasi.siswa);
    row_text(&mut html, "Materi Pelajaran", &plan.identifikasi.materi_pelajaran);
    row_list(
        &mut html,
        "Capaian Dimensi Lulusan",
        "ul",
        &plan.identifikasi.capaian_dimensi_lulusan,
    );

    section(&mut html, "C. DESAIN PEMBELAJARAN");
    let design = &plan.desain_pembelajaran;
    row_text(&mut html, "Capaian Pembelajaran (CP)", &design.capaian_pembelajaran);
    row_text(&mut html, "Lintas Disiplin Ilmu", &design.lintas_disiplin_ilmu);
    row_text(&mut html, "Tujuan Pembelajaran", &design.tujuan_pembelajaran);
    row_list(&mut html, "Topik Pembelajaran", "ol", &design.topik_pembelajaran);
    let practices = design
        .praktik_pedagogis
        .iter()
        .enumerate()
        .map(|(i, p)| format!("Pertemuan {}: {}", i + 1, p))
        .collect::<Vec<_>>()
        .join(", ");
    row_text(&mut html, "Praktik Pedagogis", &practices);
    row_text(&mut html, "Kemitraan Pembelajaran", &design.kemitraan_pembelajaran);
    row_text(&mut html, "Lingkungan Pembelajaran", &design.lingkungan_pembelajaran);
    row_text(&mut html, "Pemanfaatan Digital", &design.pemanfaatan_digital);

    section(&mut html, "D. PENGALAMAN BELAJAR");
    for meeting in &plan.pengalaman_belajar {
        meeting_block(&mut html, meeting);
    }

    section(&mut html, "E. ASESMEN PEMBELAJARAN");
    let assessment = &plan.asesmen_pembelajaran;
    row_text(&mut html, "Asesmen Awal (Diagnostik/Apersepsi)", &assessment.asesmen_awal);
    row_text(&mut html, "Asesmen Proses (Observasi, Rubrik, Diskusi)", &assessment.asesmen_proses);
    row_text(&mut html, "Asesmen Akhir (Produk, Tugas, Presentasi)", &assessment.asesmen_akhir);

    html.push_str("</tbody></table>");

    html.push_str(
        "<div style=\"margin-top: 4rem; display: flex; justify-content: space-between; font-family: 'Times New Roman', serif; font-size: 9pt;\">",
    );
    signature_block(
        &mut html,
        "Mengetahui,",
        "Kepala Sekolah",
        &plan.signatures.principal_name,
        &plan.signatures.principal_nip,
    );
    signature_block(
        &mut html,
        "",
        "Guru Mata Pelajaran",
        &plan.signatures.teacher_name,
        &plan.signatures.teacher_nip,
    );
    html.push_str("</div>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Assessment, ExperienceFocus, Identification, Identity, InstructionalDesign, Signatures};

    fn sample_plan(meetings: u32) -> LessonPlan {
        LessonPlan {
            identitas: Identity {
                nama_satuan_pendidikan: "SMP Negeri 1".to_string(),
                mata_pelajaran: "Ilmu Pengetahuan Alam".to_string(),
                kelas_semester: "7/Ganjil".to_string(),
                durasi_pertemuan: "2 x 45 menit".to_string(),
            },
            identifikasi: Identification {
                siswa: "Peserta didik kelas 7".to_string(),
                materi_pelajaran: "Ekosistem".to_string(),
                capaian_dimensi_lulusan: vec!["Keimanan & Ketakwaan".to_string()],
            },
            desain_pembelajaran: InstructionalDesign {
                capaian_pembelajaran: "Memahami ekosistem".to_string(),
                lintas_disiplin_ilmu: "Geografi".to_string(),
                tujuan_pembelajaran: "Menjelaskan rantai makanan".to_string(),
                topik_pembelajaran: vec!["Rantai makanan".to_string(), "Jaring makanan".to_string()],
                praktik_pedagogis: vec!["Inkuiri-Discovery Learning".to_string()],
                kemitraan_pembelajaran: "Orang tua".to_string(),
                lingkungan_pembelajaran: "Kebun sekolah".to_string(),
                pemanfaatan_digital: "Simulasi PhET".to_string(),
            },
            pengalaman_belajar: (1..=meetings)
                .map(|i| MeetingExperience {
                    pertemuan: i,
                    memahami: PhaseActivity {
                        kegiatan: "Apersepsi".to_string(),
                        fokus: ExperienceFocus::Mindful,
                    },
                    mengaplikasi: PhaseActivity {
                        kegiatan: "Penyelidikan kelompok".to_string(),
                        fokus: ExperienceFocus::Meaningful,
                    },
                    refleksi: PhaseActivity {
                        kegiatan: "Refleksi bersama".to_string(),
                        fokus: ExperienceFocus::Joyful,
                    },
                })
                .collect(),
            asesmen_pembelajaran: Assessment {
                asesmen_awal: "Pertanyaan diagnostik".to_string(),
                asesmen_proses: "Rubrik observasi".to_string(),
                asesmen_akhir: "Presentasi".to_string(),
            },
            signatures: Signatures {
                teacher_name: "Budi Santoso".to_string(),
                teacher_nip: "198001012005011001".to_string(),
                principal_name: "Siti Aminah".to_string(),
                principal_nip: "197501012000012001".to_string(),
            },
        }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render_html(&sample_plan(1));

        let positions: Vec<usize> = [
            "A. IDENTITAS",
            "B. IDENTIFIKASI",
            "C. DESAIN PEMBELAJARAN",
            "D. PENGALAMAN BELAJAR",
            "E. ASESMEN PEMBELAJARAN",
            "Mengetahui,",
        ]
        .iter()
        .map(|s| html.find(s).unwrap_or_else(|| panic!("missing section {s}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_one_block_per_meeting() {
        let html = render_html(&sample_plan(3));

        assert!(html.contains("Pertemuan ke-1"));
        assert!(html.contains("Pertemuan ke-2"));
        assert!(html.contains("Pertemuan ke-3"));
        assert_eq!(html.matches("Mengaplikasi").count(), 3);
        assert!(html.contains("<em>(berkesadaran)</em>"));
    }

    #[test]
    fn test_signatures_rendered() {
        let html = render_html(&sample_plan(1));

        assert!(html.contains("Kepala Sekolah"));
        assert!(html.contains("Guru Mata Pelajaran"));
        assert!(html.contains("Siti Aminah"));
        assert!(html.contains("NIP. 198001012005011001"));
    }

    #[test]
    fn test_document_text_is_escaped() {
        let html = render_html(&sample_plan(1));

        assert!(html.contains("Keimanan &amp; Ketakwaan"));
    }
}
