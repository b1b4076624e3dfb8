//! HTTP-level tests for the Gemini client
//!
//! A wiremock server stands in for the generateContent endpoint so the
//! client's request shape and error mapping can be observed end to end.
//! Tests that touch the credential environment variable run serially.

use std::sync::Arc;

use rpmgen::config::LlmConfig;
use rpmgen::generator::{GenerateError, PlanGenerator};
use rpmgen::llm::{GeminiClient, LlmError};
use rpmgen::{FormState, LessonPlanInput};
use serial_test::serial;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY_ENV: &str = "RPMGEN_TEST_API_KEY";

fn test_config(base_url: String) -> LlmConfig {
    LlmConfig {
        model: "gemini-2.5-flash".to_string(),
        api_key_env: KEY_ENV.to_string(),
        base_url,
        temperature: 0.7,
        timeout_ms: 5_000,
    }
}

fn set_key(value: Option<&str>) {
    // set_var/remove_var are unsafe in edition 2024; the #[serial] attribute
    // keeps these tests from racing each other
    unsafe {
        match value {
            Some(v) => std::env::set_var(KEY_ENV, v),
            None => std::env::remove_var(KEY_ENV),
        }
    }
}

fn valid_input() -> LessonPlanInput {
    let mut form = FormState::new();
    form.set_school_name("SMP Negeri 1");
    form.set_teacher_name("Budi Santoso");
    form.set_teacher_nip("198001012005011001");
    form.set_principal_name("Siti Aminah");
    form.set_principal_nip("197501012000012001");
    form.set_subject("Ilmu Pengetahuan Alam");
    form.set_learning_outcomes("Peserta didik memahami ekosistem");
    form.set_learning_objectives("Menjelaskan rantai makanan");
    form.set_learning_material("Ekosistem");
    form.submit().expect("filled form")
}

fn document_json() -> serde_json::Value {
    serde_json::json!({
        "identitas": {
            "namaSatuanPendidikan": "SMP Negeri 1",
            "mataPelajaran": "Ilmu Pengetahuan Alam",
            "kelasSemester": "7/Ganjil",
            "durasiPertemuan": "2 x 45 menit"
        },
        "identifikasi": {
            "siswa": "Peserta didik kelas 7",
            "materiPelajaran": "Ekosistem",
            "capaianDimensiLulusan": ["Kolaborasi"]
        },
        "desainPembelajaran": {
            "capaianPembelajaran": "Memahami ekosistem",
            "lintasDisiplinIlmu": "Geografi",
            "tujuanPembelajaran": "Menjelaskan rantai makanan",
            "topikPembelajaran": ["Rantai makanan"],
            "praktikPedagogis": ["Inkuiri-Discovery Learning"],
            "kemitraanPembelajaran": "Orang tua",
            "lingkunganPembelajaran": "Kelas",
            "pemanfaatanDigital": "Simulasi PhET"
        },
        "pengalamanBelajar": [{
            "pertemuan": 1,
            "memahami": { "kegiatan": "Apersepsi", "fokus": "berkesadaran" },
            "mengaplikasi": { "kegiatan": "Penyelidikan", "fokus": "bermakna" },
            "refleksi": { "kegiatan": "Refleksi", "fokus": "menggembirakan" }
        }],
        "asesmenPembelajaran": {
            "asesmenAwal": "Diagnostik",
            "asesmenProses": "Observasi",
            "asesmenAkhir": "Presentasi"
        },
        "signatures": {
            "teacherName": "Budi Santoso",
            "teacherNip": "198001012005011001",
            "principalName": "Siti Aminah",
            "principalNip": "197501012000012001"
        }
    })
}

fn envelope_with_text(text: String) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
#[serial]
async fn test_generate_against_mock_endpoint() {
    set_key(Some("test-key"));
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope_with_text(document_json().to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&test_config(server.uri())).expect("key present");
    let generator = PlanGenerator::new(Arc::new(client));

    let plan = generator.generate(&valid_input()).await.expect("generation succeeds");
    assert_eq!(plan.identitas.mata_pelajaran, "Ilmu Pengetahuan Alam");
    assert_eq!(plan.pengalaman_belajar.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_server_error_maps_to_service_error() {
    set_key(Some("test-key"));
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&test_config(server.uri())).expect("key present");
    let generator = PlanGenerator::new(Arc::new(client));

    let err = generator.generate(&valid_input()).await.unwrap_err();
    match err {
        GenerateError::Service(LlmError::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected Service(Api), got {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_prose_reply_maps_to_format_error() {
    set_key(Some("test-key"));
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with_text(
            "Berikut adalah RPM yang Anda minta:".to_string(),
        )))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&test_config(server.uri())).expect("key present");
    let generator = PlanGenerator::new(Arc::new(client));

    let err = generator.generate(&valid_input()).await.unwrap_err();
    assert!(matches!(err, GenerateError::ResponseFormat(_)));
}

#[tokio::test]
#[serial]
async fn test_wrong_shape_reply_maps_to_format_error() {
    set_key(Some("test-key"));
    let server = MockServer::start().await;

    // Valid JSON, wrong shape: a declared section is missing
    let mut body = document_json();
    body.as_object_mut().unwrap().remove("asesmenPembelajaran");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_with_text(body.to_string())))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&test_config(server.uri())).expect("key present");
    let generator = PlanGenerator::new(Arc::new(client));

    let err = generator.generate(&valid_input()).await.unwrap_err();
    match err {
        GenerateError::ResponseFormat(message) => assert!(message.contains("asesmenPembelajaran")),
        other => panic!("Expected ResponseFormat, got {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_empty_candidates_map_to_service_error() {
    set_key(Some("test-key"));
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::from_config(&test_config(server.uri())).expect("key present");
    let generator = PlanGenerator::new(Arc::new(client));

    let err = generator.generate(&valid_input()).await.unwrap_err();
    assert!(matches!(err, GenerateError::Service(LlmError::EmptyCompletion(_))));
}

#[tokio::test]
#[serial]
async fn test_missing_credential_prevents_construction() {
    set_key(None);

    let err = GeminiClient::from_config(&test_config("http://localhost:1".to_string())).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains(KEY_ENV));
}
