//! End-to-end scoring through the public crate surface: CSV intake, requirement lookup in a
//! program catalog, and the HTTP router over a caller-supplied repository.

mod common {
    use std::sync::Arc;

    use admission_score::admission::{
        AdmissionRepository, AdmissionScoringService, Applicant, ApplicantId, ExamLevel, Program,
        ProgramCatalog, ProgramId, ProgramSubject, RepositoryError, SubjectName,
    };

    pub(super) fn informatics() -> Program {
        Program {
            id: ProgramId("elte-ik".to_string()),
            university: "ELTE".to_string(),
            faculty: "IK".to_string(),
            name: "Programtervező informatikus".to_string(),
            subjects: vec![
                ProgramSubject::mandatory(SubjectName::Mathematics, None),
                ProgramSubject::elective(SubjectName::Biology),
                ProgramSubject::elective(SubjectName::Physics),
                ProgramSubject::elective(SubjectName::Informatics),
                ProgramSubject::elective(SubjectName::Chemistry),
            ],
        }
    }

    pub(super) fn english_studies() -> Program {
        Program {
            id: ProgramId("ppke-btk".to_string()),
            university: "PPKE".to_string(),
            faculty: "BTK".to_string(),
            name: "Anglisztika".to_string(),
            subjects: vec![
                ProgramSubject::mandatory(SubjectName::EnglishLanguage, Some(ExamLevel::Advanced)),
                ProgramSubject::elective(SubjectName::FrenchLanguage),
                ProgramSubject::elective(SubjectName::GermanLanguage),
                ProgramSubject::elective(SubjectName::History),
            ],
        }
    }

    pub(super) fn catalog() -> ProgramCatalog {
        ProgramCatalog::new([informatics(), english_studies()])
    }

    pub(super) struct StaticRepository {
        pub(super) applicants: Vec<Applicant>,
        pub(super) programs: Vec<Program>,
    }

    impl AdmissionRepository for StaticRepository {
        fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
            Ok(self.applicants.clone())
        }

        fn applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
            Ok(self.applicants.iter().find(|a| &a.id == id).cloned())
        }

        fn program(&self, id: &ProgramId) -> Result<Option<Program>, RepositoryError> {
            Ok(self.programs.iter().find(|p| &p.id == id).cloned())
        }
    }

    pub(super) fn service(applicants: Vec<Applicant>) -> Arc<AdmissionScoringService<StaticRepository>> {
        Arc::new(AdmissionScoringService::new(Arc::new(StaticRepository {
            applicants,
            programs: vec![informatics(), english_studies()],
        })))
    }
}

use admission_score::admission::{
    admission_router, parse_applicant_records, AdmissionError, AdmissionScorer, Applicant,
    ApplicantId, ProgramId,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

const HEADER: &str = "kind,subject,level,percentage,certificate_type,language";

fn applicant_from_csv(id: &str, program: &str, rows: &[&str]) -> Applicant {
    let csv = std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\n");
    let records = parse_applicant_records(csv.as_bytes()).expect("csv parses");
    Applicant {
        id: ApplicantId(id.to_string()),
        program_id: ProgramId(program.to_string()),
        exam_results: records.exam_results,
        bonus_points: records.bonus_points,
    }
}

fn informatics_rows() -> Vec<&'static str> {
    vec![
        "exam,magyar nyelv és irodalom,közép,70,,",
        "exam,történelem,közép,80,,",
        "exam,matematika,emelt,90,,",
        "exam,angol nyelv,közép,94,,",
        "exam,informatika,közép,95,,",
        "certificate,,,,B2,angol",
        "certificate,,,,C1,német",
    ]
}

#[test]
fn csv_applicant_is_scored_against_the_catalog() {
    let applicant = applicant_from_csv("csv-1", "elte-ik", &informatics_rows());

    let score = AdmissionScorer::new()
        .calculate_for_applicant(&applicant, &common::catalog())
        .expect("scores");

    assert_eq!(score.base_points(), 370);
    assert_eq!(score.bonus_points(), 100);
    assert_eq!(score.total(), 470);
}

#[test]
fn csv_applicant_with_out_of_range_row_is_rejected_by_the_pipeline() {
    let mut rows = informatics_rows();
    rows.push("exam,fizika,közép,105,,");
    let applicant = applicant_from_csv("csv-2", "elte-ik", &rows);

    assert_eq!(
        AdmissionScorer::new().calculate_for_applicant(&applicant, &common::catalog()),
        Err(AdmissionError::OutOfRangePercentage { percentage: 105 })
    );
}

#[test]
fn duplicate_certificates_for_one_language_count_once() {
    let applicant = applicant_from_csv(
        "csv-3",
        "ppke-btk",
        &[
            "exam,magyar nyelv és irodalom,közép,60,,",
            "exam,történelem,közép,70,,",
            "exam,matematika,közép,40,,",
            "exam,angol nyelv,emelt,85,,",
            "certificate,,,,B2,francia",
            "certificate,,,,C1,francia",
        ],
    );

    let score = AdmissionScorer::new()
        .calculate_for_applicant(&applicant, &common::catalog())
        .expect("scores");

    assert_eq!(score.base_points(), 2 * (85 + 70));
    // emelt angol 50 + best francia certificate 40
    assert_eq!(score.bonus_points(), 90);
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn router_scores_applicants_from_any_repository() {
    let applicant = applicant_from_csv("csv-1", "elte-ik", &informatics_rows());
    let router = admission_router(common::service(vec![applicant]));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/applicants/csv-1/score")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "data": { "osszpontszam": 470, "alappont": 370, "tobbletpont": 100 } })
    );

    let response = router
        .oneshot(
            Request::get("/api/v1/applicants/missing/score")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn router_reports_level_requirement_failures() {
    let applicant = applicant_from_csv(
        "csv-4",
        "ppke-btk",
        &[
            "exam,magyar nyelv és irodalom,közép,60,,",
            "exam,történelem,közép,70,,",
            "exam,matematika,közép,40,,",
            "exam,angol nyelv,közép,85,,",
        ],
    );
    let router = admission_router(common::service(vec![applicant]));

    let response = router
        .oneshot(
            Request::get("/api/v1/applicants/csv-4/score")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = json_body(response).await;
    assert_eq!(payload["subject"], "angol nyelv");
    assert_eq!(payload["required_level"], "emelt");
}
