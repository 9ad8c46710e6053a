use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::admission::domain::{
    Applicant, ApplicantId, BonusPointRecord, ExamLevel, ExamResultRecord,
    LanguageCertificateType, Program, ProgramId, ProgramSubject, SubjectName,
};
use crate::admission::repository::{AdmissionRepository, RepositoryError};
use crate::admission::requirements::ProgramCatalog;
use crate::admission::{admission_router, AdmissionScoringService};

pub(super) const INFORMATICS: &str = "elte-ik";
pub(super) const ENGLISH_STUDIES: &str = "ppke-btk";

pub(super) fn informatics_program() -> Program {
    Program {
        id: ProgramId(INFORMATICS.to_string()),
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

pub(super) fn english_studies_program() -> Program {
    Program {
        id: ProgramId(ENGLISH_STUDIES.to_string()),
        university: "PPKE".to_string(),
        faculty: "BTK".to_string(),
        name: "Anglisztika".to_string(),
        subjects: vec![
            ProgramSubject::mandatory(SubjectName::EnglishLanguage, Some(ExamLevel::Advanced)),
            ProgramSubject::elective(SubjectName::FrenchLanguage),
            ProgramSubject::elective(SubjectName::GermanLanguage),
            ProgramSubject::elective(SubjectName::ItalianLanguage),
            ProgramSubject::elective(SubjectName::RussianLanguage),
            ProgramSubject::elective(SubjectName::SpanishLanguage),
            ProgramSubject::elective(SubjectName::History),
        ],
    }
}

pub(super) fn catalog() -> ProgramCatalog {
    ProgramCatalog::new([informatics_program(), english_studies_program()])
}

pub(super) fn exam(subject: SubjectName, level: ExamLevel, percentage: i32) -> ExamResultRecord {
    ExamResultRecord {
        subject,
        level,
        percentage,
    }
}

pub(super) fn certificate(
    certificate_type: LanguageCertificateType,
    language: &str,
) -> BonusPointRecord {
    BonusPointRecord {
        category: "Nyelvvizsga".to_string(),
        certificate_type,
        language: language.to_string(),
    }
}

pub(super) fn applicant(
    id: &str,
    program: &str,
    exam_results: Vec<ExamResultRecord>,
    bonus_points: Vec<BonusPointRecord>,
) -> Applicant {
    Applicant {
        id: ApplicantId(id.to_string()),
        program_id: ProgramId(program.to_string()),
        exam_results,
        bonus_points,
    }
}

fn language_certificates() -> Vec<BonusPointRecord> {
    vec![
        certificate(LanguageCertificateType::UpperIntermediate, "angol"),
        certificate(LanguageCertificateType::Advanced, "német"),
    ]
}

/// 370 base + 100 bonus.
pub(super) fn scenario_a() -> Applicant {
    applicant(
        "applicant-1",
        INFORMATICS,
        vec![
            exam(
                SubjectName::HungarianLanguageAndLiterature,
                ExamLevel::Intermediate,
                70,
            ),
            exam(SubjectName::History, ExamLevel::Intermediate, 80),
            exam(SubjectName::Mathematics, ExamLevel::Advanced, 90),
            exam(SubjectName::EnglishLanguage, ExamLevel::Intermediate, 94),
            exam(SubjectName::Informatics, ExamLevel::Intermediate, 95),
        ],
        language_certificates(),
    )
}

/// Scenario A plus fizika 98%, which outscores informatika.
pub(super) fn scenario_b() -> Applicant {
    let mut applicant = scenario_a();
    applicant.id = ApplicantId("applicant-2".to_string());
    applicant
        .exam_results
        .push(exam(SubjectName::Physics, ExamLevel::Intermediate, 98));
    applicant
}

/// Missing magyar and történelem.
pub(super) fn scenario_c() -> Applicant {
    applicant(
        "applicant-3",
        INFORMATICS,
        vec![
            exam(SubjectName::Mathematics, ExamLevel::Advanced, 90),
            exam(SubjectName::EnglishLanguage, ExamLevel::Intermediate, 94),
            exam(SubjectName::Informatics, ExamLevel::Intermediate, 95),
        ],
        language_certificates(),
    )
}

/// Magyar at 15%.
pub(super) fn scenario_d() -> Applicant {
    let mut applicant = scenario_a();
    applicant.id = ApplicantId("applicant-4".to_string());
    applicant.exam_results[0].percentage = 15;
    applicant
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    applicants: Vec<Applicant>,
    programs: HashMap<ProgramId, Program>,
}

impl MemoryRepository {
    pub(super) fn seeded() -> Self {
        Self::with(
            vec![scenario_a(), scenario_b(), scenario_c(), scenario_d()],
            vec![informatics_program(), english_studies_program()],
        )
    }

    pub(super) fn with(applicants: Vec<Applicant>, programs: Vec<Program>) -> Self {
        Self {
            applicants,
            programs: programs
                .into_iter()
                .map(|program| (program.id.clone(), program))
                .collect(),
        }
    }
}

impl AdmissionRepository for MemoryRepository {
    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self.applicants.clone())
    }

    fn applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Ok(self.applicants.iter().find(|applicant| &applicant.id == id).cloned())
    }

    fn program(&self, id: &ProgramId) -> Result<Option<Program>, RepositoryError> {
        Ok(self.programs.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl AdmissionRepository for UnavailableRepository {
    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn applicant(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn program(&self, _id: &ProgramId) -> Result<Option<Program>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> AdmissionScoringService<MemoryRepository> {
    AdmissionScoringService::new(Arc::new(MemoryRepository::seeded()))
}

pub(super) fn router_with_service<R>(service: AdmissionScoringService<R>) -> axum::Router
where
    R: AdmissionRepository + 'static,
{
    admission_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
