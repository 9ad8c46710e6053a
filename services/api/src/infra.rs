use admission_score::admission::{
    AdmissionRepository, Applicant, ApplicantId, BonusPointRecord, ExamLevel, ExamResultRecord,
    LanguageCertificateType, Program, ProgramCatalog, ProgramId, ProgramSubject, RepositoryError,
    SubjectName,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) const ELTE_IK: &str = "elte-ik-programtervezo-informatikus";
pub(crate) const PPKE_BTK: &str = "ppke-btk-anglisztika";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only store backing the HTTP service and the CLI.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAdmissionRepository {
    catalog: ProgramCatalog,
    applicants: Vec<Applicant>,
}

impl InMemoryAdmissionRepository {
    pub(crate) fn new(programs: Vec<Program>, applicants: Vec<Applicant>) -> Self {
        Self {
            catalog: ProgramCatalog::new(programs),
            applicants,
        }
    }

    pub(crate) fn seeded() -> Self {
        Self::new(demo_programs(), demo_applicants())
    }

    pub(crate) fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub(crate) fn applicants_snapshot(&self) -> &[Applicant] {
        &self.applicants
    }
}

impl AdmissionRepository for InMemoryAdmissionRepository {
    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self.applicants.clone())
    }

    fn applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Ok(self
            .applicants
            .iter()
            .find(|applicant| &applicant.id == id)
            .cloned())
    }

    fn program(&self, id: &ProgramId) -> Result<Option<Program>, RepositoryError> {
        Ok(self.catalog.get(id).cloned())
    }
}

pub(crate) fn demo_programs() -> Vec<Program> {
    vec![
        Program {
            id: ProgramId(ELTE_IK.to_string()),
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
        },
        Program {
            id: ProgramId(PPKE_BTK.to_string()),
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
        },
    ]
}

fn exam(subject: SubjectName, level: ExamLevel, percentage: i32) -> ExamResultRecord {
    ExamResultRecord {
        subject,
        level,
        percentage,
    }
}

fn language_exam(certificate_type: LanguageCertificateType, language: &str) -> BonusPointRecord {
    BonusPointRecord {
        category: "Nyelvvizsga".to_string(),
        certificate_type,
        language: language.to_string(),
    }
}

fn base_results() -> Vec<ExamResultRecord> {
    vec![
        exam(SubjectName::HungarianLanguageAndLiterature, ExamLevel::Intermediate, 70),
        exam(SubjectName::History, ExamLevel::Intermediate, 80),
        exam(SubjectName::Mathematics, ExamLevel::Advanced, 90),
        exam(SubjectName::EnglishLanguage, ExamLevel::Intermediate, 94),
        exam(SubjectName::Informatics, ExamLevel::Intermediate, 95),
    ]
}

fn base_certificates() -> Vec<BonusPointRecord> {
    vec![
        language_exam(LanguageCertificateType::UpperIntermediate, "angol"),
        language_exam(LanguageCertificateType::Advanced, "német"),
    ]
}

/// Four reference applicants: two scorable, two rejected.
pub(crate) fn demo_applicants() -> Vec<Applicant> {
    let applicant = |id: &str,
                     exam_results: Vec<ExamResultRecord>,
                     bonus_points: Vec<BonusPointRecord>| Applicant {
        id: ApplicantId(id.to_string()),
        program_id: ProgramId(ELTE_IK.to_string()),
        exam_results,
        bonus_points,
    };

    let mut with_physics = base_results();
    with_physics.push(exam(SubjectName::Physics, ExamLevel::Intermediate, 98));

    let missing_globals = base_results()
        .into_iter()
        .filter(|record| {
            !matches!(
                record.subject,
                SubjectName::HungarianLanguageAndLiterature | SubjectName::History
            )
        })
        .collect();

    let mut failed = base_results();
    failed[0].percentage = 15;

    vec![
        applicant("1", base_results(), base_certificates()),
        applicant("2", with_physics, base_certificates()),
        applicant("3", missing_globals, base_certificates()),
        applicant("4", failed, base_certificates()),
    ]
}
