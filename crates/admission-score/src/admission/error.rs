use super::domain::{ExamLevel, SubjectName};

/// Terminal outcomes of a scoring run. Messages are rendered verbatim to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    #[error("a százalékos eredménynek 0 és 100 között kell lennie, kapott érték: {percentage}")]
    OutOfRangePercentage { percentage: i32 },
    #[error("nem lehetséges a pontszámítás a {subject} tárgyból elért 20% alatti eredmény miatt")]
    FailedExam { subject: SubjectName, percentage: u8 },
    #[error("nem lehetséges a pontszámítás a kötelező érettségi tárgyak hiánya miatt")]
    MissingGlobalMandatorySubject,
    #[error("nem lehetséges a pontszámítás a {subject} kötelező tárgy hiánya miatt")]
    MissingProgramMandatorySubject { subject: SubjectName },
    #[error(
        "nem lehetséges a pontszámítás a {subject} tárgyból elvárt {required_level} szint hiánya miatt"
    )]
    ProgramMandatorySubjectLevel {
        subject: SubjectName,
        required_level: ExamLevel,
    },
    #[error("nem lehetséges a pontszámítás a kötelezően választható tárgy hiánya miatt")]
    MissingElectiveSubject,
    #[error("nem lehetséges a pontszámítás ismeretlen szak miatt")]
    UnknownProgram,
}

impl AdmissionError {
    /// Stable machine-readable name, used for logs and metrics labels.
    pub const fn kind(&self) -> &'static str {
        match self {
            AdmissionError::OutOfRangePercentage { .. } => "out_of_range_percentage",
            AdmissionError::FailedExam { .. } => "failed_exam",
            AdmissionError::MissingGlobalMandatorySubject => "missing_global_mandatory_subject",
            AdmissionError::MissingProgramMandatorySubject { .. } => {
                "missing_program_mandatory_subject"
            }
            AdmissionError::ProgramMandatorySubjectLevel { .. } => {
                "program_mandatory_subject_level"
            }
            AdmissionError::MissingElectiveSubject => "missing_elective_subject",
            AdmissionError::UnknownProgram => "unknown_program",
        }
    }

    /// Malformed input rather than an applicant who cannot be scored.
    pub const fn is_input_validation(&self) -> bool {
        matches!(self, AdmissionError::OutOfRangePercentage { .. })
    }
}
