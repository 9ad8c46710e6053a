use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Identifier wrapper for university programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(pub String);

/// Subjects recognised by the secondary-school leaving exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectName {
    #[serde(rename = "magyar nyelv és irodalom")]
    HungarianLanguageAndLiterature,
    #[serde(rename = "történelem")]
    History,
    #[serde(rename = "matematika")]
    Mathematics,
    #[serde(rename = "angol nyelv")]
    EnglishLanguage,
    #[serde(rename = "német nyelv")]
    GermanLanguage,
    #[serde(rename = "francia nyelv")]
    FrenchLanguage,
    #[serde(rename = "olasz nyelv")]
    ItalianLanguage,
    #[serde(rename = "orosz nyelv")]
    RussianLanguage,
    #[serde(rename = "spanyol nyelv")]
    SpanishLanguage,
    #[serde(rename = "informatika")]
    Informatics,
    #[serde(rename = "biológia")]
    Biology,
    #[serde(rename = "fizika")]
    Physics,
    #[serde(rename = "kémia")]
    Chemistry,
}

impl SubjectName {
    pub const ALL: [SubjectName; 13] = [
        SubjectName::HungarianLanguageAndLiterature,
        SubjectName::History,
        SubjectName::Mathematics,
        SubjectName::EnglishLanguage,
        SubjectName::GermanLanguage,
        SubjectName::FrenchLanguage,
        SubjectName::ItalianLanguage,
        SubjectName::RussianLanguage,
        SubjectName::SpanishLanguage,
        SubjectName::Informatics,
        SubjectName::Biology,
        SubjectName::Physics,
        SubjectName::Chemistry,
    ];

    /// Subjects every applicant must have sat, regardless of program.
    pub const fn globally_mandatory() -> [SubjectName; 3] {
        [
            SubjectName::HungarianLanguageAndLiterature,
            SubjectName::History,
            SubjectName::Mathematics,
        ]
    }

    pub const fn is_language(self) -> bool {
        matches!(
            self,
            SubjectName::EnglishLanguage
                | SubjectName::GermanLanguage
                | SubjectName::FrenchLanguage
                | SubjectName::ItalianLanguage
                | SubjectName::RussianLanguage
                | SubjectName::SpanishLanguage
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            SubjectName::HungarianLanguageAndLiterature => "magyar nyelv és irodalom",
            SubjectName::History => "történelem",
            SubjectName::Mathematics => "matematika",
            SubjectName::EnglishLanguage => "angol nyelv",
            SubjectName::GermanLanguage => "német nyelv",
            SubjectName::FrenchLanguage => "francia nyelv",
            SubjectName::ItalianLanguage => "olasz nyelv",
            SubjectName::RussianLanguage => "orosz nyelv",
            SubjectName::SpanishLanguage => "spanyol nyelv",
            SubjectName::Informatics => "informatika",
            SubjectName::Biology => "biológia",
            SubjectName::Physics => "fizika",
            SubjectName::Chemistry => "kémia",
        }
    }
}

impl fmt::Display for SubjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SubjectName {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        SubjectName::ALL
            .into_iter()
            .find(|subject| subject.label() == trimmed)
            .ok_or_else(|| UnknownVariant::new("subject", trimmed))
    }
}

/// Exam difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamLevel {
    #[serde(rename = "közép")]
    Intermediate,
    #[serde(rename = "emelt")]
    Advanced,
}

impl ExamLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ExamLevel::Intermediate => "közép",
            ExamLevel::Advanced => "emelt",
        }
    }
}

impl fmt::Display for ExamLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExamLevel {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "közép" => Ok(ExamLevel::Intermediate),
            "emelt" => Ok(ExamLevel::Advanced),
            other => Err(UnknownVariant::new("exam level", other)),
        }
    }
}

/// Language proficiency certificate grades that earn bonus points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCertificateType {
    #[serde(rename = "B2")]
    UpperIntermediate,
    #[serde(rename = "C1")]
    Advanced,
}

impl LanguageCertificateType {
    pub const fn points(self) -> u32 {
        match self {
            LanguageCertificateType::UpperIntermediate => 28,
            LanguageCertificateType::Advanced => 40,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LanguageCertificateType::UpperIntermediate => "B2",
            LanguageCertificateType::Advanced => "C1",
        }
    }
}

impl FromStr for LanguageCertificateType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "B2" => Ok(LanguageCertificateType::UpperIntermediate),
            "C1" => Ok(LanguageCertificateType::Advanced),
            other => Err(UnknownVariant::new("certificate type", other)),
        }
    }
}

/// Tag on a program requirement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    Mandatory,
    Elective,
}

/// Raised when a wire name does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Stored exam row, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResultRecord {
    pub subject: SubjectName,
    pub level: ExamLevel,
    pub percentage: i32,
}

/// Stored bonus-point row. Only language certificates are scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPointRecord {
    pub category: String,
    pub certificate_type: LanguageCertificateType,
    pub language: String,
}

/// Requirement row attached to a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSubject {
    pub subject: SubjectName,
    pub requirement_type: RequirementType,
    #[serde(default)]
    pub required_level: Option<ExamLevel>,
}

impl ProgramSubject {
    pub fn mandatory(subject: SubjectName, required_level: Option<ExamLevel>) -> Self {
        Self {
            subject,
            requirement_type: RequirementType::Mandatory,
            required_level,
        }
    }

    pub fn elective(subject: SubjectName) -> Self {
        Self {
            subject,
            requirement_type: RequirementType::Elective,
            required_level: None,
        }
    }
}

/// University program together with its requirement rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub university: String,
    pub faculty: String,
    pub name: String,
    pub subjects: Vec<ProgramSubject>,
}

/// Applicant snapshot as loaded from storage; rows keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub program_id: ProgramId,
    pub exam_results: Vec<ExamResultRecord>,
    pub bonus_points: Vec<BonusPointRecord>,
}
