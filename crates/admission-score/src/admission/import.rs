//! CSV intake for an applicant's exam and certificate rows.
//!
//! Expected header: `kind,subject,level,percentage,certificate_type,language`, where `kind` is
//! `exam` or `certificate`. Rows keep file order. Percentages are passed through untouched so the
//! scoring pipeline stays the only place that judges them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{
    BonusPointRecord, ExamLevel, ExamResultRecord, LanguageCertificateType, SubjectName,
    UnknownVariant,
};

pub const LANGUAGE_EXAM_CATEGORY: &str = "Nyelvvizsga";

/// Exam and certificate rows read from one applicant file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantRecords {
    pub exam_results: Vec<ExamResultRecord>,
    pub bonus_points: Vec<BonusPointRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read applicant records: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    Value { row: usize, source: UnknownVariant },
    #[error("row {row}: missing '{field}' for {kind} row")]
    MissingField {
        row: usize,
        kind: &'static str,
        field: &'static str,
    },
    #[error("row {row}: unknown row kind '{kind}' (expected 'exam' or 'certificate')")]
    UnknownKind { row: usize, kind: String },
}

pub fn parse_applicant_records_from_path(
    path: impl AsRef<Path>,
) -> Result<ApplicantRecords, ImportError> {
    let file = File::open(path)?;
    parse_applicant_records(file)
}

pub fn parse_applicant_records<R: Read>(reader: R) -> Result<ApplicantRecords, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = ApplicantRecords::default();

    for (index, row) in csv_reader.deserialize::<RecordRow>().enumerate() {
        let row = row?;
        // Header is line 1.
        let line = index + 2;

        match row.kind.to_ascii_lowercase().as_str() {
            "exam" => records.exam_results.push(row.exam(line)?),
            "certificate" => records.bonus_points.push(row.certificate(line)?),
            other => {
                return Err(ImportError::UnknownKind {
                    row: line,
                    kind: other.to_string(),
                })
            }
        }
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RecordRow {
    kind: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    subject: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    level: Option<String>,
    #[serde(default)]
    percentage: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    certificate_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    language: Option<String>,
}

impl RecordRow {
    fn exam(&self, row: usize) -> Result<ExamResultRecord, ImportError> {
        let missing = |field| ImportError::MissingField {
            row,
            kind: "exam",
            field,
        };
        let subject = self.subject.as_deref().ok_or_else(|| missing("subject"))?;
        let level = self.level.as_deref().ok_or_else(|| missing("level"))?;
        let percentage = self.percentage.ok_or_else(|| missing("percentage"))?;

        Ok(ExamResultRecord {
            subject: subject
                .parse::<SubjectName>()
                .map_err(|source| ImportError::Value { row, source })?,
            level: level
                .parse::<ExamLevel>()
                .map_err(|source| ImportError::Value { row, source })?,
            percentage,
        })
    }

    fn certificate(&self, row: usize) -> Result<BonusPointRecord, ImportError> {
        let missing = |field| ImportError::MissingField {
            row,
            kind: "certificate",
            field,
        };
        let certificate_type = self
            .certificate_type
            .as_deref()
            .ok_or_else(|| missing("certificate_type"))?;
        let language = self.language.clone().ok_or_else(|| missing("language"))?;

        Ok(BonusPointRecord {
            category: LANGUAGE_EXAM_CATEGORY.to_string(),
            certificate_type: certificate_type
                .parse::<LanguageCertificateType>()
                .map_err(|source| ImportError::Value { row, source })?,
            language,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
