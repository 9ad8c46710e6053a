use serde::Serialize;

use super::domain::{
    BonusPointRecord, ExamLevel, ExamResultRecord, LanguageCertificateType, SubjectName,
};
use super::error::AdmissionError;

const MINIMUM_PASSING_PERCENTAGE: u8 = 20;

/// Validated exam outcome. Only constructible through [`ExamResult::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamResult {
    subject: SubjectName,
    level: ExamLevel,
    percentage: u8,
}

impl ExamResult {
    pub fn new(
        subject: SubjectName,
        level: ExamLevel,
        percentage: i32,
    ) -> Result<Self, AdmissionError> {
        let percentage = u8::try_from(percentage)
            .ok()
            .filter(|value| *value <= 100)
            .ok_or(AdmissionError::OutOfRangePercentage { percentage })?;

        if percentage < MINIMUM_PASSING_PERCENTAGE {
            return Err(AdmissionError::FailedExam {
                subject,
                percentage,
            });
        }

        Ok(Self {
            subject,
            level,
            percentage,
        })
    }

    pub fn subject(&self) -> SubjectName {
        self.subject
    }

    pub fn level(&self) -> ExamLevel {
        self.level
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn points(&self) -> u32 {
        u32::from(self.percentage)
    }

    pub fn is_advanced_level(&self) -> bool {
        self.level == ExamLevel::Advanced
    }
}

impl TryFrom<&ExamResultRecord> for ExamResult {
    type Error = AdmissionError;

    fn try_from(record: &ExamResultRecord) -> Result<Self, Self::Error> {
        ExamResult::new(record.subject, record.level, record.percentage)
    }
}

/// Language proficiency certificate; the language is kept as stored, unnormalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCertificate {
    certificate_type: LanguageCertificateType,
    language: String,
}

impl LanguageCertificate {
    pub fn new(certificate_type: LanguageCertificateType, language: impl Into<String>) -> Self {
        Self {
            certificate_type,
            language: language.into(),
        }
    }

    pub fn certificate_type(&self) -> LanguageCertificateType {
        self.certificate_type
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn points(&self) -> u32 {
        self.certificate_type.points()
    }
}

impl From<&BonusPointRecord> for LanguageCertificate {
    fn from(record: &BonusPointRecord) -> Self {
        LanguageCertificate::new(record.certificate_type, record.language.clone())
    }
}

/// Final admission score. Unsigned fields keep both parts non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    base_points: u32,
    bonus_points: u32,
}

impl Score {
    pub fn new(base_points: u32, bonus_points: u32) -> Self {
        Self {
            base_points,
            bonus_points,
        }
    }

    pub fn base_points(&self) -> u32 {
        self.base_points
    }

    pub fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    pub fn total(&self) -> u32 {
        self.base_points + self.bonus_points
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            total: self.total(),
            base_points: self.base_points,
            bonus_points: self.bonus_points,
        }
    }
}

/// Client-facing score payload, keyed by the Hungarian field names the frontend reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreView {
    #[serde(rename = "osszpontszam")]
    pub total: u32,
    #[serde(rename = "alappont")]
    pub base_points: u32,
    #[serde(rename = "tobbletpont")]
    pub bonus_points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_percentages_from_twenty_to_hundred() {
        for percentage in [20, 55, 100] {
            let result = ExamResult::new(SubjectName::History, ExamLevel::Intermediate, percentage)
                .expect("passing result");
            assert_eq!(result.points(), percentage as u32);
        }
    }

    #[test]
    fn below_twenty_is_a_failed_exam() {
        for percentage in [0, 1, 15, 19] {
            let err = ExamResult::new(SubjectName::Physics, ExamLevel::Advanced, percentage)
                .expect_err("failing result");
            assert_eq!(
                err,
                AdmissionError::FailedExam {
                    subject: SubjectName::Physics,
                    percentage: percentage as u8,
                }
            );
        }
    }

    #[test]
    fn outside_zero_to_hundred_is_out_of_range() {
        for percentage in [-1, -250, 101, 256, i32::MAX] {
            let err = ExamResult::new(SubjectName::Mathematics, ExamLevel::Intermediate, percentage)
                .expect_err("out of range");
            assert_eq!(err, AdmissionError::OutOfRangePercentage { percentage });
        }
    }

    #[test]
    fn advanced_level_is_reported() {
        let advanced = ExamResult::new(SubjectName::Mathematics, ExamLevel::Advanced, 90)
            .expect("valid");
        let intermediate = ExamResult::new(SubjectName::Mathematics, ExamLevel::Intermediate, 90)
            .expect("valid");
        assert!(advanced.is_advanced_level());
        assert!(!intermediate.is_advanced_level());
    }

    #[test]
    fn certificate_points_follow_type() {
        assert_eq!(
            LanguageCertificate::new(LanguageCertificateType::UpperIntermediate, "angol").points(),
            28
        );
        let c1 = LanguageCertificate::new(LanguageCertificateType::Advanced, "német");
        assert_eq!(c1.points(), 40);
        assert_eq!(c1.language(), "német");
    }

    #[test]
    fn score_totals_both_parts() {
        let score = Score::new(370, 100);
        assert_eq!(score.total(), 470);
        let json = serde_json::to_value(score.view()).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({ "osszpontszam": 470, "alappont": 370, "tobbletpont": 100 })
        );
    }
}
