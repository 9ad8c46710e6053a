use std::collections::HashMap;

use super::super::values::{ExamResult, LanguageCertificate};

pub const BASE_POINT_CAP: u32 = 400;
pub const BONUS_POINT_CAP: u32 = 100;
pub const ADVANCED_EXAM_BONUS: u32 = 50;

/// Combines the mandatory and best elective result into base points.
pub trait BasePointCalculator: Send + Sync {
    fn calculate(&self, mandatory: &ExamResult, best_elective: &ExamResult) -> u32;
}

/// Combines advanced-level exams and language certificates into bonus points.
pub trait BonusPointCalculator: Send + Sync {
    fn calculate(&self, exam_results: &[ExamResult], certificates: &[LanguageCertificate]) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBasePoints;

impl BasePointCalculator for StandardBasePoints {
    fn calculate(&self, mandatory: &ExamResult, best_elective: &ExamResult) -> u32 {
        ((mandatory.points() + best_elective.points()) * 2).min(BASE_POINT_CAP)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBonusPoints;

impl BonusPointCalculator for StandardBonusPoints {
    fn calculate(&self, exam_results: &[ExamResult], certificates: &[LanguageCertificate]) -> u32 {
        let advanced_points: u32 = exam_results
            .iter()
            .filter(|result| result.is_advanced_level())
            .map(|_| ADVANCED_EXAM_BONUS)
            .sum();

        // Only the best certificate per language counts; languages match byte for byte.
        let mut best_per_language: HashMap<&str, u32> = HashMap::new();
        for certificate in certificates {
            let entry = best_per_language.entry(certificate.language()).or_insert(0);
            *entry = (*entry).max(certificate.points());
        }
        let certificate_points: u32 = best_per_language.values().sum();

        (advanced_points + certificate_points).min(BONUS_POINT_CAP)
    }
}
