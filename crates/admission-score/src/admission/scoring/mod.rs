//! The admission scoring pipeline.
//!
//! Checks run in a fixed order and the first failure ends the run:
//! value-object construction, global mandatory subjects, requirement lookup,
//! program mandatory subject, its level, best elective, then the calculators.

mod calculators;
mod rules;

pub use calculators::{
    BasePointCalculator, BonusPointCalculator, StandardBasePoints, StandardBonusPoints,
    ADVANCED_EXAM_BONUS, BASE_POINT_CAP, BONUS_POINT_CAP,
};

use super::domain::Applicant;
use super::error::AdmissionError;
use super::requirements::ProgramRegistry;
use super::values::Score;

/// Stateless scorer; holds only the calculators it delegates to.
#[derive(Debug, Clone, Default)]
pub struct AdmissionScorer<B = StandardBasePoints, N = StandardBonusPoints> {
    base: B,
    bonus: N,
}

impl AdmissionScorer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B, N> AdmissionScorer<B, N>
where
    B: BasePointCalculator,
    N: BonusPointCalculator,
{
    pub fn with_calculators(base: B, bonus: N) -> Self {
        Self { base, bonus }
    }

    pub fn calculate_for_applicant<P>(
        &self,
        applicant: &Applicant,
        registry: &P,
    ) -> Result<Score, AdmissionError>
    where
        P: ProgramRegistry + ?Sized,
    {
        let records = rules::map_records(applicant)?;
        rules::ensure_global_mandatory_subjects(&records.exam_results)?;

        // Resolved only after the program-independent checks so their errors take priority.
        let requirements = registry.find_by_applicant(applicant)?;

        let mandatory = rules::find_program_mandatory(&records.exam_results, &requirements)?;
        rules::ensure_mandatory_level(mandatory, &requirements)?;
        let best_elective = rules::find_best_elective(&records.exam_results, &requirements)?;

        let base_points = self.base.calculate(mandatory, best_elective);
        let bonus_points = self
            .bonus
            .calculate(&records.exam_results, &records.certificates);

        Ok(Score::new(base_points, bonus_points))
    }
}
