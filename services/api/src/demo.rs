use crate::infra::{demo_programs, InMemoryAdmissionRepository};
use admission_score::admission::{
    admission_error_payload, parse_applicant_records_from_path, AdmissionError, AdmissionScorer,
    AdmissionScoringService, Applicant, ApplicantId, ProgramCatalog, ProgramId, Score,
    ScoringServiceError,
};
use admission_score::error::AppError;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Identifier of a seeded applicant
    pub(crate) applicant_id: String,
    /// Print the HTTP response payload instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreFileArgs {
    /// Program the applicant applied to (see `applicants` for the seeded ids)
    #[arg(long)]
    pub(crate) program: String,
    /// CSV with header `kind,subject,level,percentage,certificate_type,language`
    pub(crate) path: PathBuf,
    /// Print the HTTP response payload instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_applicants() -> Result<(), AppError> {
    let service = seeded_service();
    let summaries = service.list()?;

    println!("Seeded applicants");
    for summary in summaries {
        println!(
            "- {}: {} {} {}",
            summary.id.0, summary.program.university, summary.program.faculty, summary.program.name
        );
    }
    println!("\nPrograms");
    for program in demo_programs() {
        println!("- {} ({} {} {})", program.id.0, program.university, program.faculty, program.name);
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { applicant_id, json } = args;
    let service = seeded_service();

    let outcome = service.score(&ApplicantId(applicant_id.clone()));
    match outcome {
        Ok(score) => {
            render_score(&applicant_id, &score, json);
            Ok(())
        }
        Err(ScoringServiceError::Admission(err)) => {
            render_rejection(&applicant_id, &err, json);
            Err(ScoringServiceError::Admission(err).into())
        }
        Err(other) => Err(other.into()),
    }
}

pub(crate) fn run_score_file(args: ScoreFileArgs) -> Result<(), AppError> {
    let ScoreFileArgs {
        program,
        path,
        json,
    } = args;

    let applicant = load_applicant(&path, program)?;
    let label = path.display().to_string();
    let catalog = ProgramCatalog::new(demo_programs());

    match AdmissionScorer::new().calculate_for_applicant(&applicant, &catalog) {
        Ok(score) => {
            render_score(&label, &score, json);
            Ok(())
        }
        Err(err) => {
            render_rejection(&label, &err, json);
            Err(ScoringServiceError::Admission(err).into())
        }
    }
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let repository = InMemoryAdmissionRepository::seeded();
    let scorer = AdmissionScorer::new();

    println!("Admission scoring demo");
    for applicant in repository.applicants_snapshot() {
        match scorer.calculate_for_applicant(applicant, repository.catalog()) {
            Ok(score) => render_score(&applicant.id.0, &score, false),
            Err(err) => render_rejection(&applicant.id.0, &err, false),
        }
    }
    Ok(())
}

fn seeded_service() -> AdmissionScoringService<InMemoryAdmissionRepository> {
    AdmissionScoringService::new(Arc::new(InMemoryAdmissionRepository::seeded()))
}

pub(crate) fn load_applicant(path: &Path, program: String) -> Result<Applicant, AppError> {
    let records = parse_applicant_records_from_path(path)?;
    Ok(Applicant {
        id: ApplicantId(path.display().to_string()),
        program_id: ProgramId(program),
        exam_results: records.exam_results,
        bonus_points: records.bonus_points,
    })
}

fn render_score(label: &str, score: &Score, json: bool) {
    if json {
        let payload = serde_json::json!({ "data": score.view() });
        println!("{payload}");
        return;
    }
    println!(
        "- {label}: {} points ({} base + {} bonus)",
        score.total(),
        score.base_points(),
        score.bonus_points()
    );
}

fn render_rejection(label: &str, err: &AdmissionError, json: bool) {
    if json {
        println!("{}", admission_error_payload(err));
        return;
    }
    println!("- {label}: rejected ({}): {err}", err.kind());
}
