use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use carepath::error::AppError;
use carepath::workflows::diagnosis::{
    AnswerSet, DiagnosisEngine, DiagnosisRecord, DiagnosisService, DiagnosisSubmission,
    LeadDetails, ModelVersion, QuestionId, RawAnswer,
};
use clap::Args;

use crate::infra::{parse_model, InMemoryLeadPublisher};

#[derive(Args, Debug, Default)]
pub(crate) struct DiagnoseArgs {
    /// Scoring model to run (archetype or legacy). Defaults to archetype.
    #[arg(long, value_parser = parse_model)]
    pub(crate) model: Option<ModelVersion>,
    /// Optional JSON file mapping question ids to raw answers.
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Profession tag forwarded with the lead.
    #[arg(long)]
    pub(crate) profession: Option<String>,
    /// Postal code forwarded with the lead.
    #[arg(long)]
    pub(crate) postal_code: Option<String>,
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        model,
        answers,
        profession,
        postal_code,
    } = args;

    let answers = match answers {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let parsed: BTreeMap<u16, RawAnswer> = serde_json::from_str(&raw)?;
            AnswerSet::from(parsed)
        }
        None => sample_answers(),
    };

    let leads = Arc::new(InMemoryLeadPublisher::default());
    let service = DiagnosisService::new(
        DiagnosisEngine::standard(),
        leads.clone(),
        ModelVersion::Archetype,
    );

    let record = service.submit(DiagnosisSubmission {
        answers,
        model,
        lead: LeadDetails {
            profession,
            postal_code,
        },
    })?;

    render_record(&record);

    for alert in leads.events() {
        println!(
            "\nLead forwarded: type {}, profession {}, region {}",
            alert.type_key,
            alert.profession.as_deref().unwrap_or("-"),
            alert.region.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

/// A plausible respondent: curious, people-oriented, steady under stress.
fn sample_answers() -> AnswerSet {
    let scaled: [(u16, i64); 10] = [
        (1, 1),
        (4, 2),
        (5, 1),
        (6, 2),
        (10, 3),
        (11, 2),
        (12, 3),
        (14, 1),
        (16, -1),
        (17, -2),
    ];

    let mut answers = AnswerSet::new();
    for (id, value) in scaled {
        answers.record(QuestionId(id), RawAnswer::Number(value));
    }
    answers.record(QuestionId(19), RawAnswer::Number(0));
    answers.record(QuestionId(20), RawAnswer::Number(0));
    answers.record(QuestionId(21), RawAnswer::Number(0));
    answers.record(QuestionId(22), RawAnswer::Number(3));
    answers.record(QuestionId(23), RawAnswer::Number(2));
    answers.record(QuestionId(24), RawAnswer::Number(2));
    answers.record(QuestionId(26), RawAnswer::Number(2));
    answers
}

fn render_record(record: &DiagnosisRecord) {
    println!("CarePath career diagnosis");
    println!(
        "Model: {} | Type: {} ({})",
        record.model.label(),
        record.profile.title,
        record.type_key
    );
    println!("{}", record.profile.headline);

    for series in &record.deviation_series {
        println!("\nScores ({})", series.name);
        for entry in &series.entries {
            println!(
                "- {}: {:.1} raw, {} on the 20-80 band",
                entry.label, entry.raw_score, entry.deviation_score
            );
        }
    }

    println!("\nStrengths");
    for strength in record.profile.strengths {
        println!("- {strength}");
    }

    println!("\nThrives in");
    for workplace in record.profile.ideal_workplaces {
        println!("- {workplace}");
    }

    println!("\nWatch out for");
    for workplace in record.profile.challenging_workplaces {
        println!("- {workplace}");
    }

    if let Some(stress) = &record.stress {
        println!("\nStress pattern: {} ({})", stress.profile.title, stress.dominant.label());
        for action in stress.profile.coping_actions {
            println!("- {action}");
        }
    }

    println!(
        "\n\"{}\" - {}",
        record.profile.quote, record.profile.figure
    );
}
