use crate::infra::parse_score_assignment;
use clap::Args;
use review_rating::config::AppConfig;
use review_rating::error::AppError;
use review_rating::rating::domain::CriterionId;
use review_rating::rating::{
    format_score, RatingChange, RatingEngine, RatingOutcome, RatingService, RatingUpdate,
    ReactiveController, ScorePreset, ScoreSheetImporter, ScoreVector,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RateArgs {
    /// Criterion score as CRITERION=SCORE (repeatable)
    #[arg(long = "score", value_parser = parse_score_assignment)]
    pub(crate) scores: Vec<(CriterionId, f64)>,
    /// Weighting profile (defaults to RATING_DEFAULT_PROFILE)
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Print the full outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SheetArgs {
    /// CSV file with a `review` column and one column per criterion
    pub(crate) path: PathBuf,
    /// Profile for rows that leave the profile column blank
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Print the scored rows as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Profile to start the scripted session with
    #[arg(long)]
    pub(crate) profile: Option<String>,
}

pub(crate) fn run_rate(args: RateArgs) -> Result<(), AppError> {
    let RateArgs {
        scores,
        profile,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = RatingService::new(RatingEngine::shared(), &config.rating);
    let scores: ScoreVector = scores
        .into_iter()
        .map(|(criterion, score)| (criterion.0, score))
        .collect();

    let outcome = service.rate(&scores, profile.as_deref());
    if json {
        print_json(&outcome);
    } else {
        render_outcome(&service, &outcome);
    }

    Ok(())
}

pub(crate) fn run_sheet(args: SheetArgs) -> Result<(), AppError> {
    let SheetArgs {
        path,
        profile,
        json,
    } = args;

    let config = AppConfig::load()?;
    let default_profile = profile.unwrap_or(config.rating.default_profile);
    let engine = RatingEngine::shared();
    let reviews = ScoreSheetImporter::from_path(&path, &engine, &default_profile)?;

    if json {
        print_json(&reviews);
        return Ok(());
    }

    println!("Score sheet: {} ({} reviews)", path.display(), reviews.len());
    for review in &reviews {
        println!(
            "  {:<24} {:>4}  {:<9} profile={}",
            review.review,
            review.outcome.formatted_total(),
            review.outcome.classification.label,
            review.outcome.profile
        );
        for diagnostic in &review.outcome.diagnostics {
            println!("    note: {}", diagnostic);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let profile = args.profile.unwrap_or(config.rating.default_profile);
    let engine = RatingEngine::shared();

    println!("Rating editing session demo");
    let mut session = ReactiveController::new(engine.clone(), profile, None, render_update);

    for (criterion, value) in [
        ("performance", 9.0),
        ("stability", 8.0),
        ("coverage", 7.0),
        ("software", 6.0),
        ("value", 5.0),
    ] {
        println!("\n> {criterion} = {value}");
        session.on_change(RatingChange::Score {
            criterion: criterion.into(),
            value,
        });
    }

    for profile in engine.profiles().list() {
        println!("\n> profile {}", profile.display_name);
        session.on_change(RatingChange::Profile {
            profile: profile.id.to_string(),
        });
    }

    for preset in [ScorePreset::High, ScorePreset::Medium, ScorePreset::Reset] {
        println!("\n> preset {}", preset.label());
        session.on_change(RatingChange::Preset { preset });
    }

    let deviations = engine.unbalanced_profiles(config.rating.weight_sum_tolerance);
    if deviations.is_empty() {
        println!("\nAll profile weights sum to 1");
    } else {
        for deviation in deviations {
            println!(
                "\nProfile {} weights sum to {:.3}",
                deviation.profile, deviation.weight_sum
            );
        }
    }

    Ok(())
}

fn render_update(update: &RatingUpdate) {
    println!(
        "  [{}] {} {} ({})",
        update.profile,
        format_score(update.total),
        update.classification.label,
        update.classification.description
    );
    for diagnostic in &update.diagnostics {
        println!("  note: {}", diagnostic);
    }
}

fn render_outcome(service: &RatingService, outcome: &RatingOutcome) {
    println!(
        "Total: {} / 10 ({})",
        outcome.formatted_total(),
        outcome.profile
    );
    println!(
        "{}: {}",
        outcome.classification.label, outcome.classification.description
    );

    println!("\nCriteria");
    for line in outcome.criterion_breakdown(service.engine().criteria()) {
        println!(
            "  {:<20} {:>4}  weight %{:<3} {:?}",
            line.display_name,
            format_score(line.score),
            line.weight_percent,
            line.band
        );
    }

    if !outcome.diagnostics.is_empty() {
        println!("\nDiagnostics");
        for diagnostic in &outcome.diagnostics {
            println!("  {}", diagnostic);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("JSON output unavailable: {}", err),
    }
}
