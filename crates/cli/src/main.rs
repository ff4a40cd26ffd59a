use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use assessment::{AssessmentAnswers, OfferTier, RuleCascade};
use content_store::{ContentRepository, InMemoryContentStore, Snapshot};
use leads::{submit, InMemoryLeadSink, Lead, SubmissionOutcome};
use nutrition::{
    compute_macros, ActivityLevel, BiometricProfile, Gender, MacroTargets, NutritionGoal,
    ProteinTier,
};

/// CoachKit - coaching-site engines on the command line
#[derive(Parser)]
#[command(name = "coach-kit")]
#[command(about = "Assessment routing and macro calculation engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route assessment answers to a coaching offer
    Assess {
        /// Training goal: strength|physique|fat-loss|pain-free|restarting
        #[arg(long)]
        goal: Option<String>,

        /// Main obstacle: time|stress|travel|pain|overwhelm
        #[arg(long)]
        constraint: Option<String>,

        /// Weekly sessions: two|three|four|five-plus|varies
        #[arg(long)]
        frequency: Option<String>,

        /// Training environment: gym|home|hotel|mixed
        #[arg(long)]
        environment: Option<String>,

        /// Reported injury: none|shoulder|back|knee|other
        #[arg(long)]
        injury: Option<String>,

        /// Support preference: execute|accountable|coached
        #[arg(long)]
        support: Option<String>,

        /// Show which rule decided the recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Compute daily calorie and macro targets
    Macros {
        /// male or female
        #[arg(long)]
        gender: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Current body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Goal body weight in kilograms (defaults to current weight)
        #[arg(long)]
        target_weight: Option<f64>,

        /// Activity multiplier: 1.2|1.375|1.55|1.725|1.9
        #[arg(long, default_value = "1.375")]
        activity: f64,

        /// Calorie goal: maintenance|gain|recomp
        #[arg(long, default_value = "maintenance")]
        goal: String,

        /// Protein target in g/kg of goal weight: 1.0|1.5|2.0
        #[arg(long, default_value = "1.5")]
        protein_tier: f64,

        /// Alcoholic drinks per week (0-15)
        #[arg(long, default_value = "0")]
        drinks: u32,
    },

    /// Validate and submit a lead
    Lead {
        /// Prospect name
        #[arg(long)]
        name: String,

        /// Prospect email
        #[arg(long)]
        email: String,

        /// Free-text message
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Inspect or edit a content snapshot file
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },
}

#[derive(Subcommand)]
enum ContentCommands {
    /// Print the document stored under a key
    Get {
        /// Path to the snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        /// Content key (e.g. posts, page-images)
        #[arg(long)]
        key: String,
    },

    /// Store a JSON document under a key and write the snapshot back
    Set {
        /// Path to the snapshot JSON file (created if missing)
        #[arg(long)]
        snapshot: PathBuf,

        /// Content key
        #[arg(long)]
        key: String,

        /// JSON value to store
        #[arg(long)]
        value: String,
    },

    /// Print the whole snapshot as pretty JSON
    Export {
        /// Path to the snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// List the keys in a snapshot
    Keys {
        /// Path to the snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Assess {
            goal,
            constraint,
            frequency,
            environment,
            injury,
            support,
            explain,
        } => {
            let answers = AssessmentAnswers {
                goal: parse_answer(&goal)?,
                constraint: parse_answer(&constraint)?,
                frequency: parse_answer(&frequency)?,
                environment: parse_answer(&environment)?,
                injury: parse_answer(&injury)?,
                support: parse_answer(&support)?,
            };
            handle_assess(&answers, explain);
        }
        Commands::Macros {
            gender,
            age,
            height,
            weight,
            target_weight,
            activity,
            goal,
            protein_tier,
            drinks,
        } => {
            let profile = BiometricProfile {
                gender: parse_gender(&gender)?,
                age,
                height_cm: height,
                weight_kg: weight,
                target_weight_kg: target_weight.unwrap_or(weight),
                activity: ActivityLevel::from_factor(activity)
                    .ok_or_else(|| anyhow!("Unrecognized activity multiplier: {activity}"))?,
                goal: parse_nutrition_goal(&goal)?,
                protein_tier: ProteinTier::from_grams_per_kg(protein_tier)
                    .ok_or_else(|| anyhow!("Unrecognized protein tier: {protein_tier}"))?,
                weekly_alcohol_drinks: drinks,
            };
            handle_macros(&profile);
        }
        Commands::Lead {
            name,
            email,
            message,
        } => handle_lead(Lead::new(name, email, message)).await?,
        Commands::Content { command } => handle_content(command)?,
    }

    Ok(())
}

/// Parse an optional answer flag into its enum, leaving unset flags unset.
fn parse_answer<T>(value: &Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(Into::into)
}

fn parse_gender(value: &str) -> Result<Gender> {
    match value.to_ascii_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        other => Err(anyhow!("Unrecognized gender: {other} (male|female)")),
    }
}

fn parse_nutrition_goal(value: &str) -> Result<NutritionGoal> {
    match value.to_ascii_lowercase().as_str() {
        "maintenance" => Ok(NutritionGoal::Maintenance),
        "gain" => Ok(NutritionGoal::Gain),
        "recomp" => Ok(NutritionGoal::Recomp),
        other => Err(anyhow!(
            "Unrecognized goal: {other} (maintenance|gain|recomp)"
        )),
    }
}

/// Handle the 'assess' command
fn handle_assess(answers: &AssessmentAnswers, explain: bool) {
    let cascade = RuleCascade::standard();
    let (tier, rule) = cascade.evaluate_explained(answers);

    println!("{}", "Assessment result:".bold().blue());
    let tier_label = match tier {
        OfferTier::Reset => tier.to_string().cyan(),
        OfferTier::Online => tier.to_string().green(),
        OfferTier::Hybrid => tier.to_string().yellow(),
    };
    println!("  Recommended offer: {}", tier_label.bold());

    if !answers.is_complete() {
        println!(
            "  {}",
            "(questionnaire incomplete, unanswered questions were skipped)".dimmed()
        );
    }

    if explain {
        match rule {
            Some(name) => println!("  Decided by: {name}"),
            None => println!("  Decided by: default fallback (no rule matched)"),
        }
    }
}

/// Handle the 'macros' command
fn handle_macros(profile: &BiometricProfile) {
    let result = compute_macros(profile);
    let targets = result.rounded();

    println!("{}", "Daily targets:".bold().blue());
    println!("  BMR:   {} kcal", targets.bmr);
    println!("  TDEE:  {} kcal", targets.tdee);
    println!("  Total: {} kcal", targets.total_calories.to_string().bold());
    if targets.daily_alcohol_calories > 0 {
        println!(
            "  Alcohol budget: {} kcal/day",
            targets.daily_alcohol_calories
        );
    }

    println!("{}", "Macros:".bold().blue());
    print_macro_bar("Protein", targets.protein_g, targets.protein_calories, &targets);
    print_macro_bar("Fat", targets.fat_g, targets.fat_calories, &targets);
    print_macro_bar("Carbs", targets.carb_g, targets.carb_calories, &targets);

    if !result.achievable {
        println!(
            "{}",
            "Warning: protein and alcohol exceed the calorie budget; fat was clamped to zero. \
             Lower the protein tier, the alcohol budget, or the target weight."
                .red()
        );
    }
}

/// Render one macro line with a simple proportional bar.
fn print_macro_bar(label: &str, grams: i64, calories: i64, targets: &MacroTargets) {
    const BAR_WIDTH: f64 = 30.0;
    let total = targets.total_calories.max(1);
    let filled = (calories as f64 / total as f64 * BAR_WIDTH).round() as usize;
    let bar = "#".repeat(filled.min(BAR_WIDTH as usize));

    println!(
        "  {:<8} {:>4} g {:>5} kcal  {}",
        label,
        grams,
        calories,
        bar.green()
    );
}

/// Handle the 'lead' command
async fn handle_lead(lead: Lead) -> Result<()> {
    let sink = InMemoryLeadSink::new();

    match submit(&sink, lead).await {
        Ok(SubmissionOutcome::Accepted { reference }) => {
            println!("{} Lead accepted (reference {})", "✓".green(), reference);
        }
        Ok(SubmissionOutcome::Rejected { reason }) => {
            println!("{} Lead rejected: {}", "✗".red(), reason);
        }
        Err(err) => {
            println!("{} Lead not submitted: {}", "✗".red(), err);
        }
    }
    Ok(())
}

/// Handle the 'content' command
fn handle_content(command: ContentCommands) -> Result<()> {
    match command {
        ContentCommands::Get { snapshot, key } => {
            let store = load_store(&snapshot)?;
            let value = store.try_get(&key)?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ContentCommands::Set {
            snapshot,
            key,
            value,
        } => {
            let mut store = if snapshot.exists() {
                load_store(&snapshot)?
            } else {
                InMemoryContentStore::new()
            };
            let value: serde_json::Value =
                serde_json::from_str(&value).context("Value is not valid JSON")?;

            store.set(&key, value);
            save_store(&store, &snapshot)?;
            println!("{} Stored '{}' in {}", "✓".green(), key, snapshot.display());
        }
        ContentCommands::Export { snapshot } => {
            let store = load_store(&snapshot)?;
            println!("{}", store.export_snapshot().to_json_pretty()?);
        }
        ContentCommands::Keys { snapshot } => {
            let store = load_store(&snapshot)?;
            println!("{}", "Snapshot keys:".bold().blue());
            let exported = store.export_snapshot();
            let mut keys: Vec<_> = exported.entries.keys().collect();
            keys.sort();
            for key in keys {
                println!("  - {key}");
            }
        }
    }
    Ok(())
}

fn load_store(path: &Path) -> Result<InMemoryContentStore> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot = Snapshot::from_json(&text)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    Ok(InMemoryContentStore::from_snapshot(snapshot))
}

fn save_store(store: &InMemoryContentStore, path: &Path) -> Result<()> {
    let text = store.export_snapshot().to_json_pretty()?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_content_export_parses() {
        let cli = Cli::try_parse_from([
            "coach-kit", "content", "export", "--snapshot", "site.json",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Content {
                command: ContentCommands::Export { .. }
            }
        ));
    }

    #[test]
    fn test_assess_accepts_partial_answers() {
        let cli = Cli::try_parse_from(["coach-kit", "assess", "--support", "coached"]).unwrap();

        match cli.command {
            Commands::Assess { support, goal, .. } => {
                assert_eq!(support.as_deref(), Some("coached"));
                assert!(goal.is_none());
            }
            _ => panic!("expected assess command"),
        }
    }
}
