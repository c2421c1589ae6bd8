use clap::{Parser, Subcommand};
use diagnosify_core::{config::resolve_catalog, CoreConfig, ScoredCondition, SymptomChecker};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "diagnosify")]
#[command(about = "DIAGNOSIFY symptom checker CLI")]
struct Cli {
    /// YAML condition catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank conditions matching the given symptoms
    Predict {
        /// Symptom labels (exact, case-sensitive)
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show advice for the best-matching condition
    Recommend {
        /// Symptom labels (exact, case-sensitive)
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List catalog conditions
    Conditions,
    /// List known symptoms by body system
    Symptoms {
        /// Case-insensitive filter
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let catalog = resolve_catalog(cli.catalog)?;
    let checker = SymptomChecker::new(Arc::new(CoreConfig::new(catalog)));

    match cli.command {
        Some(Commands::Predict { symptoms, json }) => {
            warn_unrecognised(&checker, &symptoms);
            let predictions = checker.predict(&symptoms);
            if json {
                println!("{}", serde_json::to_string_pretty(&predictions)?);
            } else if predictions.is_empty() {
                println!("No conditions matched.");
            } else {
                for line in prediction_lines(&predictions) {
                    println!("{line}");
                }
            }
        }
        Some(Commands::Recommend { symptoms, json }) => {
            warn_unrecognised(&checker, &symptoms);
            let recommendation = checker.recommend(&symptoms);
            if json {
                println!("{}", serde_json::to_string_pretty(&recommendation)?);
            } else {
                match recommendation {
                    Some(top) => {
                        println!("{} ({}%)", top.condition, top.confidence);
                        print_section("Medications", &top.medications);
                        print_section("Diet", &top.diet);
                        print_section("Precautions", &top.precautions);
                    }
                    None => println!("No conditions matched."),
                }
            }
        }
        Some(Commands::Conditions) => {
            for condition in checker.conditions() {
                println!(
                    "{} [{}]: {}",
                    condition.name(),
                    condition.severity(),
                    condition.reference_symptoms().join(", ")
                );
            }
        }
        Some(Commands::Symptoms { search }) => {
            let systems = checker.search_symptoms(search.as_deref());
            if systems.is_empty() {
                println!("No symptoms found.");
            }
            for system in systems {
                println!("{}: {}", system.name, system.symptoms.join(", "));
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn prediction_lines(predictions: &[ScoredCondition]) -> Vec<String> {
    predictions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. {} ({}%, {}): {}",
                i + 1,
                p.name,
                p.confidence,
                p.severity,
                p.description
            )
        })
        .collect()
}

fn warn_unrecognised(checker: &SymptomChecker, symptoms: &[String]) {
    for label in checker.unrecognised(symptoms) {
        eprintln!("warning: '{label}' is not a known symptom (labels are case-sensitive)");
    }
}

fn print_section(title: &str, items: &[String]) {
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use diagnosify_core::Catalog;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_requires_at_least_one_symptom() {
        assert!(Cli::try_parse_from(["diagnosify", "predict"]).is_err());

        let cli = Cli::try_parse_from(["diagnosify", "predict", "Headache", "Runny nose"])
            .expect("parse");
        match cli.command {
            Some(Commands::Predict { symptoms, json }) => {
                assert_eq!(symptoms, vec!["Headache", "Runny nose"]);
                assert!(!json);
            }
            _ => panic!("expected predict command"),
        }
    }

    #[test]
    fn catalog_flag_is_global() {
        let cli = Cli::try_parse_from(["diagnosify", "conditions", "--catalog", "custom.yaml"])
            .expect("parse");
        assert_eq!(cli.catalog, Some(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn prediction_lines_are_numbered_by_rank() {
        let catalog = Catalog::builtin().expect("builtin");
        let predictions = diagnosify_core::predict_conditions(&["Headache"], &catalog);
        let lines = prediction_lines(&predictions);
        assert!(lines[0].starts_with("1. Migraine (76%, moderate)"));
        assert!(lines[2].starts_with("3. Influenza (74%, moderate)"));
    }
}
