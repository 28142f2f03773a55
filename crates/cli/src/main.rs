use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Map, Value};
use triage_core::{ChatMessage, CoreConfig, TriageService};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Rule-based symptom triage CLI")]
struct Cli {
    /// YAML keyword table override (defaults to $TRIAGE_RULES_FILE)
    #[arg(long, global = true)]
    rules_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a symptom intake and print the assessment
    Classify(IntakeArgs),
    /// Reply to a single chat message
    Chat {
        /// Message text
        message: Vec<String>,
    },
    /// List mental-health support resources
    Resources,
}

#[derive(Args, Debug)]
struct IntakeArgs {
    /// Symptom description (repeatable)
    #[arg(long = "symptom", short = 's')]
    symptoms: Vec<String>,
    /// Age in whole years (0-120)
    #[arg(long, allow_negative_numbers = true)]
    age: Option<i64>,
    /// male, female, other or prefer_not_to_say
    #[arg(long)]
    sex: Option<String>,
    /// When the symptoms started
    #[arg(long)]
    onset: Option<String>,
    /// Severity from 1 to 10
    #[arg(long, allow_negative_numbers = true)]
    severity: Option<i64>,
    /// Current medication (repeatable)
    #[arg(long = "medication")]
    medications: Vec<String>,
    /// Existing condition (repeatable)
    #[arg(long = "condition")]
    conditions: Vec<String>,
    /// Force the urgent tier
    #[arg(long)]
    emergency_signs: bool,
    #[arg(long)]
    notes: Option<String>,
    /// Print the full outcome as JSON
    #[arg(long)]
    json: bool,
}

impl IntakeArgs {
    /// Raw submission in wire shape, so the engine's own validation applies.
    fn payload(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("symptoms".into(), json!(self.symptoms));
        obj.insert("medications".into(), json!(self.medications));
        obj.insert("conditions".into(), json!(self.conditions));
        obj.insert("emergency_signs".into(), json!(self.emergency_signs));
        if let Some(age) = self.age {
            obj.insert("age".into(), json!(age));
        }
        if let Some(sex) = &self.sex {
            obj.insert("sex".into(), json!(sex));
        }
        if let Some(onset) = &self.onset {
            obj.insert("onset".into(), json!(onset));
        }
        if let Some(severity) = self.severity {
            obj.insert("severity".into(), json!(severity));
        }
        if let Some(notes) = &self.notes {
            obj.insert("additional_notes".into(), json!(notes));
        }
        Value::Object(obj)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rules_file = cli.rules_file.or_else(|| {
        triage_core::config::rules_file_from_env_value(std::env::var("TRIAGE_RULES_FILE").ok())
    });
    let service = TriageService::new(Arc::new(CoreConfig::resolve(rules_file)?));

    match cli.command {
        Commands::Classify(args) => {
            let outcome = match service.process_intake(&args.payload()) {
                Ok(outcome) => outcome,
                Err(e) => anyhow::bail!("Invalid intake: {e}"),
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.message.content);
            }
        }
        Commands::Chat { message } => {
            let text = message.join(" ");
            let reply = service.compose_chat_reply(&[ChatMessage::user(text)], None);
            println!("{}", reply.content);
        }
        Commands::Resources => {
            for resource in service.mental_health_resources() {
                println!("- {resource}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::{TriageLevel, ValidationErrorKind};

    fn intake_args(argv: &[&str]) -> IntakeArgs {
        let cli = Cli::try_parse_from(argv).expect("parse");
        match cli.command {
            Commands::Classify(args) => args,
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn classify_flags_become_wire_payload() {
        let args = intake_args(&[
            "triage",
            "classify",
            "-s",
            "cough",
            "--symptom",
            "high fever",
            "--severity",
            "6",
            "--emergency-signs",
        ]);
        let payload = args.payload();
        assert_eq!(payload["symptoms"], json!(["cough", "high fever"]));
        assert_eq!(payload["severity"], json!(6));
        assert_eq!(payload["emergency_signs"], json!(true));
        assert!(payload.get("age").is_none());
    }

    #[test]
    fn classify_payload_passes_through_validation() {
        let service = TriageService::default();

        let args = intake_args(&["triage", "classify", "-s", "severe headache"]);
        let outcome = service.process_intake(&args.payload()).expect("outcome");
        assert_eq!(outcome.triage.level, TriageLevel::SeeDoctor);

        let args = intake_args(&["triage", "classify", "-s", "cough", "--severity", "-2"]);
        let err = service.process_intake(&args.payload()).expect_err("severity -2");
        assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn rules_file_flag_is_global() {
        let cli = Cli::try_parse_from(["triage", "resources", "--rules-file", "rules.yaml"])
            .expect("parse");
        assert_eq!(cli.rules_file, Some(PathBuf::from("rules.yaml")));
        assert!(matches!(cli.command, Commands::Resources));
    }
}
