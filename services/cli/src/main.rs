mod config;

use crate::config::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nexus_client::NexusClient;
use nexus_client::pcm::wav;
use nexus_client::types::request::OceanQueryPayload;
use nexus_client::types::{ChatMessage, Difficulty, QaPair, RemarkKind, UserDetails};
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoLocal;

#[derive(Parser)]
#[command(version, about = "Run Nexus backend actions from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Short bridge between a past and a current topic
    Recap { past_topic: String, current_topic: String },
    /// Translate an engine result
    Translate {
        humanized: String,
        summary: String,
        target_language: String,
        #[arg(long)]
        deep_dive: Option<String>,
    },
    /// Generate a scenario
    Scenario {
        topic: String,
        grade: String,
        #[arg(long, value_enum, ignore_case = true)]
        difficulty: Option<Difficulty>,
    },
    /// Ask the ocean engine
    Ocean {
        query: String,
        grade: String,
        marks: String,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        syllabus: bool,
    },
    /// Follow up on an earlier query
    DeepDive { original_query: String, context: String },
    /// Synthesise speech, optionally saving it as a WAV file
    Speak {
        text: String,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Founder remark on OCEAN or SCENARIO content
    Remark {
        content: String,
        #[arg(long, value_enum, ignore_case = true, default_value = "ocean")]
        kind: RemarkKind,
    },
    /// Global chat; history is a JSON array of {role, text}
    Chat {
        message: String,
        #[arg(long, default_value = "[]")]
        history: String,
    },
    /// Assessment questions for a JSON user profile
    Questions { details: String },
    /// Build a persona from a JSON profile and JSON [{question, answer}] pairs
    Persona {
        details: String,
        #[arg(long, default_value = "[]")]
        qa_pairs: String,
    },
    /// Talk to a generated persona
    PersonaChat {
        system_instruction: String,
        message: String,
        #[arg(long, default_value = "[]")]
        history: String,
    },
    /// Generate a mission image
    Image { prompt: String },
}

fn parse_json<T: serde::de::DeserializeOwned>(what: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Failed to parse {what} as JSON"))
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load application configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    // --- 3. Parse Command-Line Arguments ---
    let args = Cli::parse();

    let client_config = config.client_config();
    tracing::info!("Using backend {}", client_config.endpoint_url());
    let client = NexusClient::new(client_config);

    match args.command {
        Command::Recap {
            past_topic,
            current_topic,
        } => {
            println!("{}", client.generate_quick_recap(&past_topic, &current_topic).await);
        }
        Command::Translate {
            humanized,
            summary,
            target_language,
            deep_dive,
        } => {
            let result = client
                .translate_engine_result(&humanized, &summary, &target_language, deep_dive.as_deref())
                .await;
            print_json(&serde_json::to_value(result)?)?;
        }
        Command::Scenario {
            topic,
            grade,
            difficulty,
        } => {
            let scenario = client
                .generate_scenario(&topic, &grade, difficulty)
                .await
                .context("Scenario generation failed")?;
            print_json(&scenario)?;
        }
        Command::Ocean {
            query,
            grade,
            marks,
            difficulty,
            syllabus,
        } => {
            let mut payload = OceanQueryPayload::new(&query, &grade, &marks).with_syllabus_mode(syllabus);
            if let Some(difficulty) = difficulty {
                payload = payload.with_difficulty(&difficulty);
            }
            let result = client
                .engine_ocean_query(payload)
                .await
                .context("Ocean query failed")?;
            print_json(&result)?;
        }
        Command::DeepDive {
            original_query,
            context,
        } => {
            println!("{}", client.deep_dive_query(&original_query, &context).await);
        }
        Command::Speak {
            text,
            language,
            out,
        } => match client.generate_speech(&text, language.as_deref()).await {
            Some(buffer) => {
                println!(
                    "{} frames, {} channel(s), {} Hz, {:.2}s",
                    buffer.length(),
                    buffer.number_of_channels(),
                    buffer.sample_rate(),
                    buffer.duration()
                );
                if let Some(path) = out {
                    wav::write_wav(&buffer, &path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                }
            }
            None => tracing::warn!("No speech was produced."),
        },
        Command::Remark { content, kind } => {
            let remark = client.generate_founder_remark(&content, kind).await;
            print_json(&serde_json::to_value(remark)?)?;
        }
        Command::Chat { message, history } => {
            let history: Vec<ChatMessage> = parse_json("history", &history)?;
            let reply = client
                .global_chat_response(&message, &history)
                .await
                .context("Global chat failed")?;
            print_json(&reply)?;
        }
        Command::Questions { details } => {
            let details: UserDetails = parse_json("details", &details)?;
            for question in client.generate_assessment_questions(&details).await {
                println!("{question}");
            }
        }
        Command::Persona { details, qa_pairs } => {
            let details: UserDetails = parse_json("details", &details)?;
            let qa_pairs: Vec<QaPair> = parse_json("Q&A pairs", &qa_pairs)?;
            let persona = client
                .generate_be_you_persona(&details, &qa_pairs)
                .await
                .context("Persona generation failed")?;
            print_json(&persona)?;
        }
        Command::PersonaChat {
            system_instruction,
            message,
            history,
        } => {
            let history: Vec<ChatMessage> = parse_json("history", &history)?;
            println!(
                "{}",
                client
                    .chat_with_persona(&system_instruction, &history, &message)
                    .await
            );
        }
        Command::Image { prompt } => {
            println!("{}", client.generate_mission_image(&prompt).await);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_difficulty_parses_any_case() {
        for raw in ["hard", "HARD", "Hard"] {
            let cli = Cli::try_parse_from(["nexus-cli", "scenario", "tides", "10", "--difficulty", raw])
                .unwrap();
            assert!(matches!(
                cli.command,
                Command::Scenario { difficulty: Some(Difficulty::Hard), .. }
            ));
        }
    }

    #[test]
    fn test_scenario_difficulty_is_optional() {
        let cli = Cli::try_parse_from(["nexus-cli", "scenario", "tides", "10"]).unwrap();
        assert!(matches!(cli.command, Command::Scenario { difficulty: None, .. }));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let result = Cli::try_parse_from(["nexus-cli", "scenario", "tides", "10", "--difficulty", "brutal"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_remark_kind() {
        let cli = Cli::try_parse_from(["nexus-cli", "remark", "some content"]).unwrap();
        assert!(matches!(cli.command, Command::Remark { kind: RemarkKind::Ocean, .. }));

        let cli = Cli::try_parse_from(["nexus-cli", "remark", "some content", "--kind", "SCENARIO"])
            .unwrap();
        assert!(matches!(cli.command, Command::Remark { kind: RemarkKind::Scenario, .. }));
    }
}
