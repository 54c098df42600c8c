use clap::{Parser, Subcommand};
use std::collections::HashMap;

use quiz_app::client::{FrontendApp, LeaderboardFeed, QuizClient};
use quiz_app::config::schema::DEFAULT_BASE_URL;
use quiz_app::http::messages::ServerEvent;
use quiz_app::routing::RouteTable;

#[derive(Parser)]
#[command(name = "quiz-cli")]
#[command(about = "Play a live quiz from the terminal", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:9090")]
    url: String,

    /// Base path the frontend is mounted under.
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register for a quiz
    Join { participant: String, quiz: String },
    /// Join, then list the quiz's questions
    Questions {
        participant: String,
        quiz: String,
        /// Participant is already registered; skip the join
        #[arg(long)]
        joined: bool,
    },
    /// Submit answers as QUESTION=OPTION pairs (participant must already be registered)
    Answer {
        participant: String,
        quiz: String,
        #[arg(required = true, value_parser = parse_answer)]
        answers: Vec<(String, String)>,
    },
    /// Print leaderboard updates as they arrive
    Leaderboard,
    /// Show which view a path resolves to
    Resolve { path: String },
}

fn parse_answer(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .ok_or_else(|| format!("expected QUESTION=OPTION, got {:?}", s))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let api = QuizClient::new(&cli.url)?;

    match cli.command {
        Commands::Join { participant, quiz } => {
            let mut app = FrontendApp::new(api, &cli.base);
            let joined = app.join(&participant, &quiz).await?.clone();
            println!("{}", serde_json::to_string_pretty(&joined)?);
            println!("now at {} ({})", app.history().location(), app.current().view_name());
        }
        Commands::Questions {
            participant,
            quiz,
            joined,
        } => {
            let questions = if joined {
                api.questions(&participant, &quiz).await?
            } else {
                let mut app = FrontendApp::new(api, &cli.base);
                app.join(&participant, &quiz).await?;
                app.load_questions().await?
            };
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        Commands::Answer {
            participant,
            quiz,
            answers,
        } => {
            let answers: HashMap<String, String> = answers.into_iter().collect();
            let res = api.submit_answers(&participant, &quiz, answers).await?;
            println!("{}", serde_json::to_string_pretty(&res)?);
        }
        Commands::Leaderboard => {
            let mut feed = LeaderboardFeed::connect(&api.leaderboard_url()?).await?;
            while let Some(event) = feed.next_event().await {
                let ServerEvent::ScoreLeaderboard { quiz_id, data } = event?;
                println!("[{}]", quiz_id);
                for (rank, entry) in data.iter().enumerate() {
                    println!("{:>3}. {:<20} {}", rank + 1, entry.id, entry.score);
                }
            }
        }
        Commands::Resolve { path } => {
            let routes = RouteTable::new(&cli.base);
            println!("{}", routes.resolve(&path).view_name());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_for_joined_participant() {
        let cli = Cli::try_parse_from(["quiz-cli", "questions", "alice", "quiz-01", "--joined"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Questions { joined: true, ref participant, .. } if participant == "alice"
        ));

        let cli = Cli::try_parse_from(["quiz-cli", "questions", "alice", "quiz-01"]).unwrap();
        assert!(matches!(cli.command, Commands::Questions { joined: false, .. }));
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            parse_answer("question-1=Paris"),
            Ok(("question-1".to_string(), "Paris".to_string()))
        );
        assert!(parse_answer("question-1").is_err());
    }
}
