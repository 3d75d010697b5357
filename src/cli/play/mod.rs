//! Play command - drives the scoreboard from line commands
//!
//! Supported commands, one per line:
//!
//! ```text
//! start <home> <away>
//! update <match-id> <home-score> <away-score>
//! finish <match-id>
//! summary
//! teams
//! quit
//! ```
//!
//! Team names containing spaces can be double-quoted. Blank lines and lines
//! starting with `#` are ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Args;
use thiserror::Error;
use tracing::{debug, info};

use super::{bootstrap, render_summary, OutputArgs, OutputFormat};
use crate::domain::{Match, MatchId};
use crate::infrastructure::services::ScoreboardServiceTrait;

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Script file with one command per line (defaults to stdin)
    #[arg(long)]
    pub script: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// A parsed scoreboard command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Start { home: String, away: String },
    Update { id: String, home_score: i32, away_score: i32 },
    Finish { id: String },
    Summary,
    Teams,
    Quit,
}

/// Errors produced while parsing a command line
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid score '{0}'")]
    InvalidScore(String),

    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Run the play command
pub async fn run(args: PlayArgs) -> anyhow::Result<()> {
    let service = bootstrap().await?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match &args.script {
        Some(path) => {
            info!(script = %path.display(), "Running script");
            let reader = BufReader::new(File::open(path)?);
            run_script(service.as_ref(), reader, &mut writer, args.output.format).await
        }
        None => {
            let stdin = io::stdin();
            run_script(service.as_ref(), stdin.lock(), &mut writer, args.output.format).await
        }
    }
}

/// Execute every command read from `reader`, writing results to `writer`.
///
/// Command failures are reported inline and do not stop the script.
pub async fn run_script<R: BufRead, W: Write>(
    service: &dyn ScoreboardServiceTrait,
    reader: R,
    writer: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(writer, "error: {}", e)?;
                continue;
            }
        };

        if command == PlayCommand::Quit {
            debug!("Quit requested");
            break;
        }

        match execute(service, command, format).await {
            Ok(output) => write!(writer, "{}", output)?,
            Err(e) => writeln!(writer, "error: {}", e)?,
        }
    }

    writer.flush()?;
    Ok(())
}

/// Parse one line into a command. Blank and comment lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<PlayCommand>, CommandParseError> {
    let tokens = tokenize(line)?;

    let Some((name, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    if name.starts_with('#') {
        return Ok(None);
    }

    let command = match (name.as_str(), rest) {
        ("start", [home, away]) => PlayCommand::Start {
            home: home.clone(),
            away: away.clone(),
        },
        ("start", _) => return Err(CommandParseError::Usage("start <home> <away>")),
        ("update", [id, home, away]) => PlayCommand::Update {
            id: id.clone(),
            home_score: parse_score(home)?,
            away_score: parse_score(away)?,
        },
        ("update", _) => {
            return Err(CommandParseError::Usage(
                "update <match-id> <home-score> <away-score>",
            ))
        }
        ("finish", [id]) => PlayCommand::Finish { id: id.clone() },
        ("finish", _) => return Err(CommandParseError::Usage("finish <match-id>")),
        ("summary", []) => PlayCommand::Summary,
        ("teams", []) => PlayCommand::Teams,
        ("quit" | "exit", []) => PlayCommand::Quit,
        (other, _) => return Err(CommandParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_score(value: &str) -> Result<i32, CommandParseError> {
    value
        .parse()
        .map_err(|_| CommandParseError::InvalidScore(value.to_string()))
}

/// Split on whitespace, keeping double-quoted sections together
fn tokenize(line: &str) -> Result<Vec<String>, CommandParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(CommandParseError::UnterminatedQuote);
    }

    if !current.is_empty() || quoted {
        tokens.push(current);
    }

    Ok(tokens)
}

async fn execute(
    service: &dyn ScoreboardServiceTrait,
    command: PlayCommand,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match command {
        PlayCommand::Start { home, away } => {
            let game = service.start_match(&home, &away).await?;
            render_match("Started", &game, format)
        }
        PlayCommand::Update {
            id,
            home_score,
            away_score,
        } => {
            let updated = service
                .update_score_by_id(&MatchId::new(id)?, home_score, away_score)
                .await?;
            render_match("Updated", &updated, format)
        }
        PlayCommand::Finish { id } => {
            let finished = service.finish_match_by_id(&MatchId::new(id)?).await?;
            render_match("Finished", &finished, format)
        }
        PlayCommand::Summary => {
            let summary = service.board_summary().await?;
            render_summary(&summary, format)
        }
        PlayCommand::Teams => {
            let teams = service.teams().await?;
            match format {
                OutputFormat::Text => Ok(teams.iter().map(|t| format!("{}\n", t)).collect()),
                OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&teams)?)),
            }
        }
        PlayCommand::Quit => Ok(String::new()),
    }
}

fn render_match(action: &str, game: &Match, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{} {}: {}\n", action, game.id(), game)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(game)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::services::ScoreboardService;

    async fn create_service(teams: &[&str]) -> ScoreboardService<
        crate::infrastructure::board::InMemoryMatchRepository,
        crate::infrastructure::team::InMemoryTeamRepository,
    > {
        let service = ScoreboardService::in_memory();
        for team in teams {
            service.register_team(team).await.unwrap();
        }
        service
    }

    async fn run_text(service: &dyn ScoreboardServiceTrait, script: &str) -> String {
        let mut output = Vec::new();
        run_script(service, script.as_bytes(), &mut output, OutputFormat::Text)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line("start Mexico Canada").unwrap(),
            Some(PlayCommand::Start {
                home: "Mexico".to_string(),
                away: "Canada".to_string()
            })
        );
        assert_eq!(
            parse_line("  update match-x 1 -1 ").unwrap(),
            Some(PlayCommand::Update {
                id: "match-x".to_string(),
                home_score: 1,
                away_score: -1
            })
        );
        assert_eq!(
            parse_line("finish match-x").unwrap(),
            Some(PlayCommand::Finish {
                id: "match-x".to_string()
            })
        );
        assert_eq!(parse_line("summary").unwrap(), Some(PlayCommand::Summary));
        assert_eq!(parse_line("teams").unwrap(), Some(PlayCommand::Teams));
        assert_eq!(parse_line("exit").unwrap(), Some(PlayCommand::Quit));
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# opening round").unwrap(), None);
    }

    #[test]
    fn test_parse_quoted_team_names() {
        assert_eq!(
            parse_line(r#"start "Costa Rica" "South Korea""#).unwrap(),
            Some(PlayCommand::Start {
                home: "Costa Rica".to_string(),
                away: "South Korea".to_string()
            })
        );
        assert_eq!(
            parse_line(r#"start "" England"#).unwrap(),
            Some(PlayCommand::Start {
                home: String::new(),
                away: "England".to_string()
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("kickoff Mexico Canada"),
            Err(CommandParseError::Unknown("kickoff".to_string()))
        );
        assert_eq!(
            parse_line("start Mexico"),
            Err(CommandParseError::Usage("start <home> <away>"))
        );
        assert_eq!(
            parse_line("update match-x one 0"),
            Err(CommandParseError::InvalidScore("one".to_string()))
        );
        assert_eq!(
            parse_line(r#"start "Costa Rica Mexico"#),
            Err(CommandParseError::UnterminatedQuote)
        );
    }

    #[tokio::test]
    async fn test_script_full_flow() {
        let service = create_service(&["Mexico", "Canada", "Spain", "Brazil"]).await;

        let output = run_text(&service, "start Mexico Canada\nstart Spain Brazil\n").await;
        assert_eq!(output.lines().count(), 2);

        let games = service.board_summary().await.unwrap();
        let spain = games
            .iter()
            .find(|g| g.home_team().name() == "Spain")
            .unwrap();
        let mexico = games
            .iter()
            .find(|g| g.home_team().name() == "Mexico")
            .unwrap();

        let script = format!(
            "update {} 10 2\nupdate {} 0 5\nfinish {}\nsummary\n",
            spain.id(),
            mexico.id(),
            mexico.id()
        );
        let output = run_text(&service, &script).await;

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], format!("Updated {}: Spain 10 - Brazil 2", spain.id()));
        assert_eq!(lines[1], format!("Updated {}: Mexico 0 - Canada 5", mexico.id()));
        assert_eq!(lines[2], format!("Finished {}: Mexico 0 - Canada 5", mexico.id()));
        assert_eq!(lines[3], "1. Spain 10 - Brazil 2");
        assert_eq!(lines.len(), 4);
    }

    #[tokio::test]
    async fn test_script_reports_errors_and_continues() {
        let service = create_service(&["Brazil", "England"]).await;

        let script = "summary\nstart \"\" England\nstart Brazil England\nbogus\nteams\n";
        let output = run_text(&service, script).await;

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "error: Currently there are not any games in the board."
        );
        assert_eq!(
            lines[1],
            "error: The 'homeTeamName' must be non empty and not null."
        );
        assert!(lines[2].starts_with("Started match-"));
        assert_eq!(lines[3], "error: unknown command 'bogus'");
        assert_eq!(&lines[4..], ["Brazil", "England"]);
    }

    #[tokio::test]
    async fn test_script_rejects_unknown_and_malformed_ids() {
        let service = create_service(&[]).await;
        let unknown = MatchId::generate();

        let script = format!(
            "finish not-an-id\nfinish {}\nupdate {} -1 0\n",
            unknown, unknown
        );
        let output = run_text(&service, &script).await;

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("error: Invalid match ID 'not-an-id'"));
        assert_eq!(
            lines[1],
            "error: Currently there are not any games in the board."
        );
        assert_eq!(
            lines[2],
            "error: The score must be greater or equal than 0 (zero)."
        );
    }

    #[tokio::test]
    async fn test_script_unknown_id_on_busy_board() {
        let service = create_service(&["Brazil", "England"]).await;
        service.start_match("Brazil", "England").await.unwrap();
        let unknown = MatchId::generate();

        let script = format!("finish {}\nupdate {} 1 0\n", unknown, unknown);
        let output = run_text(&service, &script).await;

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "error: The game could not be found in the board.");
        assert_eq!(lines[1], "error: The game could not be found in the board.");
        assert_eq!(service.board_summary().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_script_stops_at_quit() {
        let service = create_service(&["Brazil", "England"]).await;

        let output = run_text(&service, "quit\nstart Brazil England\n").await;

        assert!(output.is_empty());
        assert!(service.board_summary().await.is_err());
    }

    #[tokio::test]
    async fn test_script_json_output() {
        let service = create_service(&["Brazil", "England"]).await;
        let mut output = Vec::new();

        run_script(
            &service,
            "start Brazil England\n".as_bytes(),
            &mut output,
            OutputFormat::Json,
        )
        .await
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["home_team"]["name"], "Brazil");
        assert_eq!(parsed["home_score"], 0);
    }
}
