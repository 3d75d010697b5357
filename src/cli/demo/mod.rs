//! Demo command - plays the reference matches and prints the summary

use tracing::info;

use super::{bootstrap, render_summary, OutputArgs};
use crate::infrastructure::services::ScoreboardServiceTrait;

/// Reference matches with their final scores
pub const DEMO_MATCHES: [(&str, &str, i32, i32); 5] = [
    ("Mexico", "Canada", 0, 5),
    ("Spain", "Brazil", 10, 2),
    ("Germany", "France", 2, 2),
    ("Uruguay", "Italy", 6, 6),
    ("Argentina", "Australia", 3, 1),
];

/// Run the demo against a freshly bootstrapped scoreboard
pub async fn run(args: OutputArgs) -> anyhow::Result<()> {
    let service = bootstrap().await?;
    let output = play_demo(service.as_ref(), &args).await?;

    print!("{}", output);
    Ok(())
}

/// Start and score the reference matches, returning the rendered summary
pub async fn play_demo(
    service: &dyn ScoreboardServiceTrait,
    args: &OutputArgs,
) -> anyhow::Result<String> {
    for (home, away, home_score, away_score) in DEMO_MATCHES {
        let game = service.start_match(home, away).await?;
        service
            .update_score(Some(&game), home_score, away_score)
            .await?;
    }

    let summary = service.board_summary().await?;
    info!(matches = summary.len(), "Demo finished");

    render_summary(&summary, args.format)
}
