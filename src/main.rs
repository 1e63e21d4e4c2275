use log::info;
use maths_quiz_skill::config::Config;
use maths_quiz_skill::quiz::arithmetic::RandomPicker;
use maths_quiz_skill::skill::MathsQuizSkill;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> HandlerResult {
    pretty_env_logger::init();

    let config = Config::from_env()?;
    info!(
        "Starting maths quiz skill with {} questions per quiz...",
        config.max_questions
    );

    let mut skill = MathsQuizSkill::new(&config, RandomPicker::from_thread_rng());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let output = skill.handle_line(&line);
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("Input closed, shutting down");
    Ok(())
}
