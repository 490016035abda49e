use anyhow::Result;
use crossterm::style::Stylize;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use word_scramble::{
    app::App,
    dictionary::DictionaryOracle,
    game::ScoreStyle,
    models::SessionSnapshot,
    notify::NotificationSink,
    utils::letters::letter_count,
};

const RESTART_COMMAND: &str = ":restart";
const QUIT_COMMAND: &str = ":quit";

/// Prints rejections as a modal notice; the next line the player enters only
/// dismisses it.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    awaiting_dismissal: bool,
}

impl TerminalNotifier {
    /// Returns true (and clears the flag) if a notice is still on screen
    pub fn dismiss(&mut self) -> bool {
        std::mem::take(&mut self.awaiting_dismissal)
    }
}

impl NotificationSink for TerminalNotifier {
    fn report_error(&mut self, title: &str, message: &str) {
        println!();
        println!("  {}", title.bold().yellow());
        println!("  {}", message);
        println!("  {}", "[press Enter to continue]".dim());
        self.awaiting_dismissal = true;
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Restart,
    Quit,
    Word(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            RESTART_COMMAND => Self::Restart,
            QUIT_COMMAND => Self::Quit,
            _ => Self::Word(line),
        }
    }
}

/// Draw the root word, the score and the words found so far
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut screen = String::new();

    screen.push_str(&format!("\n{}\n", snapshot.root_word.as_str().bold()));

    let score = format!("Score: {}", snapshot.score);
    let score = match snapshot.score_style {
        ScoreStyle::Positive => score.green(),
        ScoreStyle::Negative => score.red(),
    };
    screen.push_str(&format!("{}\n", score));

    for word in &snapshot.used_words {
        screen.push_str(&format!("  ({}) {}\n", letter_count(word), word));
    }

    let prompt = format!(
        "Enter your word ({} for a new word, {} to leave)",
        RESTART_COMMAND, QUIT_COMMAND
    );
    screen.push_str(&prompt.dim().to_string());

    screen
}

/// Read player input line by line until `:quit` or end of input
pub async fn run<O, R>(mut app: App<O, TerminalNotifier, R>) -> Result<()>
where
    O: DictionaryOracle,
    R: Rng,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", render(&app.snapshot()));

    while let Some(line) = lines.next_line().await? {
        if app.sink_mut().dismiss() {
            println!("{}", render(&app.snapshot()));
            continue;
        }

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Restart => app.restart()?,
            Command::Word(text) => {
                app.submit(text);
                if app.sink().awaiting_dismissal {
                    continue;
                }
            }
        }

        let snapshot = app.snapshot();
        tracing::debug!("State: {}", serde_json::to_string(&snapshot)?);
        println!("{}", render(&snapshot));
    }

    tracing::info!("Leaving with score {}", app.session().score());
    Ok(())
}
