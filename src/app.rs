use rand::Rng;

use crate::{
    dictionary::DictionaryOracle,
    error::Result,
    game::{GameSession, RuleSet},
    models::{SessionSnapshot, ValidationOutcome},
    notify::NotificationSink,
    words::WordPool,
};

/// Host-side glue around a `GameSession`: owns the collaborators and the text
/// the player is typing, and routes rejections to the notification sink.
///
/// Every operation takes `&mut self`, so submissions and restarts can never
/// overlap.
pub struct App<O, N, R> {
    pool: WordPool,
    oracle: O,
    sink: N,
    rng: R,
    session: GameSession,
    input: String,
}

impl<O, N, R> App<O, N, R>
where
    O: DictionaryOracle,
    N: NotificationSink,
    R: Rng,
{
    /// Start the first round
    pub fn launch(pool: WordPool, oracle: O, sink: N, rules: RuleSet, mut rng: R) -> Result<Self> {
        let session = GameSession::start(&pool, rules, &mut rng)?;

        Ok(Self {
            pool,
            oracle,
            sink,
            rng,
            session,
            input: String::new(),
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit whatever is in the input buffer.
    ///
    /// The buffer is cleared only when the word is accepted.
    pub fn commit(&mut self) -> Option<ValidationOutcome> {
        let outcome = self.session.submit_word(&self.input, &self.oracle)?;

        match &outcome {
            ValidationOutcome::Accepted { .. } => self.input.clear(),
            ValidationOutcome::Rejected { title, message, .. } => {
                self.sink.report_error(title, message);
            }
        }

        Some(outcome)
    }

    /// Type `raw` and commit it in one go
    pub fn submit(&mut self, raw: &str) -> Option<ValidationOutcome> {
        self.set_input(raw);
        self.commit()
    }

    pub fn restart(&mut self) -> Result<()> {
        self.session.restart(&self.pool, &mut self.rng)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }
}
