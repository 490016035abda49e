// Word-validation rule engine

pub mod rules;
pub mod scorer;
pub mod session;
pub mod validator;

pub use rules::{CheckOrder, RejectionReason, RestartScope, RuleSet, Variant};
pub use scorer::{ScoreStyle, Scorer};
pub use session::GameSession;
pub use validator::WordValidator;
