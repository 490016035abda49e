pub mod outcome;
pub mod session;

pub use outcome::ValidationOutcome;
pub use session::SessionSnapshot;
