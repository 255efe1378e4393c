pub mod question;
pub mod session;
pub mod stats;

pub use question::{Question, QuestionBatch, QuestionSet, QuestionType};
pub use session::GenerationSession;
pub use stats::Stats;
