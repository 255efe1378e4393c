pub mod deletion;
pub mod generation;
pub mod listing;
pub mod notifier;
pub mod persistence;
pub mod stats_service;

pub use deletion::DeletionController;
pub use generation::GenerationController;
pub use listing::ListingCache;
pub use notifier::{NotificationPort, SessionNotifier, Severity};
pub use persistence::PersistenceGate;
pub use stats_service::StatsController;
