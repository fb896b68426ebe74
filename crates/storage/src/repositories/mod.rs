pub mod signals_repo;
pub mod subscribers_repo;

pub use signals_repo::SignalRepository;
pub use subscribers_repo::SubscriberRepository;
