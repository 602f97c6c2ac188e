// Public API
pub use errors::SessionError;
pub use models::{Round, SessionModel, SessionSettings};
pub use repository::{InMemorySessionRepository, SessionRepository};
pub use service::SessionService;

// Internal modules
mod errors;
mod models;
mod repository;
mod service;
