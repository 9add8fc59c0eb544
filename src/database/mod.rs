pub mod admin_repository;
pub mod manager;
pub mod phrase_repository;

pub use admin_repository::{AdminRepository, PgAdminRepository};
pub use manager::{DatabaseError, DatabaseManager};
pub use phrase_repository::{PgPhrasesRepository, PhrasesRepository};
