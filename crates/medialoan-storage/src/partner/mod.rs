mod models;
pub mod repository;


pub use repository::SqlitePartnerRepository;
