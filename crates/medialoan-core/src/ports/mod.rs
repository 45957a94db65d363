pub mod fleet_repository;
pub mod partner_repository;

pub use fleet_repository::FleetRepository;
pub use partner_repository::PartnerRepository;
