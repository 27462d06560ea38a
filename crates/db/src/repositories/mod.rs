pub mod catalog_repo;
pub mod member_repo;
pub mod reservation_repo;
pub mod waiting_repo;

pub use catalog_repo::{ReservationTimeRepo, ThemeRepo};
pub use member_repo::MemberRepo;
pub use reservation_repo::ReservationRepo;
pub use waiting_repo::WaitingRepo;
