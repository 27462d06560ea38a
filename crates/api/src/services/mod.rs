//! Domain services that orchestrate repositories inside transactions.

pub mod reservation_lifecycle;
