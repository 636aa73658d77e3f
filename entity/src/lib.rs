pub mod catway;
pub mod reservation;
pub mod user;

pub mod prelude;
