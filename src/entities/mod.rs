pub mod destination;
pub mod hotel;
pub mod review;
pub mod room;
pub mod user;
