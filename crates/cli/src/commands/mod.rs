pub mod providers;
pub mod send;
