pub mod auth;
pub mod teknisi;
