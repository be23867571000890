pub mod api;
pub mod guard;
pub mod session;
pub mod storage;
