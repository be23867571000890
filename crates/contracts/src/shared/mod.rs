pub mod api_message;
pub mod listing;
