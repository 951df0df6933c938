pub mod audio;
pub mod auth;
pub mod inference;
pub mod observability;
pub mod sink;
