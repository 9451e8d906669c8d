pub mod confirm;
pub mod optimize;
