pub mod entities;
pub mod errors;
pub mod helpers;
pub mod requests;
