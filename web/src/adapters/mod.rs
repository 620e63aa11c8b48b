pub mod axum;
pub mod scope;
pub mod tower;
