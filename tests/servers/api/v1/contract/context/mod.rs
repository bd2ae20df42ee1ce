pub mod check;
pub mod credential;
pub mod health_check;
pub mod secret;
