pub mod get;
pub mod health;
pub mod login;
pub mod me;
pub mod post;
pub mod signup;
