// HTTP routes
pub mod api;
pub mod health;
pub mod pages;

pub use api::*;
pub use health::*;
pub use pages::*;
