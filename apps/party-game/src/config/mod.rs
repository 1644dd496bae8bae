pub mod api;
pub mod locale;
pub mod session;
