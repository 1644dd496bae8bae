pub mod catalog;
pub mod session;

pub use catalog::{CatalogService, CatalogState};
pub use session::GameSessionController;
