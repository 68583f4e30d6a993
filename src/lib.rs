pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notice;
pub mod provider;
pub mod state;
pub mod status;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use provider::{DataProvider, MockProvider};
pub use state::AppState;
