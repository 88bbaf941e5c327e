pub mod agent;
pub mod config;
pub mod search;

pub use agent::{choose_action, Agent};
pub use config::{SearchConfig, Strategy};
