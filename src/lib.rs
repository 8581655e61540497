pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod nav;
pub mod page;
pub mod router;
pub mod shell;
pub mod store;
