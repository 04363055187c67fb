pub mod backup;
pub mod days;
pub mod history;
pub mod log;
pub mod metrics;
pub mod registry;
pub mod session;
pub mod store;
pub mod summary;
