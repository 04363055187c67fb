pub mod day;
pub mod head;
pub mod history;
pub mod line;
pub mod record;
pub mod summary;
