pub mod time;

pub use time::current_time;
