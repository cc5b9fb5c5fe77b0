pub mod schedule;
pub mod scheduler;


pub use schedule::Schedule;
pub use scheduler::{SchedulerConfig, SimpleScheduler};
