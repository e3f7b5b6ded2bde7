mod task;

pub use task::{NO_DESCRIPTION, Priority, Task};
