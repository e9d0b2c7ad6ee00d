pub mod dispatch_task;
pub mod input_task;
pub mod tick_task;
