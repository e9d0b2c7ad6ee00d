// 投币售货机调度核心
//
// 软件定时器 + 状态机 + 事件标志主循环，与具体芯片无关，可在主机上测试
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod event;
pub mod machine;
pub mod timer;

pub use app::Dispatcher;
pub use config::{Config, TIMER_CAPACITY};
pub use error::{Error, Result};
pub use event::{EventFlags, InputSource};
pub use machine::{MachineInput, MachineStatus, VendingMachine};
pub use timer::{SoftwareTimers, TimerCallbacks, TimerContext, TimerId, TimerKind};
