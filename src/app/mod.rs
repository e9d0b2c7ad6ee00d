// 应用层：主循环、事件路由和输入处理
pub mod dispatcher;
pub mod handlers;
pub mod router;

pub use dispatcher::Dispatcher;
