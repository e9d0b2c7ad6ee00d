// 硬件协作者接口
//
// 节拍源和输入引脚由外部提供，这里只定义调度核心需要的最小接口
use crate::event::InputSource;

#[cfg(test)]
pub mod mock_hw;
#[cfg(test)]
pub mod pin_levels;
pub mod sampled_pins;
pub mod tick_gate;

#[cfg(test)]
pub use mock_hw::*;
#[cfg(test)]
pub use pin_levels::PinLevels;
pub use sampled_pins::SampledPins;
pub use tick_gate::TickGate;

/// 硬件节拍故障
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickFault;

/// 周期节拍源
pub trait TickSource {
    /// 启动周期中断
    fn start(&mut self) -> Result<(), TickFault>;

    /// 停止周期中断
    fn stop(&mut self) -> Result<(), TickFault>;
}

/// 输入引脚电平
pub trait InputPins {
    /// 引脚当前是否处于有效电平（低电平有效）
    fn is_asserted(&self, source: InputSource) -> bool;
}
