// 事件系统
//
// 消抖定时器到期（中断上下文）置位，主循环处理后清除

use core::sync::atomic::{AtomicU32, Ordering};

/// 输入源，同时也是待处理事件掩码中的位号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InputSource {
    /// 投币传感器
    CoinSensor = 0,
    /// 出货按钮
    DispenseButton = 1,
}

impl InputSource {
    /// 输入源数量
    pub const COUNT: usize = 2;

    /// 按位号升序排列
    pub const ALL: [InputSource; Self::COUNT] = [InputSource::CoinSensor, InputSource::DispenseButton];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn mask(self) -> u32 {
        1u32 << (self as u8)
    }
}

/// 待处理事件标志
///
/// 每个输入源占一位，重复到期会合并为一次。
pub struct EventFlags {
    bits: AtomicU32,
}

impl EventFlags {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU32::new(0),
        }
    }

    /// 置位（中断上下文调用）
    pub fn raise(&self, source: InputSource) {
        self.bits.fetch_or(source.mask(), Ordering::Release);
    }

    /// 清除（主循环调用）
    pub fn clear(&self, source: InputSource) {
        self.bits.fetch_and(!source.mask(), Ordering::AcqRel);
    }

    pub fn is_raised(&self, source: InputSource) -> bool {
        self.bits.load(Ordering::Acquire) & source.mask() != 0
    }

    /// 当前掩码
    pub fn pending(&self) -> u32 {
        self.bits.load(Ordering::Acquire)
    }

    pub fn any(&self) -> bool {
        self.pending() != 0
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_follow_source_order() {
        assert_eq!(InputSource::CoinSensor.mask(), 0b01);
        assert_eq!(InputSource::DispenseButton.mask(), 0b10);
        assert_eq!(InputSource::ALL[0], InputSource::CoinSensor);
    }

    #[test]
    fn raise_and_clear_touch_only_their_bit() {
        let flags = EventFlags::new();
        assert!(!flags.any());

        flags.raise(InputSource::CoinSensor);
        flags.raise(InputSource::DispenseButton);
        assert_eq!(flags.pending(), 0b11);

        flags.clear(InputSource::CoinSensor);
        assert!(!flags.is_raised(InputSource::CoinSensor));
        assert!(flags.is_raised(InputSource::DispenseButton));
    }

    #[test]
    fn repeated_raise_is_coalesced() {
        let flags = EventFlags::new();
        flags.raise(InputSource::DispenseButton);
        flags.raise(InputSource::DispenseButton);
        flags.clear(InputSource::DispenseButton);
        assert!(!flags.any());
    }
}
