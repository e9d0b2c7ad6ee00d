// 模拟输入引脚（用于测试）
use super::InputPins;
use crate::event::InputSource;
use core::sync::atomic::{AtomicBool, Ordering};

/// 模拟输入引脚
///
/// 测试直接写入电平，主循环消抖后读取。
pub struct PinLevels {
    asserted: [AtomicBool; InputSource::COUNT],
}

impl PinLevels {
    pub const fn new() -> Self {
        Self {
            asserted: [AtomicBool::new(false), AtomicBool::new(false)],
        }
    }

    /// 记录引脚电平
    pub fn record(&self, source: InputSource, asserted: bool) {
        self.asserted[source.index()].store(asserted, Ordering::Release);
    }
}

impl Default for PinLevels {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPins for PinLevels {
    fn is_asserted(&self, source: InputSource) -> bool {
        self.asserted[source.index()].load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_tracked_per_source() {
        let levels = PinLevels::new();
        levels.record(InputSource::DispenseButton, true);

        assert!(levels.is_asserted(InputSource::DispenseButton));
        assert!(!levels.is_asserted(InputSource::CoinSensor));

        levels.record(InputSource::DispenseButton, false);
        assert!(!levels.is_asserted(InputSource::DispenseButton));
    }
}
