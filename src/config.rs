// 固件配置
use crate::error::{Error, Result};

/// 软件定时器槽位数量
pub const TIMER_CAPACITY: usize = 8;

/// 售货机配置
///
/// 所有时间以毫秒给出，运行时换算为节拍数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 硬件节拍周期
    pub tick_period_ms: u32,
    /// 按键消抖时间
    pub debounce_ms: u32,
    /// 出货倒计时步长（每枚硬币一步）
    pub dispense_step_ms: u32,
    /// 允许出货的最少硬币数
    pub minimum_coins: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_period_ms: 1,
            debounce_ms: 50,
            dispense_step_ms: 1000,
            minimum_coins: 5,
        }
    }
}

impl Config {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0
            || self.debounce_ms == 0
            || self.dispense_step_ms == 0
            || self.minimum_coins == 0
        {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    /// 毫秒换算为节拍数，非零时长至少一个节拍
    pub fn ticks(&self, ms: u32) -> u32 {
        if ms == 0 || self.tick_period_ms == 0 {
            return 0;
        }
        (ms / self.tick_period_ms).max(1)
    }

    pub fn debounce_ticks(&self) -> u32 {
        self.ticks(self.debounce_ms)
    }

    pub fn dispense_step_ticks(&self) -> u32 {
        self.ticks(self.dispense_step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_board() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.debounce_ticks(), 50);
        assert_eq!(config.dispense_step_ticks(), 1000);
        assert_eq!(config.minimum_coins, 5);
    }

    #[test]
    fn coarse_tick_rounds_down_but_never_to_zero() {
        let config = Config {
            tick_period_ms: 30,
            ..Config::default()
        };
        assert_eq!(config.debounce_ticks(), 1);
        assert_eq!(config.dispense_step_ticks(), 33);
        assert_eq!(config.ticks(10), 1);
        assert_eq!(config.ticks(0), 0);
    }

    #[test]
    fn zero_values_are_rejected() {
        let zero_tick = Config {
            tick_period_ms: 0,
            ..Config::default()
        };
        assert_eq!(zero_tick.validate(), Err(Error::InvalidConfig));

        let zero_coins = Config {
            minimum_coins: 0,
            ..Config::default()
        };
        assert_eq!(zero_coins.validate(), Err(Error::InvalidConfig));
    }
}
