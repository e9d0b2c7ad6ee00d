// 错误定义
use crate::machine::{MachineInput, MachineStatus};

/// 结果类型
pub type Result<T> = core::result::Result<T, Error>;

/// 错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// 硬件节拍无法启动或停止
    TickSource,
    /// 软件定时器槽位已用完
    CapacityExhausted,
    /// 配置无效
    InvalidConfig,
    /// 当前状态不接受该输入
    Rejected {
        status: MachineStatus,
        input: MachineInput,
    },
}

impl Error {
    /// 是否为不可恢复的错误
    ///
    /// 致命错误只会在启动接线阶段出现，调用者决定复位还是进入安全状态。
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Error::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejections_are_recoverable() {
        assert!(Error::TickSource.is_fatal());
        assert!(Error::CapacityExhausted.is_fatal());
        assert!(Error::InvalidConfig.is_fatal());

        let rejected = Error::Rejected {
            status: MachineStatus::AcceptCoin,
            input: MachineInput::DispenseButtonPressed,
        };
        assert!(!rejected.is_fatal());
    }
}
