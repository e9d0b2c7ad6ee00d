// 模拟硬件节拍（用于测试）
use super::{TickFault, TickSource};

/// 模拟节拍定时器
///
/// 在真实硬件上，这会被替换为定时器外设
pub struct MockTick {
    pub running: bool,
    pub fail_start: bool,
    pub fail_stop: bool,
    pub starts: u32,
    pub stops: u32,
}

impl MockTick {
    pub const fn new() -> Self {
        Self {
            running: false,
            fail_start: false,
            fail_stop: false,
            starts: 0,
            stops: 0,
        }
    }

    /// 启动和停止都会失败的节拍源
    pub const fn broken() -> Self {
        Self {
            fail_start: true,
            fail_stop: true,
            ..Self::new()
        }
    }
}

impl Default for MockTick {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MockTick {
    fn start(&mut self) -> Result<(), TickFault> {
        self.starts += 1;
        if self.fail_start {
            return Err(TickFault);
        }
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), TickFault> {
        self.stops += 1;
        if self.fail_stop {
            return Err(TickFault);
        }
        self.running = false;
        Ok(())
    }
}
