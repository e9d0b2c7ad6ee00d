// 节拍闸门
use super::{TickFault, TickSource};
use core::sync::atomic::{AtomicBool, Ordering};

/// 节拍闸门
///
/// 固件的节拍任务只在闸门打开时推进软件定时器。
pub struct TickGate {
    open: AtomicBool,
}

impl TickGate {
    pub const fn new() -> Self {
        Self {
            open: AtomicBool::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for &TickGate {
    fn start(&mut self) -> Result<(), TickFault> {
        self.open.store(true, Ordering::Release);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), TickFault> {
        self.open.store(false, Ordering::Release);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_opens_and_closes() {
        let gate = TickGate::new();
        assert!(!gate.is_open());

        let mut source = &gate;
        source.start().unwrap();
        assert!(gate.is_open());

        source.stop().unwrap();
        assert!(!gate.is_open());
    }
}
