// 软件定时器
//
// 固定容量的倒计时表，由周期硬件节拍推进
use crate::config::TIMER_CAPACITY;
use crate::drivers::TickSource;
use crate::error::{Error, Result};

/// 定时器 ID
///
/// 注册时按顺序分配，服务生命周期内不会回收复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId(u8);

impl TimerId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// 定时器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerKind {
    /// 到期后停止
    Once,
    /// 到期后按周期重装
    Periodic,
}

/// 定时器回调函数指针类型
pub type TimerCallback<C> = fn(&mut C, TimerId);

/// 定时器回调
pub struct TimerCallbacks<C> {
    pub on_start: Option<TimerCallback<C>>,
    pub on_expire: Option<TimerCallback<C>>,
    pub on_stop: Option<TimerCallback<C>>,
}

impl<C> TimerCallbacks<C> {
    /// 无回调
    pub fn none() -> Self {
        Self {
            on_start: None,
            on_expire: None,
            on_stop: None,
        }
    }

    /// 只有到期回调
    pub fn on_expire(callback: TimerCallback<C>) -> Self {
        Self {
            on_expire: Some(callback),
            ..Self::none()
        }
    }
}

impl<C> Clone for TimerCallbacks<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for TimerCallbacks<C> {}

/// 定时器槽位
struct TimerSlot<C> {
    kind: TimerKind,
    period: u32,
    remaining: u32,
    callbacks: TimerCallbacks<C>,
}

/// 软件定时器服务
///
/// `C` 是回调收到的上下文，通常是持有本服务的顶层对象。
pub struct SoftwareTimers<C> {
    slots: heapless::Vec<TimerSlot<C>, TIMER_CAPACITY>,
    enabled: bool,
}

impl<C> SoftwareTimers<C> {
    /// 创建空的定时器服务
    pub const fn new() -> Self {
        Self {
            slots: heapless::Vec::new(),
            enabled: false,
        }
    }

    /// 启动硬件节拍
    pub fn enable<S: TickSource>(&mut self, source: &mut S) -> Result<()> {
        source.start().map_err(|_| Error::TickSource)?;
        self.enabled = true;
        debug!("Software timer tick enabled");
        Ok(())
    }

    /// 停止硬件节拍
    pub fn disable<S: TickSource>(&mut self, source: &mut S) -> Result<()> {
        source.stop().map_err(|_| Error::TickSource)?;
        self.enabled = false;
        debug!("Software timer tick disabled");
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 注册定时器
    ///
    /// 槽位用完返回 `CapacityExhausted`，说明 `TIMER_CAPACITY` 需要加大。
    pub fn register(&mut self, callbacks: TimerCallbacks<C>, kind: TimerKind) -> Result<TimerId> {
        let id = TimerId(self.slots.len() as u8);
        let slot = TimerSlot {
            kind,
            period: 0,
            remaining: 0,
            callbacks,
        };

        if self.slots.push(slot).is_err() {
            warn!("Software timer capacity {} exhausted", TIMER_CAPACITY);
            return Err(Error::CapacityExhausted);
        }

        debug!("Software timer {} registered ({:?})", id.0, kind);
        Ok(id)
    }

    /// 已注册数量
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        TIMER_CAPACITY
    }

    /// 是否正在倒计时
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.remaining(id) > 0
    }

    /// 剩余节拍数
    pub fn remaining(&self, id: TimerId) -> u32 {
        self.slots.get(id.index()).map_or(0, |slot| slot.remaining)
    }

    /// 重装周期
    pub fn period(&self, id: TimerId) -> u32 {
        self.slots.get(id.index()).map_or(0, |slot| slot.period)
    }

    pub fn kind(&self, id: TimerId) -> Option<TimerKind> {
        self.slots.get(id.index()).map(|slot| slot.kind)
    }

    fn callbacks(&self, id: TimerId) -> Option<TimerCallbacks<C>> {
        self.slots.get(id.index()).map(|slot| slot.callbacks)
    }

    fn arm(&mut self, id: TimerId, period: u32) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            slot.period = period;
            slot.remaining = period;
        }
    }

    fn disarm(&mut self, id: TimerId) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            slot.period = 0;
            slot.remaining = 0;
        }
    }

    /// 倒计时一个节拍，返回是否刚好到期
    fn countdown(&mut self, id: TimerId) -> bool {
        match self.slots.get_mut(id.index()) {
            Some(slot) if slot.remaining > 0 => {
                slot.remaining -= 1;
                slot.remaining == 0
            }
            _ => false,
        }
    }

    /// 周期定时器到期后重装
    fn reload(&mut self, id: TimerId) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            if slot.kind == TimerKind::Periodic {
                slot.remaining = slot.period;
            }
        }
    }
}

impl<C> Default for SoftwareTimers<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// 定时器上下文
///
/// 回调需要再次操作定时器（例如在到期回调里重新启动），
/// 所以启动、停止和节拍推进都以持有服务的上下文为接收者。
pub trait TimerContext: Sized {
    fn timers_mut(&mut self) -> &mut SoftwareTimers<Self>;

    /// 启动定时器，已在运行则重新计时
    fn start_timer(&mut self, id: TimerId, period: u32) {
        if period == 0 {
            return;
        }
        let Some(callbacks) = self.timers_mut().callbacks(id) else {
            return;
        };
        if let Some(on_start) = callbacks.on_start {
            on_start(self, id);
        }
        self.timers_mut().arm(id, period);
    }

    /// 停止定时器，重复停止也会调用停止回调
    fn stop_timer(&mut self, id: TimerId) {
        let Some(callbacks) = self.timers_mut().callbacks(id) else {
            return;
        };
        self.timers_mut().disarm(id);
        if let Some(on_stop) = callbacks.on_stop {
            on_stop(self, id);
        }
    }

    /// 节拍推进（节拍中断调用）
    ///
    /// 按槽位升序扫描，到期先回调再按类型重装。
    fn tick_timers(&mut self) {
        let count = self.timers_mut().len();
        for index in 0..count {
            let id = TimerId(index as u8);
            if !self.timers_mut().countdown(id) {
                continue;
            }
            if let Some(on_expire) = self.timers_mut().callbacks(id).and_then(|c| c.on_expire) {
                on_expire(self, id);
            }
            self.timers_mut().reload(id);
        }
    }
}
