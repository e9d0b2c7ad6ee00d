// 事件分发器（主循环）
//
// 持有定时器服务、状态机和事件标志，硬件入口都从这里进入
use crate::app::router;
use crate::config::Config;
use crate::drivers::{InputPins, TickSource};
use crate::error::Result;
use crate::event::{EventFlags, InputSource};
use crate::machine::{MachineContext, VendingMachine};
use crate::timer::{SoftwareTimers, TimerCallbacks, TimerContext, TimerId, TimerKind};

/// 事件分发器
pub struct Dispatcher {
    timers: SoftwareTimers<Dispatcher>,
    machine: VendingMachine,
    /// 每个输入源一个消抖定时器，按位号索引
    debounce_timers: [TimerId; InputSource::COUNT],
    debounce_ticks: u32,
    events: EventFlags,
}

impl TimerContext for Dispatcher {
    fn timers_mut(&mut self) -> &mut SoftwareTimers<Self> {
        &mut self.timers
    }
}

impl MachineContext for Dispatcher {
    fn machine_mut(&mut self) -> &mut VendingMachine {
        &mut self.machine
    }
}

impl Dispatcher {
    /// 启动
    ///
    /// 打开硬件节拍，注册两个消抖定时器，初始化状态机。
    /// 任何错误都是致命的，由调用者决定复位或进入安全状态。
    pub fn start<S: TickSource>(tick: &mut S, config: Config) -> Result<Self> {
        config.validate()?;

        let mut timers = SoftwareTimers::new();
        timers.enable(tick)?;

        let coin_timer = timers.register(TimerCallbacks::on_expire(on_debounce_settled), TimerKind::Once)?;
        let button_timer = timers.register(TimerCallbacks::on_expire(on_debounce_settled), TimerKind::Once)?;
        let debounce_timers = [coin_timer, button_timer];

        let machine = VendingMachine::initialize(&mut timers, &config)?;

        info!(
            "Dispatcher started ({} of {} timers in use)",
            timers.len(),
            timers.capacity()
        );

        Ok(Self {
            timers,
            machine,
            debounce_timers,
            debounce_ticks: config.debounce_ticks(),
            events: EventFlags::new(),
        })
    }

    /// 停止硬件节拍
    pub fn shutdown<S: TickSource>(&mut self, tick: &mut S) -> Result<()> {
        self.timers.disable(tick)
    }

    /// 硬件节拍入口
    pub fn on_tick(&mut self) {
        self.tick_timers();
    }

    /// GPIO 边沿入口：重新开始该输入的消抖计时
    pub fn on_gpio_edge(&mut self, source: InputSource) {
        let timer = self.debounce_timers[source.index()];
        let ticks = self.debounce_ticks;
        self.start_timer(timer, ticks);
    }

    /// 处理所有待处理事件，返回处理的事件位数
    ///
    /// 不阻塞；没有事件时立即返回，由调用者循环调用。
    pub fn dispatch<P: InputPins>(&mut self, pins: &P) -> usize {
        let mut handled = 0;

        while self.events.any() {
            for source in InputSource::ALL {
                if !self.events.is_raised(source) {
                    continue;
                }

                if let Err(e) = router::route_input(self, source, pins) {
                    debug!("Input {:?} not accepted: {:?}", source, e);
                }
                self.events.clear(source);
                handled += 1;
            }
        }

        handled
    }

    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    pub fn timers(&self) -> &SoftwareTimers<Self> {
        &self.timers
    }

    pub fn events(&self) -> &EventFlags {
        &self.events
    }

    /// 输入源对应的消抖定时器
    pub fn debounce_timer(&self, source: InputSource) -> TimerId {
        self.debounce_timers[source.index()]
    }

    fn source_for(&self, timer: TimerId) -> Option<InputSource> {
        InputSource::ALL
            .into_iter()
            .find(|source| self.debounce_timers[source.index()] == timer)
    }
}

/// 消抖定时器到期：置位对应事件（节拍中断上下文）
fn on_debounce_settled(dispatcher: &mut Dispatcher, timer: TimerId) {
    if let Some(source) = dispatcher.source_for(timer) {
        dispatcher.events.raise(source);
    }
}
