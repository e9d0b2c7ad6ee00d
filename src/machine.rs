// 售货状态机
//
// 投币 -> 足额 -> 出货 <-> 暂停出货，出货倒计时结束自动回到投币状态
use crate::config::Config;
use crate::error::{Error, Result};
use crate::timer::{SoftwareTimers, TimerCallbacks, TimerContext, TimerId, TimerKind};

/// 售货机状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachineStatus {
    /// 接受投币（初始状态）
    AcceptCoin,
    /// 金额足够，等待按键出货
    EnoughCoin,
    /// 出货中
    Dispensing,
    /// 出货暂停
    PauseDispense,
}

/// 状态机输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachineInput {
    InsertCoin,
    DispenseButtonPressed,
}

/// 状态转移动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// 累加硬币，首次达到最少硬币数时进入足额状态
    CountCoin,
    /// 把硬币换算成出货秒数并开始出货
    StartDispensing,
    /// 暂停出货
    PauseDispensing,
    /// 从剩余秒数继续出货
    ResumeDispensing,
}

/// 状态转移表
///
/// 返回 `None` 表示当前状态不接受该输入。
pub const fn transition(status: MachineStatus, input: MachineInput) -> Option<Action> {
    use MachineInput::*;
    use MachineStatus::*;

    match (status, input) {
        (AcceptCoin, InsertCoin) | (EnoughCoin, InsertCoin) => Some(Action::CountCoin),
        (EnoughCoin, DispenseButtonPressed) => Some(Action::StartDispensing),
        (Dispensing, DispenseButtonPressed) => Some(Action::PauseDispensing),
        (PauseDispense, DispenseButtonPressed) => Some(Action::ResumeDispensing),
        (AcceptCoin, DispenseButtonPressed) | (Dispensing, InsertCoin) | (PauseDispense, InsertCoin) => None,
    }
}

/// 状态机上下文
pub trait MachineContext: TimerContext {
    fn machine_mut(&mut self) -> &mut VendingMachine;
}

/// 售货机
pub struct VendingMachine {
    status: MachineStatus,
    /// 本次交易投入的硬币
    coins_inserted: u32,
    /// 剩余出货秒数
    seconds_remaining: u32,
    dispense_timer: TimerId,
    minimum_coins: u32,
    dispense_step: u32,
}

impl VendingMachine {
    /// 初始化状态机
    ///
    /// 进入投币状态并注册出货定时器，之后才接受输入。
    pub fn initialize<C: MachineContext>(timers: &mut SoftwareTimers<C>, config: &Config) -> Result<Self> {
        let dispense_timer = timers.register(TimerCallbacks::on_expire(on_dispense_elapsed::<C>), TimerKind::Once)?;

        let mut machine = Self {
            status: MachineStatus::AcceptCoin,
            coins_inserted: 0,
            seconds_remaining: 0,
            dispense_timer,
            minimum_coins: config.minimum_coins,
            dispense_step: config.dispense_step_ticks(),
        };
        machine.enter_accept_coin();

        Ok(machine)
    }

    pub fn status(&self) -> MachineStatus {
        self.status
    }

    pub fn coins_inserted(&self) -> u32 {
        self.coins_inserted
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn dispense_timer(&self) -> TimerId {
        self.dispense_timer
    }

    fn enter_accept_coin(&mut self) {
        self.status = MachineStatus::AcceptCoin;
        self.coins_inserted = 0;
        self.seconds_remaining = 0;
        info!("Accept coin status setup completed");
        info!("Please insert coin");
    }

    fn enter_enough_coin(&mut self) {
        self.status = MachineStatus::EnoughCoin;
        info!("Enough coin status setup completed");
        info!("Press button to dispense");
    }

    fn count_coin(&mut self) {
        info!("Insert coin at {:?}", self.status);
        self.coins_inserted = self.coins_inserted.saturating_add(1);
        info!("Total coin = {}", self.coins_inserted);

        if self.status == MachineStatus::AcceptCoin && self.coins_inserted >= self.minimum_coins {
            self.enter_enough_coin();
        }
    }
}

fn enter_dispensing<C: MachineContext>(ctx: &mut C) {
    let machine = ctx.machine_mut();
    machine.status = MachineStatus::Dispensing;
    let (timer, step) = (machine.dispense_timer, machine.dispense_step);

    ctx.start_timer(timer, step);
    info!("Dispensing status setup completed");
    info!("Press button to stop dispense");
}

fn enter_pause_dispense<C: MachineContext>(ctx: &mut C) {
    let machine = ctx.machine_mut();
    machine.status = MachineStatus::PauseDispense;
    let timer = machine.dispense_timer;

    ctx.stop_timer(timer);
    info!("Pause Dispense status setup completed");
    info!("Press button to continue dispense");
}

/// 处理一个输入
///
/// 无效输入只记录日志，状态不变。
pub fn handle_input<C: MachineContext>(ctx: &mut C, input: MachineInput) -> Result<()> {
    let status = ctx.machine_mut().status;

    let Some(action) = transition(status, input) else {
        match input {
            MachineInput::InsertCoin => warn!("Cannot insert coin at this status"),
            MachineInput::DispenseButtonPressed => warn!("Cannot press button at this status"),
        }
        return Err(Error::Rejected { status, input });
    };

    match action {
        Action::CountCoin => ctx.machine_mut().count_coin(),
        Action::StartDispensing => {
            info!("Press button at {:?}", status);
            let machine = ctx.machine_mut();
            machine.seconds_remaining = machine.coins_inserted;
            enter_dispensing(ctx);
        }
        Action::PauseDispensing => {
            info!("Press button at {:?}", status);
            enter_pause_dispense(ctx);
        }
        Action::ResumeDispensing => {
            info!("Press button at {:?}", status);
            enter_dispensing(ctx);
        }
    }

    Ok(())
}

/// 投币
pub fn insert_coin<C: MachineContext>(ctx: &mut C) -> Result<()> {
    handle_input(ctx, MachineInput::InsertCoin)
}

/// 按下出货按钮
pub fn dispense_button_pressed<C: MachineContext>(ctx: &mut C) -> Result<()> {
    handle_input(ctx, MachineInput::DispenseButtonPressed)
}

/// 出货定时器到期：剩余秒数减一，用完直接回到投币状态
fn on_dispense_elapsed<C: MachineContext>(ctx: &mut C, timer: TimerId) {
    let machine = ctx.machine_mut();
    if machine.status != MachineStatus::Dispensing {
        warn!("Dispense timer expired at {:?}", machine.status);
        return;
    }

    machine.seconds_remaining = machine.seconds_remaining.saturating_sub(1);
    if machine.seconds_remaining > 0 {
        info!("Still remain {} second", machine.seconds_remaining);
        let step = machine.dispense_step;
        ctx.start_timer(timer, step);
    } else {
        info!("Dispense completed");
        machine.enter_accept_coin();
    }
}
