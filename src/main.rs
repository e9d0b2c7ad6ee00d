#![no_std]
#![no_main]

mod board;
mod tasks;

use coin_dispenser::drivers::TickGate;
use coin_dispenser::{Config, Dispatcher};
use core::cell::RefCell;
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Pull;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

/// 节拍、边沿和主循环任务共享的分发器
pub type SharedDispatcher = Mutex<CriticalSectionRawMutex, RefCell<Dispatcher>>;

static DISPATCHER: StaticCell<SharedDispatcher> = StaticCell::new();
static TICK_GATE: TickGate = TickGate::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_stm32::init(embassy_stm32::Config::default());

    info!("=== Coin Dispenser ===");
    info!("Initializing...");

    let config = Config::default();

    // 启动失败不可恢复：记录后复位
    let mut tick = &TICK_GATE;
    let dispatcher = match Dispatcher::start(&mut tick, config) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            error!("Fatal startup error: {:?}", e);
            cortex_m::peripheral::SCB::sys_reset();
        }
    };
    let dispatcher = DISPATCHER.init(Mutex::new(RefCell::new(dispatcher)));

    // 投币传感器和出货按钮，低电平有效
    let coin = ExtiInput::new(p.PE2, p.EXTI2, Pull::Up);
    let button = ExtiInput::new(p.PE3, p.EXTI3, Pull::Up);

    info!("Spawning tasks...");

    spawner
        .spawn(tasks::tick_task::tick_task(dispatcher, &TICK_GATE, config.tick_period_ms))
        .unwrap();
    info!("  - Tick task spawned");

    spawner
        .spawn(tasks::input_task::input_task(dispatcher, coin, button))
        .unwrap();
    info!("  - Input task spawned");

    spawner
        .spawn(tasks::dispatch_task::dispatch_task(dispatcher))
        .unwrap();
    info!("  - Dispatch task spawned");

    info!("=== System ready ===");

    // 主任务空转
    loop {
        Timer::after_secs(60).await;
        info!("Main: System running...");
    }
}
