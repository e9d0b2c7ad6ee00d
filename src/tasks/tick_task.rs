// 节拍任务
use crate::SharedDispatcher;
use coin_dispenser::drivers::TickGate;
use defmt::info;
use embassy_time::{Duration, Ticker};

/// 节拍任务
///
/// 代替硬件节拍中断，闸门打开时每个周期推进一次软件定时器
#[embassy_executor::task]
pub async fn tick_task(
    dispatcher: &'static SharedDispatcher,
    gate: &'static TickGate,
    period_ms: u32,
) -> ! {
    info!("Tick task started ({} ms)", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));

    loop {
        ticker.next().await;

        if gate.is_open() {
            dispatcher.lock(|d| d.borrow_mut().on_tick());
        }
    }
}
