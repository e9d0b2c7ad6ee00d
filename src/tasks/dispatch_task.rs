// 事件分发任务
use crate::SharedDispatcher;
use crate::board;
use coin_dispenser::drivers::SampledPins;
use defmt::{debug, info};
use embassy_futures::yield_now;

/// 事件分发任务（主循环）
///
/// 轮询待处理事件并交给状态机，从不阻塞，每轮让出一次执行器。
/// 消抖到期后由处理函数重新采样引脚电平。
#[embassy_executor::task]
pub async fn dispatch_task(dispatcher: &'static SharedDispatcher) -> ! {
    info!("Dispatch task started");

    let pins = SampledPins::new(board::input_is_high);

    loop {
        let handled = dispatcher.lock(|d| d.borrow_mut().dispatch(&pins));
        if handled > 0 {
            debug!("Dispatched {} events", handled);
        }

        yield_now().await;
    }
}
