// 输入边沿任务
use crate::SharedDispatcher;
use coin_dispenser::InputSource;
use defmt::{debug, info};
use embassy_futures::select::{Either, select};
use embassy_stm32::exti::ExtiInput;

/// 输入边沿任务
///
/// 监听投币传感器和出货按钮的边沿，每个边沿都重新开始消抖
#[embassy_executor::task]
pub async fn input_task(
    dispatcher: &'static SharedDispatcher,
    mut coin: ExtiInput<'static>,
    mut button: ExtiInput<'static>,
) -> ! {
    info!("Input task started");

    loop {
        let source = match select(coin.wait_for_any_edge(), button.wait_for_any_edge()).await {
            Either::First(()) => InputSource::CoinSensor,
            Either::Second(()) => InputSource::DispenseButton,
        };
        debug!("Edge on {:?}", source);

        dispatcher.lock(|d| d.borrow_mut().on_gpio_edge(source));
    }
}
