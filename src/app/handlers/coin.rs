// 投币事件处理
use crate::drivers::InputPins;
use crate::error::Result;
use crate::event::InputSource;
use crate::machine::{self, MachineContext};

/// 处理投币事件
///
/// 消抖结束后重新读取引脚，仍为有效电平才算一次投币。
pub fn on_coin_insert<C: MachineContext, P: InputPins>(ctx: &mut C, pins: &P) -> Result<()> {
    if !pins.is_asserted(InputSource::CoinSensor) {
        debug!("Handler: coin pulse released during debounce, ignored");
        return Ok(());
    }

    info!("Handler: Coin inserted");
    machine::insert_coin(ctx)
}
