// 事件路由器
use crate::app::handlers;
use crate::drivers::InputPins;
use crate::error::Result;
use crate::event::InputSource;
use crate::machine::MachineContext;

/// 路由事件到对应的处理器
pub fn route_input<C: MachineContext, P: InputPins>(ctx: &mut C, source: InputSource, pins: &P) -> Result<()> {
    match source {
        InputSource::CoinSensor => {
            debug!("Routing coin event");
            handlers::coin::on_coin_insert(ctx, pins)
        }

        InputSource::DispenseButton => {
            debug!("Routing button event");
            handlers::button::on_button_press(ctx, pins)
        }
    }
}
