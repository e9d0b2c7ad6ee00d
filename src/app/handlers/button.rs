// 按键事件处理
use crate::drivers::InputPins;
use crate::error::Result;
use crate::event::InputSource;
use crate::machine::{self, MachineContext};

/// 处理出货按钮按下事件
pub fn on_button_press<C: MachineContext, P: InputPins>(ctx: &mut C, pins: &P) -> Result<()> {
    if !pins.is_asserted(InputSource::DispenseButton) {
        debug!("Handler: button bounced, ignored");
        return Ok(());
    }

    info!("Handler: Dispense button pressed");
    machine::dispense_button_pressed(ctx)
}
