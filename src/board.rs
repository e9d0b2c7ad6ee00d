// 板级引脚
//
// 投币传感器 PE2，出货按钮 PE3，均为上拉输入、低电平有效
use coin_dispenser::InputSource;
use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals::Idr;

/// 读取输入引脚当前是否为高电平
///
/// 直接读 GPIOE 输入寄存器，不依赖边沿中断
pub fn input_is_high(source: InputSource) -> bool {
    let pin = match source {
        InputSource::CoinSensor => 2,
        InputSource::DispenseButton => 3,
    };
    pac::GPIOE.idr().read().idr(pin) == Idr::HIGH
}
