// 实时采样的输入引脚
use super::InputPins;
use crate::event::InputSource;

/// 实时采样的输入引脚（低电平有效）
///
/// 每次查询都调用 `read_high` 读取引脚当前电平，不缓存边沿结果。
pub struct SampledPins<F> {
    read_high: F,
}

impl<F> SampledPins<F>
where
    F: Fn(InputSource) -> bool,
{
    pub const fn new(read_high: F) -> Self {
        Self { read_high }
    }
}

impl<F> InputPins for SampledPins<F>
where
    F: Fn(InputSource) -> bool,
{
    fn is_asserted(&self, source: InputSource) -> bool {
        !(self.read_high)(source)
    }
}
