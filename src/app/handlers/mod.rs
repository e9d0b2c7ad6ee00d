pub mod button;
pub mod coin;
