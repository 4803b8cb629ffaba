mod make_box;
mod make_rectangle;
mod make_switch_hole;

pub use make_box::MakeBox;
pub use make_rectangle::MakeRectangle;
pub use make_switch_hole::{MakeSwitchHole, SwitchHoleParams};
