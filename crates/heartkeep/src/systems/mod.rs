pub mod carry;
pub mod collision;
pub mod render;
