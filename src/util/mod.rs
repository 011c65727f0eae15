pub mod scroll;
pub mod theme;
