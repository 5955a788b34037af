pub mod canvas;
pub mod frame;
pub mod offline;
pub mod surface;
