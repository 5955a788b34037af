pub mod camera;
pub mod measure;
pub mod shapes;
