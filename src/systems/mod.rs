pub mod camera;
pub mod earth;
pub mod ui;
