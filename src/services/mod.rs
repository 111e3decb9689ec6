pub mod catalog_loader;
pub mod figure;
pub mod round;
