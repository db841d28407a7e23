//! Core data types shared by the session and the generation client

pub mod design;
pub mod image;

pub use design::DesignVariation;
pub use image::ImageData;
