pub mod cart;
pub mod feedback;
pub mod image;
