pub mod cart_items;
pub mod feedback;
pub mod product_images;
pub mod products;
pub mod users;

pub use cart_items::Entity as CartItems;
pub use feedback::Entity as Feedbacks;
pub use product_images::Entity as ProductImages;
pub use products::Entity as Products;
pub use users::Entity as Users;
