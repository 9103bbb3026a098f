pub mod breeds;
pub mod pets;

pub use breeds::Entity as Breeds;
pub use pets::Entity as Pets;
