pub use super::contacts::Entity as Contacts;
