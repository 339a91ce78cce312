//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects,
//! plus grouping of item child rows under their parent item.

mod category;
mod content;
mod item;
mod user;

pub use item::group_children;
