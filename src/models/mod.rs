pub mod business;
pub mod catalog;
pub mod content;
pub mod entity;
pub mod rbac;
pub mod schema;
pub mod store;
pub mod system;

pub use business::{Project, User};
pub use content::{Category, Post, Tag};
pub use entity::{Entity, JoinRow};
pub use rbac::{Admin, Api, Menu, Role, STATUS_ACTIVE};
pub use schema::{ColumnDef, ColumnType, EntityDescriptor, IndexDef, JoinTableDef};
pub use store::ProductSpecItem;
pub use system::SystemConfig;
