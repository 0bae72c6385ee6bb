//! Console command module.

mod list;

pub use list::{DispatcherResolver, ListCommand};
