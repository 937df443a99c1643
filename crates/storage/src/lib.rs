#![warn(clippy::pedantic)]

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;
mod record;

pub use local_storage::{LocalStorage, Log};
pub use memory::InMemory;
