//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the FileSystem boundary trait but are themselves
//! concrete structs, not traits.

mod items;
mod planting;

pub use items::ItemService;
pub use planting::{Dashboard, ExportView, PlantingService};
