//! Card system: templates, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card templates
//! - `CardKind`: resource, creature or spell
//! - `Rarity`: catalog tier used when seeding the centre pool
//! - `CardTemplate`: Static card data with stats and abilities
//! - `CardInstance`: Runtime card state (stats, trigger counters, buffs)
//! - `Catalog`: Template lookup and per-tier selection

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardId, CardKind, CardTemplate, Rarity};
pub use instance::CardInstance;
pub use registry::Catalog;
