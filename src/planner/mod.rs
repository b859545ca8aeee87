pub mod catalog;
pub mod constants;
pub mod profile;
pub mod recommend;
pub mod selector;

pub use catalog::{group_by_place, MenuCatalog, PlaceMenu};
pub use constants::*;
pub use profile::{compute_target, mifflin_st_jeor, ActivityLevel, ProfileConfig, Sex};
pub use recommend::{assemble, recommend, RecommendConfig};
pub use selector::{select_combos, ComboSelection, SearchStrategy};
