pub mod local;
pub mod remote;

pub use local::{load_menu, load_menu_csv, load_menu_file, save_menu};
pub use remote::{DEFAULT_MENU_URL, DEFAULT_PLANS_URL, MenuApi, PlanApi};
