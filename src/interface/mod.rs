pub mod prompts;
pub mod render;

pub use prompts::{
    choose_from_list, choose_place, collect_user_metrics, prompt_memo, prompt_user_id,
    prompt_yes_no,
};
pub use render::{
    display_history, display_menu_board, display_menu_boards, display_recommendation, history_line,
};
