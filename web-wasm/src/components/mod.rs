//! UIコンポーネント

pub mod create_form;
pub mod delete_list;
pub mod header;
pub mod mode_selector;
pub mod project_card;
pub mod project_fields;
pub mod project_grid;
pub mod settings_panel;
pub mod showcase;
pub mod status_message;
pub mod update_form;
