mod check;
mod config;
mod context;
mod hash;
mod init;
mod test;

pub use check::{check_project, finish_check, run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{color_choice_to_mode, load_config, resolve_root};
pub use hash::{is_identifier, run_hash, run_hash_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use test::{run_test, run_test_impl};
