pub mod diff_options;
pub mod diff_result;
pub mod env_var;
pub mod key_pattern;
