pub mod diff_service;
pub mod filter_service;
