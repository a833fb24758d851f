//! Unit test modules.

mod config_test;
mod power_test;
mod start_group_test;
