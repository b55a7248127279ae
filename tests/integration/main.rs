//! Integration test harness for the termsaver CLI.

mod helpers;

mod cli_test;
mod script_file_test;
