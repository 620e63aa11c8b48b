pub mod common;
mod concurrency_test;
mod tower_test;
