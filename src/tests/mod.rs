//! フロー試験（スタブアダプタでユースケースを通す）

mod support;

mod args_tests;
mod refresh_tests;
