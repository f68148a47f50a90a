mod source_tests;
mod window_tests;
