mod test_utils;
mod region_tests;
mod border_tests;
