mod blog_tests;
mod test_helpers;
