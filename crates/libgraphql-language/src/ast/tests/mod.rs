mod ast_test_utils;
mod type_annotation_tests;
