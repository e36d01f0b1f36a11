mod graphql_parser_compat_tests;
mod graphql_parser_tests;
mod graphql_schema_parser_tests;
mod source_location_tests;
mod utils;
