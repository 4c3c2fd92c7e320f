pub mod notation_tests;
