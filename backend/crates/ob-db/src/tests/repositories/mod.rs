mod user_row_tests;
