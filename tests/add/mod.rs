mod add_nonexistent_file_fails;
