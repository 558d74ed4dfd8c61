mod show_abbreviated_revision;
mod show_first_commit;
mod show_modified_and_new_files;
mod show_unknown_revision_fails;
