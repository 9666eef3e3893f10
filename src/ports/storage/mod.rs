mod object_directory;

pub use object_directory::ObjectDirectory;
