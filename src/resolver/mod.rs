mod checker;
mod file;


pub use checker::FileChecker;
pub use file::ResolvedFile;
