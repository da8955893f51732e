pub mod grammar;
pub mod intro;
pub mod story;
pub mod summary;
pub mod vocabulary;
