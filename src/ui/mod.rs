pub mod prompt;
pub mod report;
pub mod table;
