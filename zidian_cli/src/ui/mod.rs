pub mod interrupt;
pub mod printer;
pub mod prompt;
