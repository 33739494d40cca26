pub mod constants;
pub mod layout;

pub use layout::DataLayout;
