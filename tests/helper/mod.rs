pub mod fixture;

pub use fixture::{testdata_dir, write_project};
