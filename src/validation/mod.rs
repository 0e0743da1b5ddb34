mod references;
mod validator;


pub use validator::{Summary, Validator};
