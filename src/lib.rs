pub mod callable;
pub mod class;
pub mod environment;
pub mod error;
pub mod function;
pub mod instance;
pub mod token;
pub mod value;
