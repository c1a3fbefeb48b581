pub mod spies;
pub mod stubs;
