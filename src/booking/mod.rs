pub mod forms;
pub mod pricing;
pub mod submit;
pub mod wizard;
