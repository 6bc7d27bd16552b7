//! C++ code generation modules.

pub mod dispatch;
pub mod serialization;

pub use dispatch::DispatchGenerator;
pub use serialization::SerializationGenerator;
