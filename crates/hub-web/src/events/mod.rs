pub mod controls;
pub mod scroll;

pub use controls::wire_parameter_inputs;
pub use scroll::wire_parallax;
