/// Main trait for floating point types accepted by the interface.
///
/// This is the engine's own float trait, re-exported so that matrices,
/// cones and settings built here can be handed across without conversion.
/// Implementations exist for `f32` and `f64`.  The C interface is
/// compiled for `f64` only.
pub use clarabel::algebra::FloatT;
