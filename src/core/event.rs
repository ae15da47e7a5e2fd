//! Event marker trait.

/// Marker for values that can be dispatched to a machine.
///
/// Events are transient: they are passed to handlers by shared reference and
/// never stored past the dispatch call. Payload fields are read-only to the
/// handlers.
///
/// # Example
///
/// ```rust
/// use tinyfsm::Event;
///
/// struct FloorSensor {
///     floor: i32,
/// }
///
/// impl Event for FloorSensor {}
/// ```
pub trait Event {}
