//! Reactive Pipeline
//!
//! Connects timeline props to painted frames through spark-signals deriveds.
//!
//! ```text
//! TimelineProps + children → timeline derived → frame derived → write_buffer
//! ```
//!
//! Both deriveds are pure. Reading a prop bound to a signal, or the active
//! theme, inside them creates the dependency that makes them re-run; writing
//! to the terminal stays with the caller.

pub mod frame_buffer_derived;
pub mod timeline_derived;

pub use frame_buffer_derived::create_timeline_frame_derived;
pub use timeline_derived::create_timeline_derived;
