//! A playground for functional programming idioms.
//!
//! Each module illustrates a handful of language features; [`Lesson`] runs
//! them all in order and prints what they compute.

pub mod model;
pub use model::{Name, NamedThing, Pet, Person, make_named_thing_speak};

pub mod predicate;
pub use predicate::{IsMultiple, Predicate, make_function_to_check_if_is_multiple};

pub mod sequence;
pub use sequence::{MyMap, Suffix};

mod lesson;
pub use lesson::{Settings, Lesson};
