use std::ops::{Add, Range};

use arrayvec::{ArrayVec};

use super::model::{Name, NamedThing, Person};

/// A hand-written `map()`, to show what the built-in one does.
///
/// Unlike [`Iterator::map()`] this is eager: it walks `self` exactly once,
/// in order, and returns a `Vec` with one `Transformed` per element.
pub trait MyMap: IntoIterator + Sized {
    fn my_map<Transformed>(self, mut transform: impl FnMut(Self::Item) -> Transformed)
    -> Vec<Transformed> {
        let mut output = Vec::new();
        for element in self {
            let transformed = transform(element);
            output.push(transformed);
        }
        output
    }
}

impl<I: IntoIterator> MyMap for I {}

// ----------------------------------------------------------------------------

/// Collects everybody's greeting with an explicit loop.
pub fn hello_strings_by_loop(people: &[Person]) -> Vec<String> {
    let mut hello_strings = Vec::new();
    for person in people {
        let str = person.hello();
        hello_strings.push(str);
    }
    hello_strings
}

/// Collects everybody's name, once for each way of writing the closure,
/// from the most verbose to the least.
pub fn shorthand_names(people: &[Person]) -> [Vec<Name>; 7] {
    #[allow(clippy::needless_return)]
    let long_closure = people.iter().map(|person: &Person| -> Name {
        return person.name().clone();
    }).collect();
    let typed = people.iter().map(|person: &Person| -> Name { person.name().clone() }).collect();
    let typed_parameter = people.iter().map(|person: &Person| person.name().clone()).collect();
    let block = people.iter().map(|person| { person.name().clone() }).collect();
    let inferred = people.iter().map(|person| person.name().clone()).collect();
    let path = people.iter().map(Person::name).cloned().collect();
    let my_map = people.my_map(|person| person.name().clone());
    [long_closure, typed, typed_parameter, block, inferred, path, my_map]
}

// ----------------------------------------------------------------------------

/// Folds `values` into their sum, spelling out the combining closure.
pub fn sum_of(values: &[i64]) -> i64 {
    values.iter().fold(0, |result, next| {
        result + next
    })
}

/// Folds `values` into their sum, passing `+` itself.
pub fn sum_of_simplified(values: &[i64]) -> i64 {
    values.iter().copied().fold(0, i64::add)
}

/// Puts a 👏 between every word of `sentence`.
///
/// Folds the words into `"👏word👏word..."` and then drops the first
/// character. Runs of spaces do not produce empty words.
pub fn clap_back(sentence: &str) -> String {
    let clapped = sentence
        .split(' ')
        .filter(|word| !word.is_empty())
        .fold(String::new(), |result, next| result + "👏" + next);
    let mut chars = clapped.chars();
    chars.next();
    chars.as_str().to_owned()
}

// ----------------------------------------------------------------------------

/// The tail of an array, starting at `start`, remembering where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix<const N: usize> {
    start: usize,
    tail: ArrayVec<i64, N>,
}

impl<const N: usize> Suffix<N> {
    /// Panics if `start` is greater than `N`.
    pub fn new(values: [i64; N], start: usize) -> Self {
        assert!(start <= N, "Suffix starts at {} but the array has length {}", start, N);
        Self {start, tail: values.into_iter().skip(start).collect()}
    }

    /// The indices of the original array that are in the tail.
    pub fn indices(&self) -> Range<usize> { self.start .. self.start + self.tail.len() }

    /// The first element of the tail.
    pub fn first(&self) -> Option<i64> { self.tail.first().copied() }
}

// ----------------------------------------------------------------------------
