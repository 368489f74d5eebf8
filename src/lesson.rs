use std::{io};
use std::ffi::{OsStr};
use std::ops::{RangeInclusive};
use io::{IsTerminal};

use ansi_term::Colour::{Blue};
use tracing::{debug, debug_span};

use super::model::{NamedThing, Pet, Person, make_named_thing_speak};
use super::predicate::{
    make_function_to_check_if_is_multiple, is_multiple_of_five, IS_MULTIPLE_OF_TEN,
    multiples_of_three_by_loop, multiples_of_three,
    even_multiples_of_three, square_even_multiples_of_three,
};
use super::sequence::{
    MyMap, Suffix, hello_strings_by_loop, shorthand_names,
    sum_of, sum_of_simplified, clap_back,
};

/// Everything the lesson can be told.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The name of the pet.
    pub pet: String,

    /// The name of the person who speaks first.
    pub first: String,

    /// The name of the person who speaks second.
    pub second: String,

    /// The largest number in the number playground. The smallest is `0`.
    pub largest: i64,

    /// The sentence to clap.
    pub sentence: String,

    /// Paint section headers.
    pub colour: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pet: "Jangle".into(), // that's Matt's dog!
            first: "Zev".into(),
            second: "Matt".into(),
            largest: 100,
            sentence: "Abandon all hope ye you enter here".into(),
            colour: true,
        }
    }
}

impl Settings {
    /// The defaults, with colour turned off if `NO_COLOR` is set or stdout is
    /// not a terminal.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR");
        let colour = wants_colour(no_color.as_deref(), io::stdout().is_terminal());
        Self {colour, ..Self::default()}
    }
}

/// Decides whether to paint, given the value of `NO_COLOR`.
///
/// An empty `NO_COLOR` counts as unset.
fn wants_colour(no_color: Option<&OsStr>, is_terminal: bool) -> bool {
    is_terminal && no_color.map_or(true, OsStr::is_empty)
}

// ----------------------------------------------------------------------------

/// Runs every demonstration once, top to bottom.
#[derive(Debug)]
pub struct Lesson {
    settings: Settings,
}

impl Lesson {
    pub fn new(settings: Settings) -> Self { Self {settings} }

    pub fn settings(&self) -> &Settings { &self.settings }

    fn numbers(&self) -> RangeInclusive<i64> { 0 ..= self.settings.largest }

    fn people(&self) -> [Person; 2] {
        [Person::new(&self.settings.first), Person::new(&self.settings.second)]
    }

    /// Write a section header.
    fn header(&self, output: &mut impl io::Write, title: &str) -> io::Result<()> {
        let line = format!("--------------- {} --------------", title);
        if self.settings.colour {
            writeln!(output, "{}", Blue.paint(line))
        } else {
            writeln!(output, "{}", line)
        }
    }

    /// Write the whole lesson to `output`.
    pub fn run(&self, output: &mut impl io::Write) -> io::Result<()> {
        self.traits(output)?;
        self.map(output)?;
        self.filter(output)?;
        self.shorthand(output)?;
        self.passing_closures(output)?;
        self.chaining(output)?;
        self.reduce(output)?;
        Ok(())
    }

    fn traits(&self, output: &mut impl io::Write) -> io::Result<()> {
        let _span = debug_span!("traits").entered();
        let pet = Pet::new(&self.settings.pet);
        make_named_thing_speak(&pet, output)?;

        let [zev, matt] = self.people();
        zev.print_hello(output)?;
        zev.print_hello_to(&matt, output)?;
        matt.print_hello_to(&zev, output)?;

        debug!(hello = %zev.hello());
        debug!(hello_to = %matt.hello_to(&zev));
        Ok(())
    }

    fn map(&self, output: &mut impl io::Write) -> io::Result<()> {
        self.header(output, "Map")?;
        let _span = debug_span!("map").entered();
        let people = self.people();
        for person in &people {
            person.print_hello(output)?;
        }

        let hello_strings = hello_strings_by_loop(&people);
        writeln!(output, "{:?}", hello_strings)?;

        let hello_strings_mapped: Vec<String> = people.iter().map(|person| person.hello()).collect();
        debug!(?hello_strings_mapped);
        let hello_strings_my_mapped = people.my_map(|person| person.hello());
        debug!(?hello_strings_my_mapped);
        Ok(())
    }

    fn filter(&self, output: &mut impl io::Write) -> io::Result<()> {
        self.header(output, "Filter")?;
        let _span = debug_span!("filter").entered();
        let multiples_of_three_by_loop = multiples_of_three_by_loop(self.numbers());
        writeln!(output, "{:?}", multiples_of_three_by_loop)?;

        let multiples_of_three_filtered = multiples_of_three(self.numbers());
        debug!(?multiples_of_three_filtered);
        Ok(())
    }

    fn shorthand(&self, output: &mut impl io::Write) -> io::Result<()> {
        self.header(output, "Shorthand")?;
        let _span = debug_span!("shorthand").entered();
        for (form, names) in shorthand_names(&self.people()).iter().enumerate() {
            debug!(form, ?names);
        }
        Ok(())
    }

    fn passing_closures(&self, output: &mut impl io::Write) -> io::Result<()> {
        self.header(output, "Passing Closures")?;
        let _span = debug_span!("passing_closures").entered();
        let fives: Vec<i64> = self.numbers().filter(is_multiple_of_five).collect();
        writeln!(output, "{:?}", fives)?;

        let closure_based_tens: Vec<i64> = self.numbers().filter(IS_MULTIPLE_OF_TEN).collect();
        debug!(?closure_based_tens);

        let is_multiple_of_four = make_function_to_check_if_is_multiple(4);
        let fours: Vec<i64> = self.numbers().filter(is_multiple_of_four).collect();
        writeln!(output, "{:?}", fours)?;
        Ok(())
    }

    fn chaining(&self, output: &mut impl io::Write) -> io::Result<()> {
        self.header(output, "Chaining")?;
        let _span = debug_span!("chaining").entered();
        writeln!(output, "{:?}", even_multiples_of_three(self.numbers()))?;
        writeln!(output, "{:?}", square_even_multiples_of_three(self.numbers()))?;
        Ok(())
    }

    fn reduce(&self, output: &mut impl io::Write) -> io::Result<()> {
        self.header(output, "Reduce")?;
        let _span = debug_span!("reduce").entered();
        let even_multiples_of_three = even_multiples_of_three(self.numbers());
        writeln!(output, "{}", sum_of(&even_multiples_of_three))?;
        writeln!(output, "{}", sum_of_simplified(&even_multiples_of_three))?;
        writeln!(output, "{}", clap_back(&self.settings.sentence))?;

        let this_whole_thing = Suffix::new([1, 2, 3, 4, 5], 2);
        writeln!(output, "{:?}", this_whole_thing.indices())?;
        debug!(first = ?this_whole_thing.first());
        Ok(())
    }
}

impl Default for Lesson {
    fn default() -> Self { Self::new(Settings::default()) }
}

// ----------------------------------------------------------------------------
