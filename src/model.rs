use std::{io};
use std::rc::{Rc};

/// Represents the name of a [`NamedThing`].
///
/// A `Name` is never empty.
pub type Name = Rc<str>;

/// Panics if `name` is empty.
fn check_name(name: &str) {
    assert!(!name.is_empty(), "A name must not be empty");
}

// ----------------------------------------------------------------------------

/// Something with a name that can speak.
pub trait NamedThing {
    /// Returns the name.
    fn name(&self) -> &Name;

    /// Replaces the name. Panics if `name` is empty.
    fn set_name(&mut self, name: &str);

    /// The text spoken by [`print_hello()`].
    ///
    /// [`print_hello()`]: NamedThing::print_hello
    fn hello(&self) -> String;

    /// Speak.
    fn print_hello(&self, output: &mut dyn io::Write) -> io::Result<()> {
        writeln!(output, "{}", self.hello())
    }
}

/// Makes any [`NamedThing`] speak.
pub fn make_named_thing_speak(thing: &dyn NamedThing, output: &mut dyn io::Write)
-> io::Result<()> {
    thing.print_hello(output)
}

// ----------------------------------------------------------------------------

/// An animal, which can only make noises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    name: Name,
}

impl Pet {
    /// Panics if `name` is empty.
    pub fn new(name: &str) -> Self {
        check_name(name);
        Self {name: name.into()}
    }
}

impl NamedThing for Pet {
    fn name(&self) -> &Name { &self.name }

    fn set_name(&mut self, name: &str) { check_name(name); self.name = name.into(); }

    fn hello(&self) -> String { format!("[pet noise] I'm {}", self.name) }
}

// ----------------------------------------------------------------------------

/// A person, who can also greet other people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
}

impl Person {
    /// Panics if `name` is empty.
    pub fn new(name: &str) -> Self {
        check_name(name);
        Self {name: name.into()}
    }

    /// The text spoken by [`print_hello_to()`].
    ///
    /// [`print_hello_to()`]: Person::print_hello_to
    pub fn hello_to(&self, other_person: &Person) -> String {
        format!("Hello {}, my name is {}", other_person.name, self.name)
    }

    /// Says hello to `other_person`.
    pub fn print_hello_to(&self, other_person: &Person, output: &mut dyn io::Write)
    -> io::Result<()> {
        writeln!(output, "{}", self.hello_to(other_person))
    }
}

impl NamedThing for Person {
    fn name(&self) -> &Name { &self.name }

    fn set_name(&mut self, name: &str) { check_name(name); self.name = name.into(); }

    fn hello(&self) -> String { format!("Hello my name is {}", self.name) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Runs `f` and returns what it wrote.
    fn transcript(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test_case("Zev", "Matt", "Hello Matt, my name is Zev"; "zev greets matt")]
    #[test_case("Matt", "Zev", "Hello Zev, my name is Matt"; "matt greets zev")]
    fn greeting(speaker: &str, listener: &str, expected: &str) {
        let speaker = Person::new(speaker);
        let listener = Person::new(listener);
        assert_eq!(speaker.hello_to(&listener), expected);
        let text = transcript(|out| speaker.print_hello_to(&listener, out));
        assert_eq!(text, format!("{}\n", expected));
    }

    #[test]
    fn dispatch() {
        let pet = Pet::new("Jangle");
        let zev = Person::new("Zev");
        let things: [&dyn NamedThing; 2] = [&pet, &zev];
        let text = transcript(|out| {
            for thing in things { make_named_thing_speak(thing, out)?; }
            Ok(())
        });
        assert_eq!(text, "[pet noise] I'm Jangle\nHello my name is Zev\n");
    }

    #[test]
    fn rename() {
        let mut pet = Pet::new("Jangle");
        pet.set_name("Biscuit");
        assert_eq!(&**pet.name(), "Biscuit");
        assert_eq!(pet.hello(), "[pet noise] I'm Biscuit");
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_name() {
        let _ = Person::new("");
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_rename() {
        Person::new("Zev").set_name("");
    }
}
