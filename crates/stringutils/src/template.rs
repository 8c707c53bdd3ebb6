//! `${name}` placeholder substitution.
//!
//! Rules, applied character by character:
//! - `\x` emits `x` literally, whatever `x` is
//! - `${name}` emits the value of `name`, or nothing if it is unknown
//! - `$` followed by anything other than `{` is emitted together with that
//!   character, unchanged
//! - a `${` that is never closed drops everything from the `$` onward
//!
//! Placeholders do not nest: the first `}` closes the name.

use std::collections::{BTreeMap, HashMap};

/// A source of template variable values.
pub trait Variables {
    /// Look up the value bound to `name`.
    fn get(&self, name: &str) -> Option<&str>;
}

impl Variables for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

impl Variables for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Copying literal text.
    Normal,
    /// A backslash was read; the next character is literal.
    Escape,
    /// A `$` was read and is being held back.
    TokenStart,
    /// Inside `${`, collecting the placeholder name.
    Token,
}

struct Instantiator<'v, V: ?Sized> {
    variables: &'v V,
    state: State,
    token: String,
    output: String,
}

impl<'v, V: Variables + ?Sized> Instantiator<'v, V> {
    fn new(variables: &'v V, capacity: usize) -> Self {
        Self {
            variables,
            state: State::Normal,
            token: String::new(),
            output: String::with_capacity(capacity),
        }
    }

    fn step(&mut self, c: char) {
        self.state = match self.state {
            State::Normal => match c {
                '\\' => State::Escape,
                '$' => State::TokenStart,
                _ => {
                    self.output.push(c);
                    State::Normal
                }
            },
            State::Escape => {
                self.output.push(c);
                State::Normal
            }
            State::TokenStart => {
                if c == '{' {
                    self.token.clear();
                    State::Token
                } else {
                    self.output.push('$');
                    self.output.push(c);
                    State::Normal
                }
            }
            State::Token => {
                if c == '}' {
                    self.substitute();
                    State::Normal
                } else {
                    self.token.push(c);
                    State::Token
                }
            }
        };
    }

    fn substitute(&mut self) {
        match self.variables.get(&self.token) {
            Some(value) => self.output.push_str(value),
            None => log::debug!("template: no value for placeholder '{}'", self.token),
        }
    }

    fn finish(self) -> String {
        match self.state {
            State::Normal => {}
            State::Escape => log::trace!("template: dropping trailing backslash"),
            State::TokenStart => log::trace!("template: dropping trailing '$'"),
            State::Token => {
                log::debug!("template: dropping unterminated placeholder '{}'", self.token);
            }
        }
        self.output
    }
}

/// Substitutes every `${name}` placeholder in `template` with its value from
/// `variables`.
///
/// Unknown and unterminated placeholders are removed from the output rather
/// than reported.
///
/// ```
/// use stringutils::{instantiate_template, vars};
///
/// let v = vars! { "who" => "World" };
/// assert_eq!(instantiate_template("Hello, ${who}!", &v), "Hello, World!");
/// assert_eq!(instantiate_template("\\${who} costs $5", &v), "${who} costs $5");
/// assert_eq!(instantiate_template("${nobody}. ${early", &v), ". ");
/// ```
pub fn instantiate_template<V: Variables + ?Sized>(template: &str, variables: &V) -> String {
    let mut instantiator = Instantiator::new(variables, template.len());
    for c in template.chars() {
        instantiator.step(c);
    }
    instantiator.finish()
}
