//! String manipulation utilities.
//!
//! The scanning operations here are small explicit state machines:
//! - [`parse_component`] extracts one bracket/quote-aware component
//! - [`escape`] / [`unescape`] add and remove a single escape character
//! - [`to_integer`] parses a strict decimal integer with overflow detection
//! - [`instantiate_template`] substitutes `${name}` placeholders
//!
//! Alongside them sit the simple helpers [`split`], [`join`], [`trim`],
//! [`indent`] and friends. Every function is pure.

pub mod component;
pub mod escape;
pub mod integer;
pub mod split;
pub mod template;
pub mod text;

pub use component::parse_component;
pub use escape::{Escaper, escape, unescape};
pub use integer::{IntegerError, to_integer};
pub use split::{Delimiter, join, split};
pub use template::{Variables, instantiate_template};
pub use text::{indent, normalize_case_insensitive, strip_margin_whitespace, to_lower, trim};

/// Creates a `HashMap<String, String>` of template variables.
///
/// Keys and values may be anything implementing `ToString`.
///
/// # Example
///
/// ```
/// use stringutils::{instantiate_template, vars};
///
/// let v = vars! { "who" => "World", "count" => 3 };
/// assert_eq!(v.len(), 2);
/// assert_eq!(instantiate_template("${who} x${count}", &v), "World x3");
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        ::std::collections::HashMap::<String, String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, String>::new();
            $(
                map.insert($key.to_string(), $value.to_string());
            )+
            map
        }
    };
}
