use crate::{interpreter::value::core::Value, util::num::format_number};

impl std::fmt::Display for Value {
    /// Renders the value the way `print` output is displayed.
    ///
    /// Null renders as `nil`, numbers in the canonical format, strings
    /// as-is. Lists render bracketed with comma-space separators; strings
    /// inside a list are double-quoted. A function has no printable form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("nil"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => f.write_str(s),
            Self::List(items) => write_list(f, &items.borrow(), 1),
            Self::Function(_) => Ok(()),
        }
    }
}

/// Writes one list level.
///
/// Only one level of nesting renders recursively; a list nested two or more
/// levels deep contributes nothing, though its separator still appears, so
/// `[1, [2, [3]], 4]` renders as `[1, [2, ], 4]`.
fn write_list(f: &mut std::fmt::Formatter<'_>,
              elements: &[Value],
              depth: usize)
              -> std::fmt::Result {
    f.write_str("[")?;
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        match element {
            Value::Null => f.write_str("nil")?,
            Value::Number(n) => f.write_str(&format_number(*n))?,
            Value::String(s) => write!(f, "\"{s}\"")?,
            Value::List(items) if depth < 2 => write_list(f, &items.borrow(), depth + 1)?,
            Value::List(_) | Value::Function(_) => {},
        }
    }
    f.write_str("]")
}

/// Concatenates the rendering of every captured print value, in order, with
/// no separators beyond what the program printed itself.
#[must_use]
pub fn render(values: &[Value]) -> String {
    values.iter().map(ToString::to_string).collect()
}
