/// Runtime value representation.
///
/// Defines the `Value` enum with its five variants (null, number, string,
/// list, function), the sharing semantics of composite values, and the
/// truthiness rules used by conditions.
pub mod core;
/// Value rendering.
///
/// Implements the textual rendering of captured print values, including the
/// canonical number format, quoting of strings embedded in lists, and the
/// shallow-nesting limit for nested lists.
pub mod render;
