/// Call resolution and the builtin lookup table.
pub mod core;
/// List builtins: `len` and the mutators `push`, `pop`, `insert`, `remove`,
/// `sort`.
pub mod list;
/// Math builtins: `abs`, `ceil`, `floor`, `round`, `sqrt`, `rnd`, and
/// `range`.
pub mod math;
/// String builtins: `parse_num`, `to_string`, `lower`, `upper`, `split`,
/// `join`, and `replace`.
pub mod string;
