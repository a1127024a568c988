//! Canonical text rendering of a value tree.

use std::fmt::{self, Write};

use crate::value::Value;

/// Renders `value` with one tab per nesting level.
///
/// A successful parse of the output yields the same names, nesting and values.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out).expect("String write never fails");
    out
}

enum Step<'v> {
    Node {
        value: &'v Value,
        level: usize,
        first: bool,
    },
    Close {
        level: usize,
        empty: bool,
    },
}

/// Writes the rendering of `value` to `w`, depth-first with an explicit stack.
pub fn write_value(value: &Value, w: &mut impl Write) -> fmt::Result {
    let mut stack = vec![Step::Node {
        value,
        level: 0,
        first: true,
    }];

    while let Some(step) = stack.pop() {
        match step {
            Step::Node {
                value,
                level,
                first,
            } => {
                if !first {
                    w.write_str(",\n")?;
                }
                indent(w, level)?;
                match value {
                    Value::Group(group) => {
                        if let Some(name) = &group.name {
                            write!(w, "\"{}\": ", name)?;
                        }
                        w.write_str("{\n")?;
                        stack.push(Step::Close {
                            level,
                            empty: group.children.is_empty(),
                        });
                        for (i, child) in group.children.iter().enumerate().rev() {
                            stack.push(Step::Node {
                                value: child,
                                level: level + 1,
                                first: i == 0,
                            });
                        }
                    }
                    Value::String(field) => write!(w, "\"{}\": \"{}\"", field.name, field.value)?,
                    Value::Number(field) => write!(w, "\"{}\": {}", field.name, field.value)?,
                }
            }
            Step::Close { level, empty } => {
                if !empty {
                    w.write_char('\n')?;
                }
                indent(w, level)?;
                w.write_char('}')?;
            }
        }
    }

    Ok(())
}

fn indent(w: &mut impl Write, level: usize) -> fmt::Result {
    for _ in 0..level {
        w.write_char('\t')?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f)
    }
}
