//! Debug outline of a value tree.

use std::fmt::Write;

use crate::value::Value;

pub struct TreePrinter<'v> {
    value: &'v Value,
    counts: bool,
}

impl<'v> TreePrinter<'v> {
    pub fn new(value: &'v Value) -> Self {
        Self {
            value,
            counts: false,
        }
    }

    /// Append the child count to every group line.
    pub fn with_counts(mut self, value: bool) -> Self {
        self.counts = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut stack = vec![(self.value, 0usize)];

        while let Some((value, depth)) = stack.pop() {
            let prefix = "  ".repeat(depth);
            match value {
                Value::Group(group) => {
                    match &group.name {
                        Some(name) => write!(w, "{}Group {:?}", prefix, name)?,
                        None => write!(w, "{}Root", prefix)?,
                    }
                    if self.counts {
                        write!(w, " ({})", group.children.len())?;
                    }
                    w.write_char('\n')?;
                    for child in group.children.iter().rev() {
                        stack.push((child, depth + 1));
                    }
                }
                Value::String(field) => {
                    writeln!(w, "{}String {:?} {:?}", prefix, field.name, field.value)?;
                }
                Value::Number(field) => {
                    writeln!(w, "{}Number {:?} {}", prefix, field.name, field.value)?;
                }
            }
        }

        Ok(())
    }
}

impl Value {
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}
