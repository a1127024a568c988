//! Value tree produced by the parser.

use serde::Serialize;

/// A node of the parsed document.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Value {
    Group(Group),
    String(StringField),
    Number(NumberField),
}

/// An object: `"name": { ... }`, or the synthetic root wrapper.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    /// `None` marks the synthetic root wrapper. A document field can never
    /// produce it, whatever its name.
    pub name: Option<String>,
    pub children: Vec<Value>,
}

/// `"name": "value"`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StringField {
    pub name: String,
    pub value: String,
}

/// `"name": 1234`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NumberField {
    pub name: String,
    pub value: u64,
}

impl Group {
    pub fn root(children: Vec<Value>) -> Self {
        Self {
            name: None,
            children,
        }
    }

    pub fn named(name: impl Into<String>, children: Vec<Value>) -> Self {
        Self {
            name: Some(name.into()),
            children,
        }
    }

    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }
}

// Children are unlinked into a worklist so deep trees drop without recursion.
impl Drop for Group {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Value::Group(mut group) = child {
                pending.append(&mut group.children);
            }
        }
    }
}

impl Value {
    pub fn group(name: impl Into<String>, children: Vec<Value>) -> Self {
        Self::Group(Group::named(name, children))
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::String(StringField {
            name: name.into(),
            value: value.into(),
        })
    }

    pub fn number(name: impl Into<String>, value: u64) -> Self {
        Self::Number(NumberField {
            name: name.into(),
            value,
        })
    }

    /// Field name, or `None` for a synthetic root group.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.name.as_deref(),
            Self::String(field) => Some(&field.name),
            Self::Number(field) => Some(&field.name),
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Looks up a direct child by field name. First match wins.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_group()?
            .children
            .iter()
            .find(|child| child.name() == Some(name))
    }
}
