//! Snippet synthesis for discovered components
//!
//! Turns a [`ComponentDescriptor`] into editor snippet text such as
//! `Card.new(title: ${1:value}, count: ${2:0})`, where each parameter becomes a
//! numbered, tabbable placeholder field.

use crate::core::constants::completion::FALLBACK_PLACEHOLDER;
use crate::core::ComponentDescriptor;

/// One parameter of an initializer, as rendered into a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter<'a> {
    /// `name` with no colon; the name itself is the default text
    Positional { name: &'a str },
    /// `name: default`; an empty default falls back to a placeholder word
    Keyword { name: &'a str, default: &'a str },
}

impl<'a> Parameter<'a> {
    /// Parse one comma-separated field. Only the first colon splits.
    pub fn parse(field: &'a str) -> Self {
        match field.split_once(':') {
            Some((name, default)) => Parameter::Keyword {
                name: name.trim(),
                default: default.trim(),
            },
            None => Parameter::Positional {
                name: field.trim(),
            },
        }
    }

    /// Render as snippet text using placeholder number `position`
    pub fn render(&self, position: usize) -> String {
        match self {
            Parameter::Positional { name } => placeholder(position, name),
            Parameter::Keyword { name, default } => {
                let default = if default.is_empty() {
                    FALLBACK_PLACEHOLDER
                } else {
                    *default
                };
                format!("{name}: {}", placeholder(position, default))
            }
        }
    }
}

fn placeholder(position: usize, text: &str) -> String {
    format!("${{{position}:{text}}}")
}

/// Split a raw parameter list into parameters, in order
pub fn parse_parameters(args: &str) -> Vec<Parameter<'_>> {
    args.split(',').map(Parameter::parse).collect()
}

/// Produce the insertable snippet for a component
pub fn synthesize_snippet(descriptor: &ComponentDescriptor) -> String {
    let base = format!("{}.new", descriptor.name);

    let args = match descriptor.args.as_deref() {
        Some(args) if !args.trim().is_empty() => args,
        _ => return base,
    };

    let fields = parse_parameters(args)
        .iter()
        .enumerate()
        .map(|(i, param)| param.render(i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{base}({fields})")
}
