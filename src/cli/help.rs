//! Declarative argument help tables.
//!
//! Each command keeps a static table mapping argument names to prose
//! descriptions. [`HelpTable::help`] turns a description into the string
//! shown by `--help`: whitespace runs (including line breaks in multi-line
//! prose) collapse to single spaces, the text is lower-cased, and trailing
//! periods are stripped. Looking up an argument with no entry is a fatal
//! configuration error at parser-construction time.

use crate::error::{CotainrError, Result};

/// One row of a command's argument help table.
#[derive(Debug, Clone, Copy)]
pub struct ArgDescription {
    /// Argument name as declared on the command.
    pub name: &'static str,

    /// Prose description; may span lines and end with a period.
    pub description: &'static str,
}

/// Static argument help table for one command.
#[derive(Debug, Clone, Copy)]
pub struct HelpTable {
    command: &'static str,
    entries: &'static [ArgDescription],
}

impl HelpTable {
    /// Create a table for `command`.
    pub const fn new(command: &'static str, entries: &'static [ArgDescription]) -> Self {
        Self { command, entries }
    }

    /// The raw description registered for `name`.
    ///
    /// The match is a literal name comparison; a miss is an error naming the
    /// missing argument and the command searched.
    pub fn description(&self, name: &str) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.description)
            .ok_or_else(|| CotainrError::MissingArgDescription {
                command: self.command.to_string(),
                name: name.to_string(),
            })
    }

    /// The `--help` string for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` has no registered description. Help tables are
    /// static and must cover every argument a command declares; the panic
    /// surfaces at parser construction, before any arguments are parsed.
    pub fn help(&self, name: &str) -> String {
        match self.description(name) {
            Ok(description) => normalize_description(description),
            Err(err) => panic!("{err}"),
        }
    }
}

/// Normalize prose into CLI help form: single-space separated, lower-cased,
/// with trailing periods removed.
pub fn normalize_description(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let lowered = collapsed.to_lowercase();
    lowered.trim_end_matches('.').to_string()
}

/// Help table for the `build` command.
pub const BUILD_HELP: HelpTable = HelpTable::new(
    "build",
    &[
        ArgDescription {
            name: "image_path",
            description: "Path to the built container image.",
        },
        ArgDescription {
            name: "base_image",
            description: "Base image to use for the container which may be any valid\n\
                          Apptainer/Singularity <BUILD SPEC>.",
        },
        ArgDescription {
            name: "conda_env",
            description: "Path to a Conda environment.yml file to install and activate in the\n\
                          container.",
        },
    ],
);
