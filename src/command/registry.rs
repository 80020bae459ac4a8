//! Command registration by id

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::Operation;
use crate::error::{Error, Result};

/// What a host palette needs to list a command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// The command id the host dispatches
    #[serde(rename = "command")]
    pub id: String,
    /// A human-readable title
    pub title: String,
    /// Palette category the title is grouped under
    pub category: String,
}

impl CommandDescriptor {
    /// Create a new descriptor
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
        }
    }
}

struct RegisteredCommand {
    descriptor: CommandDescriptor,
    operation: Operation,
}

/// Maps command ids to the operation they run
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, RegisteredCommand>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `operation` under the id of `descriptor`
    pub fn register(&mut self, descriptor: CommandDescriptor, operation: Operation) -> Result<()> {
        if self.commands.contains_key(&descriptor.id) {
            return Err(Error::DuplicateCommand(descriptor.id));
        }
        debug!("Registering command {} ({:?})", descriptor.id, operation);
        self.commands.insert(
            descriptor.id.clone(),
            RegisteredCommand {
                descriptor,
                operation,
            },
        );
        Ok(())
    }

    /// Look up the operation registered under `id`
    pub fn get(&self, id: &str) -> Result<Operation> {
        self.commands
            .get(id)
            .map(|command| command.operation)
            .ok_or_else(|| Error::UnknownCommand(id.to_string()))
    }

    /// List the descriptors of all registered commands, ordered by id
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        let mut descriptors: Vec<_> = self
            .commands
            .values()
            .map(|command| command.descriptor.clone())
            .collect();
        descriptors.sort_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether no command is registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Remove every command
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
