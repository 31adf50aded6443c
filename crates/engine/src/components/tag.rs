use crate::prelude::*;

/// Human readable label attached to every entity spawned through the application.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
}
