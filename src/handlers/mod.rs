//! MCP tool handlers for the board server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add_task;
pub mod list;
pub mod move_task;
