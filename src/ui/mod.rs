//! Terminal output.
//!
//! stdout carries nothing but the resulting tag so the tool composes in
//! scripts (`TAG=$(bumpy .)`); everything else goes to stderr.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction, display_tag,
};
