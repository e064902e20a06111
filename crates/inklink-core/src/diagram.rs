//! The embedded class diagram.
//!
//! Mermaid source describing the product/audit service layers (domain, ports,
//! application, adapters) and the relationships between them. The text is
//! opaque payload: leading and trailing newlines and trailing spaces on blank
//! lines are part of it and must survive encoding unchanged.

/// Mermaid `classDiagram` source, compiled into the binary.
pub const CLASS_DIAGRAM: &str = include_str!("../diagrams/class_diagram.mmd");

pub fn class_diagram() -> &'static str {
    CLASS_DIAGRAM
}
