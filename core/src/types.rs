//! Shared primitive types used across the report builders.

/// A behavioral persona label, as assigned by `v_persona_assignment`.
pub type PersonaName = String;

/// An ISO-8601 generation timestamp stamped onto every report.
pub type Timestamp = String;
