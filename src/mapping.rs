//! Relational mapping declarations.
//!
//! Persisted shapes carry no storage metadata themselves. Table and column
//! names, key strategy, relationship cardinality and cascade rules live here
//! and are read by the repository when it decides which related rows an
//! operation touches.

/// How a primary key gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Assigned by the storage engine on insert.
    Identity,
    /// Supplied by the caller.
    Assigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ManyToOne,
    OneToMany,
    OneToOne,
}

/// Lifecycle operations that may propagate along a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeOp {
    Persist,
    Merge,
    Remove,
}

impl CascadeOp {
    pub const ALL: &'static [CascadeOp] =
        &[CascadeOp::Persist, CascadeOp::Merge, CascadeOp::Remove];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub field: &'static str,
    pub column: &'static str,
    pub nullable: bool,
}

impl ColumnMapping {
    pub const fn required(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            nullable: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationMapping {
    pub field: &'static str,
    pub join_column: &'static str,
    pub target_table: &'static str,
    pub target_column: &'static str,
    pub cardinality: Cardinality,
    pub nullable: bool,
    pub cascade: &'static [CascadeOp],
}

impl RelationMapping {
    pub fn cascades(&self, op: CascadeOp) -> bool {
        self.cascade.contains(&op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMapping {
    pub table: &'static str,
    pub key_column: &'static str,
    pub key_strategy: KeyStrategy,
    pub columns: &'static [ColumnMapping],
    pub relations: &'static [RelationMapping],
}

impl TableMapping {
    pub fn column(&self, field: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn relation(&self, field: &str) -> Option<&RelationMapping> {
        self.relations.iter().find(|r| r.field == field)
    }
}

/// Mapping of [`crate::models::Feedback`] onto the `feedback` table.
///
/// The user relation cascades every operation from the feedback to its user,
/// so deleting a feedback deletes the user who wrote it.
// TODO: confirm with the shop owners whether removing a feedback should really
// remove its author; if not, drop `Remove` from this cascade set.
pub const FEEDBACK: TableMapping = TableMapping {
    table: "feedback",
    key_column: "id_feedback",
    key_strategy: KeyStrategy::Identity,
    columns: &[
        ColumnMapping::required("id", "id_feedback"),
        ColumnMapping::required("title", "title"),
        ColumnMapping::required("comment", "comment"),
        ColumnMapping::required("date_created", "dateCreated"),
        ColumnMapping::required("is_read", "isReaded"),
    ],
    relations: &[FEEDBACK_USER],
};

pub const FEEDBACK_USER: RelationMapping = RelationMapping {
    field: "user",
    join_column: "id_user",
    target_table: "users",
    target_column: "id_user",
    cardinality: Cardinality::ManyToOne,
    nullable: false,
    cascade: CascadeOp::ALL,
};
