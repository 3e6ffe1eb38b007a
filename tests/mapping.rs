use camerashop_api::{
    entity::{Feedbacks, feedback::Column},
    mapping::{CascadeOp, Cardinality, FEEDBACK, FEEDBACK_USER, KeyStrategy},
};
use sea_orm::{EntityName, IdenStatic};

#[test]
fn feedback_columns_match_entity() {
    assert_eq!(Feedbacks.table_name(), FEEDBACK.table);

    let pairs = [
        ("id", Column::Id),
        ("title", Column::Title),
        ("comment", Column::Comment),
        ("date_created", Column::DateCreated),
        ("is_read", Column::IsRead),
    ];
    for (field, column) in pairs {
        let mapped = FEEDBACK.column(field).expect("mapped column");
        assert_eq!(mapped.column, column.as_str(), "column for {field}");
    }

    assert_eq!(FEEDBACK.key_column, Column::Id.as_str());
    assert_eq!(FEEDBACK_USER.join_column, Column::UserId.as_str());
}

#[test]
fn feedback_key_is_identity_generated() {
    assert_eq!(FEEDBACK.key_strategy, KeyStrategy::Identity);
    assert_eq!(FEEDBACK.column("date_created").map(|c| c.column), Some("dateCreated"));
    assert_eq!(FEEDBACK.column("is_read").map(|c| c.column), Some("isReaded"));
    assert!(FEEDBACK.column("user").is_none());
}

#[test]
fn user_relation_is_mandatory_many_to_one_with_full_cascade() {
    let relation = FEEDBACK.relation("user").expect("user relation");

    assert_eq!(relation, &FEEDBACK_USER);
    assert_eq!(relation.cardinality, Cardinality::ManyToOne);
    assert_eq!(relation.target_table, "users");
    assert!(!relation.nullable);
    for op in [CascadeOp::Persist, CascadeOp::Merge, CascadeOp::Remove] {
        assert!(relation.cascades(op), "{op:?} should cascade");
    }
}
