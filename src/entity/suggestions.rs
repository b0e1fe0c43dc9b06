use sea_orm::entity::prelude::*;

/// Controlled vocabulary entries for the free-text picklists. `kind` holds
/// a `SuggestionKind` string code; rows with an unknown code are skipped
/// when the vocabulary is loaded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "suggestions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kind: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
