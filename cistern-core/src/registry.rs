use crate::TableSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    /// Many target rows point back at this model through a foreign key.
    HasMany,
    /// Like `HasMany` capped to a single row.
    HasOne,
    /// This model carries the foreign key pointing at the target.
    BelongsTo,
}

/// A named link from one model to another.
///
/// `target` is the name of another defined model, `foreign_key` the column
/// holding the key (on the target table for `HasMany`/`HasOne`, on this
/// model's table for `BelongsTo`) and `alias` the name queries use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub kind: AssociationKind,
    pub target: String,
    pub foreign_key: String,
    pub alias: String,
}

/// A model: the table schema plus the associations declared on it.
///
/// The model is addressed by its table name.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDef {
    pub schema: TableSchema,
    pub associations: Vec<Association>,
}

impl ModelDef {
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            associations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.schema.table
    }

    pub fn has_many(
        self,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.associate(AssociationKind::HasMany, target, foreign_key, alias)
    }

    pub fn has_one(
        self,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.associate(AssociationKind::HasOne, target, foreign_key, alias)
    }

    pub fn belongs_to(
        self,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.associate(AssociationKind::BelongsTo, target, foreign_key, alias)
    }

    pub fn associate(
        mut self,
        kind: AssociationKind,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.associations.push(Association {
            kind,
            target: target.into(),
            foreign_key: foreign_key.into(),
            alias: alias.into(),
        });
        self
    }

    pub fn association(&self, alias: &str) -> Option<&Association> {
        self.associations.iter().find(|a| a.alias == alias)
    }
}

/// The models known to a connection, in definition order.
///
/// Redefining a name replaces the previous model in place, so the order of
/// a schema sync stays the order of first definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRegistry {
    models: Vec<ModelDef>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, model: ModelDef) {
        match self.models.iter_mut().find(|m| m.name() == model.name()) {
            Some(existing) => *existing = model,
            None => self.models.push(model),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ModelDef> {
        self.models.iter().find(|m| m.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ModelDef> {
        self.models.iter_mut().find(|m| m.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelDef> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
