use crate::{
    AssociationKind, Client, ColumnDef, Config, Error, Executor, Filter, GenericSqlWriter,
    InsertOptions, ModelDef, ModelRegistry, QueryOptions, Result, ResultSet, Row, SelectQuery,
    SqlWriter, Value, truncated,
};
use log::{debug, error, info};
use std::fmt;

/// Statement run right after connecting to prove the credentials actually
/// pass, clients often accept a connection and only reject on first use.
const CONNECTION_CHECK: &str = "SELECT 1";

/// Column every model is assumed to be keyed by when associations resolve.
const KEY_COLUMN: &str = "id";

/// A live connection with its model registry.
///
/// `Cistern` owns a [`Client`] and the [`ModelRegistry`] scoped to it, two
/// connections never share definitions. All SQL is rendered through the
/// writer and delegated to the client, errors coming back are wrapped into
/// the [`Error`] taxonomy with the client's message preserved.
pub struct Cistern<C: Client> {
    client: C,
    registry: ModelRegistry,
    config: Config,
}

impl<C: Client> Cistern<C> {
    /// Parses `url`, connects the client and verifies the session with
    /// [`CONNECTION_CHECK`]. A transport failure maps to
    /// [`Error::ConnectionFailure`], a rejection of the check query to
    /// [`Error::AuthenticationFailure`].
    pub async fn connect(url: &str) -> Result<Self> {
        let config = Config::parse(url)?;
        debug!("connecting to {config}");
        let mut client = C::connect(&config)
            .await
            .map_err(|e| Error::ConnectionFailure(e.to_string()))?;
        client
            .query(CONNECTION_CHECK, &QueryOptions::default())
            .await
            .map_err(|e| Error::AuthenticationFailure(e.to_string()))?;
        info!("connected to {config}");
        Ok(Self {
            client,
            registry: ModelRegistry::new(),
            config,
        })
    }

    pub async fn close(mut self) -> Result<()> {
        self.client
            .close()
            .await
            .map_err(|e| Error::ConnectionFailure(e.to_string()))?;
        info!("closed connection to {}", self.config);
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn sql_writer(&self) -> GenericSqlWriter {
        GenericSqlWriter::new()
    }

    /// Defines or redefines a model.
    pub fn define(&mut self, model: ModelDef) -> &mut Self {
        debug!("defining model {}", model.name());
        self.registry.define(model);
        self
    }

    fn model(&self, name: &str) -> Result<&ModelDef> {
        self.registry
            .get(name)
            .ok_or_else(|| Error::UnknownModel(name.to_owned()))
    }

    /// Starts a query over a defined model's table.
    pub fn query(&self, model: &str) -> Result<SelectQuery> {
        let model = self.model(model)?;
        Ok(SelectQuery::new().from(model.schema.table.clone()))
    }

    /// Renders `query` and runs it on this connection.
    pub async fn find(&mut self, query: &SelectQuery) -> Result<ResultSet> {
        query.fetch(self).await
    }

    pub async fn create_table(&mut self, model: &str, if_not_exists: bool) -> Result<()> {
        let sql = {
            let model = self.model(model)?;
            let mut out = String::with_capacity(256);
            self.sql_writer()
                .write_create_table(&mut out, &model.schema, if_not_exists);
            out
        };
        self.execute(sql).await
    }

    pub async fn drop_table(&mut self, model: &str, if_exists: bool) -> Result<()> {
        let sql = {
            let model = self.model(model)?;
            let mut out = String::with_capacity(64);
            self.sql_writer()
                .write_drop_table(&mut out, &model.schema.table, if_exists);
            out
        };
        self.execute(sql).await
    }

    /// Creates the table of every defined model, in definition order, with
    /// `IF NOT EXISTS` so existing tables stay untouched.
    pub async fn sync_tables(&mut self) -> Result<()> {
        let statements = self
            .registry
            .iter()
            .map(|model| {
                let mut out = String::with_capacity(256);
                self.sql_writer()
                    .write_create_table(&mut out, &model.schema, true);
                out
            })
            .collect::<Vec<_>>();
        for sql in statements {
            self.execute(sql).await?;
        }
        Ok(())
    }

    /// Adds a column to the table and, once the server acknowledged, to the
    /// registered schema.
    pub async fn add_column(&mut self, model: &str, column: ColumnDef) -> Result<()> {
        let sql = {
            let model = self.model(model)?;
            let mut out = String::with_capacity(128);
            self.sql_writer()
                .write_add_column(&mut out, &model.schema.table, &column);
            out
        };
        self.execute(sql).await?;
        if let Some(model) = self.registry.get_mut(model) {
            model.schema.columns.push(column);
        }
        Ok(())
    }

    /// Drops a column from the table and the registered schema. Asking for
    /// a column the schema does not carry fails before reaching the server.
    pub async fn drop_column(&mut self, model: &str, column: &str) -> Result<()> {
        let sql = {
            let found = self.model(model)?;
            if !found.schema.has_column(column) {
                return Err(Error::MissingColumn {
                    model: model.to_owned(),
                    column: column.to_owned(),
                });
            }
            let mut out = String::with_capacity(64);
            self.sql_writer()
                .write_drop_column(&mut out, &found.schema.table, column);
            out
        };
        self.execute(sql).await?;
        if let Some(model) = self.registry.get_mut(model) {
            model.schema.columns.retain(|c| c.name != column);
        }
        Ok(())
    }

    /// Inserts rows of positional values matching the model's column order.
    /// Every row must carry exactly one value per column.
    pub async fn insert(&mut self, model: &str, rows: Vec<Vec<Value>>) -> Result<()> {
        let (table, labels) = {
            let model = self.model(model)?;
            (model.schema.table.clone(), model.schema.labels())
        };
        let expected = labels.len();
        let mut batch = Vec::with_capacity(rows.len());
        for (index, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(Error::InsertFailed(format!(
                    "model `{model}` expects {expected} values per row, row {index} carries {}",
                    values.len(),
                )));
            }
            batch.push(Row::new(labels.clone(), values));
        }
        if batch.is_empty() {
            return Ok(());
        }
        debug!("inserting {} rows into {table}", batch.len());
        self.client
            .insert(&table, batch, &InsertOptions::default())
            .await
            .map_err(|e| {
                error!("insert into {table} failed: {e}");
                Error::InsertFailed(e.to_string())
            })
    }

    /// Rows of the association `alias` of `model`, seen from `row`.
    pub async fn find_related(&mut self, model: &str, row: &Row, alias: &str) -> Result<ResultSet> {
        let query = self.related_query(model, row, alias)?;
        self.find(&query).await
    }

    /// Count of the association's rows, without materializing them.
    pub async fn count_related(&mut self, model: &str, row: &Row, alias: &str) -> Result<u64> {
        let query = self.related_query(model, row, alias)?.select(["count()"]);
        let result = self.find(&query).await?;
        result
            .scalar()
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                Error::QueryExecutionFailed(format!(
                    "count over association `{alias}` returned no numeric scalar"
                ))
            })
    }

    pub async fn has_related(&mut self, model: &str, row: &Row, alias: &str) -> Result<bool> {
        Ok(self.count_related(model, row, alias).await? > 0)
    }

    fn related_query(&self, model: &str, row: &Row, alias: &str) -> Result<SelectQuery> {
        let missing = || Error::UnknownAssociation {
            model: model.to_owned(),
            alias: alias.to_owned(),
        };
        let association = self.model(model)?.association(alias).ok_or_else(missing)?;
        let target = self.registry.get(&association.target).ok_or_else(missing)?;
        let query = SelectQuery::new().from(target.schema.table.clone());
        Ok(match association.kind {
            AssociationKind::HasMany => {
                let key = key_value(model, row, KEY_COLUMN)?;
                query.filter(Filter::new().eq(association.foreign_key.as_str(), key))
            }
            AssociationKind::HasOne => {
                let key = key_value(model, row, KEY_COLUMN)?;
                query
                    .filter(Filter::new().eq(association.foreign_key.as_str(), key))
                    .limit(1)
            }
            AssociationKind::BelongsTo => {
                let key = key_value(model, row, association.foreign_key.as_str())?;
                query.filter(Filter::new().eq(KEY_COLUMN, key)).limit(1)
            }
        })
    }
}

// Manual impl, the client type is not required to be Debug.
impl<C: Client> fmt::Debug for Cistern<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cistern")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<C: Client> Executor for Cistern<C> {
    async fn fetch(&mut self, sql: String, options: QueryOptions) -> Result<ResultSet> {
        debug!("fetch: {}", truncated(&sql));
        self.client.query(&sql, &options).await.map_err(|e| {
            error!("query failed: {e}");
            Error::QueryExecutionFailed(e.to_string())
        })
    }

    async fn execute(&mut self, sql: String) -> Result<()> {
        debug!("execute: {}", truncated(&sql));
        match self.client.query(&sql, &QueryOptions::default()).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("statement failed: {e}");
                Err(Error::QueryExecutionFailed(e.to_string()))
            }
        }
    }
}

fn key_value(model: &str, row: &Row, column: &str) -> Result<Value> {
    row.get(column).cloned().ok_or_else(|| Error::MissingColumn {
        model: model.to_owned(),
        column: column.to_owned(),
    })
}
