use crate::{QueryOptions, Result, ResultSet};
use std::future::Future;

/// Anything able to run finished SQL text.
///
/// [`Cistern`](crate::Cistern) is the canonical implementation, tests plug
/// in their own. `fetch` is for statements producing rows, `execute` for
/// DDL and anything else where only success matters.
pub trait Executor: Send {
    fn fetch(
        &mut self,
        sql: String,
        options: QueryOptions,
    ) -> impl Future<Output = Result<ResultSet>> + Send;

    fn execute(&mut self, sql: String) -> impl Future<Output = Result<()>> + Send;
}
