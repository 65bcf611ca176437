//! Proxy: a stand-in with the same interface that controls access to the
//! real object. Here it logs every query before forwarding it.

use std::cell::{Cell, RefCell};
use std::io::Write;

use crate::error::Result;

pub trait Database {
    fn query(&self, sql: &str) -> String;
}

#[derive(Default)]
pub struct InMemoryDatabase;

impl Database for InMemoryDatabase {
    fn query(&self, _sql: &str) -> String {
        "query_result".to_string()
    }
}

/// Records each query into `log` and forwards to the wrapped database.
pub struct LoggingProxy<D: Database> {
    inner: D,
    log: RefCell<Vec<String>>,
    forwarded: Cell<usize>,
}

impl<D: Database> LoggingProxy<D> {
    pub fn new(inner: D) -> Self {
        LoggingProxy {
            inner,
            log: Default::default(),
            forwarded: Cell::new(0),
        }
    }

    pub fn forwarded(&self) -> usize {
        self.forwarded.get()
    }

    /// Drain the log lines collected so far.
    pub fn take_log(&self) -> Vec<String> {
        self.log.take()
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Database> Database for LoggingProxy<D> {
    fn query(&self, sql: &str) -> String {
        tracing::debug!(sql, "forwarding query");
        self.log.borrow_mut().push(format!("Query log: {sql}"));
        self.forwarded.set(self.forwarded.get() + 1);
        self.inner.query(sql)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let db = LoggingProxy::new(InMemoryDatabase);

    let result = db.query("this_is_a_query");
    for line in db.take_log() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "Result: {result}")?;
    writeln!(out, "Queries forwarded: {}", db.forwarded())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoDatabase;

    impl Database for EchoDatabase {
        fn query(&self, sql: &str) -> String {
            sql.to_uppercase()
        }
    }

    #[test]
    fn test_proxy_is_transparent() {
        let proxy = LoggingProxy::new(EchoDatabase);
        assert_eq!(proxy.query("select 1"), "SELECT 1");
    }

    #[test]
    fn test_proxy_logs_and_counts() {
        let proxy = LoggingProxy::new(InMemoryDatabase);
        proxy.query("a");
        proxy.query("b");

        assert_eq!(proxy.forwarded(), 2);
        assert_eq!(proxy.take_log(), vec!["Query log: a", "Query log: b"]);
        assert!(proxy.take_log().is_empty());
    }

    #[test]
    fn test_proxies_stack() {
        let outer = LoggingProxy::new(LoggingProxy::new(InMemoryDatabase));
        assert_eq!(outer.query("q"), "query_result");
        assert_eq!(outer.forwarded(), 1);
        assert_eq!(outer.into_inner().forwarded(), 1);
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Query log: this_is_a_query\nResult: query_result\nQueries forwarded: 1\n"
        );
    }
}
