//! Service-level test harness backed by a shared `PostgreSQL` container.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
