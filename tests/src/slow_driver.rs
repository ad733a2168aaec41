use schemata_core::{
    async_trait,
    driver::{Connection, Driver, Operation, Response},
    Result,
};
use std::{borrow::Cow, time::Duration};

/// Delays every operation by a fixed amount before handing it to the
/// wrapped driver.
#[derive(Debug)]
pub struct SlowDriver {
    inner: Box<dyn Driver>,
    delay: Duration,
}

impl SlowDriver {
    pub fn new(driver: Box<dyn Driver>, delay: Duration) -> Self {
        Self {
            inner: driver,
            delay,
        }
    }
}

#[async_trait]
impl Driver for SlowDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(SlowConnection {
            inner: self.inner.connect().await?,
            delay: self.delay,
        }))
    }

    fn max_connections(&self) -> Option<usize> {
        self.inner.max_connections()
    }
}

#[derive(Debug)]
pub struct SlowConnection {
    inner: Box<dyn Connection>,
    delay: Duration,
}

#[async_trait]
impl Connection for SlowConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        tokio::time::sleep(self.delay).await;
        self.inner.exec(operation).await
    }
}
