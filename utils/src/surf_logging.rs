use crate::url_builder::redacted;
use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response, Result};

/// Query parameters that must never reach the logs.
const SECRET_PARAMS: &[&str] = &["key"];

/// Logs every outgoing request and how it ended.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfLogging;

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(&self, req: Request, client: Client, next: Next<'_>) -> Result<Response> {
        let method = req.method();
        let url = redacted(req.url(), SECRET_PARAMS);
        log::debug!("--> {} {}", method, url);

        let started = Instant::now();
        match next.run(req, client).await {
            Ok(response) => {
                log::debug!(
                    "<-- {} {} {} ({:?})",
                    response.status(),
                    method,
                    url,
                    started.elapsed()
                );
                Ok(response)
            }
            Err(error) => {
                log::warn!(
                    "<-- {} {} failed after {:?}: {}",
                    method,
                    url,
                    started.elapsed(),
                    error
                );
                Err(error)
            }
        }
    }
}
