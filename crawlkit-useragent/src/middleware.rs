//! Per-request user-agent injection.

use crawlkit_settings::Settings;
use rand::Rng;
use tracing::trace;

use crate::error::UserAgentResult;
use crate::headers::HeaderCollection;
use crate::pool::UserAgentPool;

/// Name of the injected header.
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// Set `User-Agent` to a random pool entry unless the header is present.
///
/// An existing header is never overwritten, and a drawn empty string is not
/// set. Fails with [`UserAgentError::EmptyPool`](crate::UserAgentError::EmptyPool)
/// when the pool is empty, leaving `headers` unchanged.
pub fn inject<H, R>(headers: &mut H, pool: &UserAgentPool, rng: &mut R) -> UserAgentResult<()>
where
    H: HeaderCollection + ?Sized,
    R: Rng + ?Sized,
{
    let agent = pool.choose(rng)?;

    if agent.is_empty() || headers.contains_header(USER_AGENT_HEADER) {
        return Ok(());
    }

    trace!(user_agent = %agent, "Injecting user agent");
    headers.insert_header(USER_AGENT_HEADER, agent)
}

/// Injects a random user agent into each outbound request.
///
/// ```rust
/// use std::collections::HashMap;
/// use crawlkit_useragent::RandomUserAgent;
///
/// let middleware = RandomUserAgent::new(["agent-a", "agent-b"]);
/// let mut headers: HashMap<String, String> = HashMap::new();
/// middleware.process_request(&mut headers).unwrap();
///
/// assert!(headers.contains_key("User-Agent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomUserAgent {
    pool: UserAgentPool,
}

impl RandomUserAgent {
    /// Create a middleware from candidate values.
    pub fn new<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_pool(UserAgentPool::new(agents))
    }

    /// Create a middleware from an existing pool.
    pub fn with_pool(pool: UserAgentPool) -> Self {
        Self { pool }
    }

    /// Create a middleware from the `USER_AGENT_LIST` setting.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_pool(UserAgentPool::from_settings(settings))
    }

    /// Get the pool.
    pub fn pool(&self) -> &UserAgentPool {
        &self.pool
    }

    /// Inject using the thread-local random number generator.
    pub fn process_request<H>(&self, headers: &mut H) -> UserAgentResult<()>
    where
        H: HeaderCollection + ?Sized,
    {
        inject(headers, &self.pool, &mut rand::thread_rng())
    }

    /// Inject using a caller-supplied random number generator.
    pub fn process_request_with<H, R>(&self, headers: &mut H, rng: &mut R) -> UserAgentResult<()>
    where
        H: HeaderCollection + ?Sized,
        R: Rng + ?Sized,
    {
        inject(headers, &self.pool, rng)
    }
}
