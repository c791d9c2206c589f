//! # crawlkit-useragent
//!
//! Random `User-Agent` selection for outbound crawler requests.
//!
//! Each request gets one entry drawn uniformly from a fixed pool, set only
//! when the request does not already carry a `User-Agent` header. The random
//! source is injectable so selections can be pinned in tests.
//!
//! ```rust
//! use std::collections::HashMap;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use crawlkit_useragent::{UserAgentPool, inject};
//!
//! let pool = UserAgentPool::new(["agent-a", "agent-b"]);
//! let mut headers: HashMap<String, String> = HashMap::new();
//! inject(&mut headers, &pool, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! assert!(headers.contains_key("User-Agent"));
//! ```

pub mod error;
pub mod headers;
pub mod middleware;
pub mod pool;

pub use error::{UserAgentError, UserAgentResult};
pub use headers::HeaderCollection;
pub use middleware::{RandomUserAgent, USER_AGENT_HEADER, inject};
pub use pool::{USER_AGENT_LIST_SETTING, UserAgentPool};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{UserAgentError, UserAgentResult};
    pub use crate::headers::HeaderCollection;
    pub use crate::middleware::{RandomUserAgent, inject};
    pub use crate::pool::UserAgentPool;
}
