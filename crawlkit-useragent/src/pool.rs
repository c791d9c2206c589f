//! Fixed pool of candidate user agents.

use crawlkit_settings::Settings;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{UserAgentError, UserAgentResult};

/// Settings key holding the list of user agents.
pub const USER_AGENT_LIST_SETTING: &str = "USER_AGENT_LIST";

/// Ordered pool of user-agent strings.
///
/// The pool is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    /// Create a pool from candidate values.
    pub fn new<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
        }
    }

    /// Read the pool from the `USER_AGENT_LIST` setting.
    ///
    /// A missing setting yields an empty pool.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.get_list(USER_AGENT_LIST_SETTING))
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the pool has no candidates.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterate over candidates in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(String::as_str)
    }

    /// Draw one candidate uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> UserAgentResult<&str> {
        self.agents
            .choose(rng)
            .map(String::as_str)
            .ok_or(UserAgentError::EmptyPool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_choose_from_single() {
        let pool = UserAgentPool::new(["only"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.choose(&mut rng).unwrap(), "only");
    }

    #[test]
    fn test_choose_empty() {
        let pool = UserAgentPool::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.choose(&mut rng).unwrap_err().is_empty_pool());
    }

    #[test]
    fn test_choose_is_deterministic_for_seed() {
        let pool = UserAgentPool::new(["a", "b", "c", "d"]);
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..16)
                .map(|_| pool.choose(&mut rng).unwrap().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(42), draws(42));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings::new().set(USER_AGENT_LIST_SETTING, vec!["a", "b"]);
        let pool = UserAgentPool::from_settings(&settings);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["a", "b"]);

        let pool = UserAgentPool::from_settings(&Settings::new());
        assert!(pool.is_empty());
    }
}
