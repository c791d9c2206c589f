//! Connection factory and the connection handle it returns.

use bson::doc;
use crawlkit_settings::{Environment, Settings};
use mongodb::{Client, Database};
use tracing::{debug, info, warn};

use crate::config::ConnectionParams;
use crate::error::{MongoError, MongoResult};

/// A live MongoDB connection with a selected database.
///
/// The handle is owned by the caller. The factory neither tracks nor closes
/// it; the driver's client is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
    params: ConnectionParams,
}

impl MongoConnection {
    /// Get the selected database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get the underlying MongoDB client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Get the parameters this connection was opened with.
    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    /// Whether the connection was authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.params.credential().is_some()
    }
}

impl std::fmt::Debug for MongoConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConnection")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Opens MongoDB connections from crawler settings.
///
/// ```rust,ignore
/// use crawlkit_mongo::ConnectionFactory;
/// use crawlkit_settings::{Environment, Settings};
///
/// let settings = Settings::new().set("BOT_NAME", "crawler");
/// let conn = ConnectionFactory::build(&settings, &Environment::from_process()).await?;
/// let pages = conn.database().collection::<bson::Document>("pages");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionFactory;

impl ConnectionFactory {
    /// Resolve parameters and open a connection.
    ///
    /// Fails with [`MongoError::Config`] before touching the network when
    /// the parameters cannot be resolved.
    pub async fn build(settings: &Settings, environment: &Environment) -> MongoResult<MongoConnection> {
        let params = ConnectionParams::resolve(settings, environment)?;
        Self::connect(params).await
    }

    /// Open a connection with already resolved parameters.
    ///
    /// A single `ping` round trip is made so that the returned handle is
    /// live and, when a credential is configured, authenticated. When only
    /// one of username and password is set, authentication is skipped and
    /// the connection is opened anonymously. Failures are not retried.
    pub async fn connect(params: ConnectionParams) -> MongoResult<MongoConnection> {
        if params.has_partial_credential() {
            debug!(
                address = %params.address(),
                "Only one of username and password configured; skipping authentication"
            );
        }

        let client = Client::with_options(params.to_client_options())
            .map_err(|e| MongoError::connection(format!("failed to create client: {}", e)))?;
        let database = client.database(&params.database);

        if let Err(e) = database.run_command(doc! { "ping": 1 }, None).await {
            let err = MongoError::from(e);
            warn!(
                address = %params.address(),
                database = %params.database,
                error = %err,
                "MongoDB connection failed"
            );
            return Err(err);
        }

        let authenticated = params.credential().is_some();
        info!(
            host = %params.host,
            port = params.port,
            database = %params.database,
            authenticated,
            "MongoDB connection established"
        );

        Ok(MongoConnection {
            client,
            database,
            params,
        })
    }
}
