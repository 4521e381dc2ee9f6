//! Active provider resolution from multiple sources
//!
//! Checks sources in priority order (first hit wins):
//! 1. Explicit override set by the host
//! 2. Environment variable (`TEMPMAIL_PROVIDER` unless changed)
//! 3. Workspace config (.config/tempmail/config.yaml)
//! 4. User config (~/.config/tempmail/config.yaml)
//! 5. The registry default
//!
//! A source that names an unregistered provider fails the whole resolution.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{ConfigLevel, ConfigProvider, ConfigResult, FileConfigProvider};
use crate::logging::{LoggerExt, NoOpLogger, SharedLogger};
use crate::{log_debug, log_error};
use crate::providers::{validate_provider, MailProvider, ProviderSettings, DEFAULT_PROVIDER};

/// Environment variable checked for a provider selection
pub const DEFAULT_ENV_VAR: &str = "TEMPMAIL_PROVIDER";

/// Where the active provider selection came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    /// Set explicitly by the host application
    Override,
    /// Read from an environment variable
    Environment(String),
    /// Workspace-level config
    Workspace(String),
    /// User-level config
    User(String),
    /// Nothing selected; registry default
    Default,
}

impl SelectionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionSource::Override => "override",
            SelectionSource::Environment(_) => "environment",
            SelectionSource::Workspace(_) => "config:workspace",
            SelectionSource::User(_) => "config:user",
            SelectionSource::Default => "default",
        }
    }
}

impl std::fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionSource::Override => write!(f, "Host override"),
            SelectionSource::Environment(var) => write!(f, "Environment variable ${}", var),
            SelectionSource::Workspace(detail) | SelectionSource::User(detail) => write!(f, "{}", detail),
            SelectionSource::Default => write!(f, "Built-in default"),
        }
    }
}

/// The active provider with its merged settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: MailProvider,
    /// User settings overlaid with workspace settings
    pub settings: ProviderSettings,
    pub source: SelectionSource,
}

/// A configuration level: either a ready provider or a file opened on use
#[derive(Clone)]
enum ConfigSlot {
    Provider(Arc<dyn ConfigProvider>),
    File(PathBuf, ConfigLevel),
}

impl ConfigSlot {
    /// File slots pick up the resolver's logger at resolve time
    fn open(&self, logger: &SharedLogger) -> Arc<dyn ConfigProvider> {
        match self {
            ConfigSlot::Provider(config) => Arc::clone(config),
            ConfigSlot::File(path, level) => {
                Arc::new(FileConfigProvider::new(path, *level).with_logger(Arc::clone(logger)))
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfigSlot::Provider(config) => config.describe(),
            ConfigSlot::File(path, level) => format!("{} config ({})", level.as_str(), path.display()),
        }
    }
}

/// Resolves which mail provider a host should use
///
/// # Example
///
/// ```no_run
/// use tempmail_core::resolver::ProviderResolver;
///
/// # async fn run() -> tempmail_core::config::ConfigResult<()> {
/// let resolved = ProviderResolver::new()
///     .with_workspace_path("/path/to/workspace")
///     .resolve()
///     .await?;
/// println!("{} from {}", resolved.provider, resolved.source);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ProviderResolver {
    override_provider: Option<MailProvider>,
    env_var: Option<String>,
    workspace: Option<ConfigSlot>,
    user: Option<ConfigSlot>,
    logger: SharedLogger,
}

impl Default for ProviderResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderResolver {
    /// Resolver over the environment and the user config file
    pub fn new() -> Self {
        Self {
            user: Some(ConfigSlot::File(
                FileConfigProvider::user().path().to_path_buf(),
                ConfigLevel::User,
            )),
            ..Self::empty()
        }
    }

    /// Resolver with no sources at all; always yields the default
    pub fn empty() -> Self {
        Self {
            override_provider: None,
            env_var: None,
            workspace: None,
            user: None,
            logger: Arc::new(NoOpLogger),
        }
        .with_env_var(DEFAULT_ENV_VAR)
    }

    pub fn with_override(mut self, provider: MailProvider) -> Self {
        self.override_provider = Some(provider);
        self
    }

    /// Read the selection from `name` instead of `TEMPMAIL_PROVIDER`
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = Some(name.into());
        self
    }

    /// Ignore the environment
    pub fn without_env(mut self) -> Self {
        self.env_var = None;
        self
    }

    pub fn with_user(mut self, config: Arc<dyn ConfigProvider>) -> Self {
        self.user = Some(ConfigSlot::Provider(config));
        self
    }

    pub fn with_workspace(mut self, config: Arc<dyn ConfigProvider>) -> Self {
        self.workspace = Some(ConfigSlot::Provider(config));
        self
    }

    /// Use the workspace config file under `root`
    ///
    /// The file is opened on each `resolve`, with whatever logger is set then.
    pub fn with_workspace_path(mut self, root: impl AsRef<Path>) -> Self {
        let path = FileConfigProvider::workspace(root).path().to_path_buf();
        self.workspace = Some(ConfigSlot::File(path, ConfigLevel::Workspace));
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Pick the active provider and merge its settings
    pub async fn resolve(&self) -> ConfigResult<ResolvedProvider> {
        let user = self.user.as_ref().map(|slot| slot.open(&self.logger));
        let workspace = self.workspace.as_ref().map(|slot| slot.open(&self.logger));

        let (provider, source) = self.select(workspace.as_ref(), user.as_ref()).await?;
        let settings = settings_for(provider, [user.as_ref(), workspace.as_ref()]).await?;

        self.logger
            .info_fmt(format_args!("Using mail provider {} ({})", provider.label(), source));

        Ok(ResolvedProvider { provider, settings, source })
    }

    async fn select(
        &self,
        workspace: Option<&Arc<dyn ConfigProvider>>,
        user: Option<&Arc<dyn ConfigProvider>>,
    ) -> ConfigResult<(MailProvider, SelectionSource)> {
        if let Some(provider) = self.override_provider {
            return Ok((provider, SelectionSource::Override));
        }

        if let Some(var) = &self.env_var {
            if let Ok(value) = env::var(var) {
                let value = value.trim();
                if value.is_empty() {
                    log_debug!(self.logger, "Ignoring empty ${}", var);
                } else {
                    let provider = validate_provider(value).inspect_err(|e| {
                        log_error!(self.logger, "${}: {}", var, e);
                    })?;
                    return Ok((provider, SelectionSource::Environment(var.clone())));
                }
            }
        }

        if let Some(workspace) = workspace {
            if let Some(provider) = workspace.get_mail_provider().await? {
                return Ok((provider, SelectionSource::Workspace(workspace.describe())));
            }
        }

        if let Some(user) = user {
            if let Some(provider) = user.get_mail_provider().await? {
                return Ok((provider, SelectionSource::User(user.describe())));
            }
        }

        Ok((DEFAULT_PROVIDER, SelectionSource::Default))
    }
}

/// Merge settings for `provider`; later layers win
async fn settings_for(
    provider: MailProvider,
    layers: [Option<&Arc<dyn ConfigProvider>>; 2],
) -> ConfigResult<ProviderSettings> {
    let mut merged = ProviderSettings::new(provider);

    for config in layers.into_iter().flatten() {
        if let Some(found) = config
            .get_provider_settings()
            .await?
            .into_iter()
            .find(|s| s.provider == provider)
        {
            merged = merged.merge(found);
        }
    }

    Ok(merged)
}

impl std::fmt::Debug for ProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderResolver")
            .field("override_provider", &self.override_provider)
            .field("env_var", &self.env_var)
            .field("workspace", &self.workspace.as_ref().map(ConfigSlot::describe))
            .field("user", &self.user.as_ref().map(ConfigSlot::describe))
            .finish()
    }
}
