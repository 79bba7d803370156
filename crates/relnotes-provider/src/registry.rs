//! Provider registry.

use std::sync::Arc;

use relnotes_config::GithubConfig;
use tracing::debug;

use crate::{GitHubProvider, ProviderError, ProviderResult, VersionControlProvider};

/// Ordered set of providers, selected by repository URL.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn VersionControlProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the GitHub provider.
    ///
    /// The default token is read from the environment variable named by
    /// `config.token_env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be built.
    pub fn from_config(config: &GithubConfig) -> ProviderResult<Self> {
        let token = std::env::var(&config.token_env).ok();
        debug!(
            token_env = %config.token_env,
            default_token = token.is_some(),
            "configuring GitHub provider"
        );

        let github = GitHubProvider::new(config)?.with_default_token(token);
        Ok(Self::new().with_provider(github))
    }

    /// Adds a provider, builder style.
    #[must_use]
    pub fn with_provider(mut self, provider: impl VersionControlProvider + 'static) -> Self {
        self.register(provider);
        self
    }

    /// Adds a provider after those already registered.
    pub fn register(&mut self, provider: impl VersionControlProvider + 'static) {
        self.providers.push(Arc::new(provider));
    }

    /// Returns the first provider supporting `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unsupported`] if none does.
    pub fn select(&self, url: &str) -> ProviderResult<Arc<dyn VersionControlProvider>> {
        self.providers
            .iter()
            .find(|provider| provider.supports(url))
            .cloned()
            .ok_or_else(|| ProviderError::Unsupported(url.to_string()))
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.name()))
            .finish()
    }
}
