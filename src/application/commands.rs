//! # Alternate Commands
//!
//! The open / open-in-split / create flows. Each step yields a `Result` and the steps are
//! glued together with the outcome combinators, so the first failure short-circuits the rest
//! of the flow without any host call being made.

use futures::FutureExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::config::PluginConfig;
use crate::domain::error::{Error, Result};
use crate::domain::outcome::{
    AsyncResult, async_chain_ok, catch_panic, chain_ok, from_future, map_error, map_ok, to_boolean,
};
use crate::domain::traits::{AlternateResolver, EditorHost};
use crate::domain::types::{Candidate, Pane, Projections};
use crate::infrastructure::projections;

const CREATE_PROMPT: &str = "Create which alternate file?";

/// Run a host call, routing both its error and any panic into `Error::Host`.
fn host_call<'a, T>(call: AsyncResult<'a, T, String>) -> AsyncResult<'a, T, Error>
where
    T: Send + 'a,
{
    async move {
        let outcome = catch_panic(from_future(call)).await.map_err(Error::from);
        chain_ok(map_error(Error::Host))(outcome)
    }
    .boxed()
}

pub struct AlternateCommands {
    config: PluginConfig,
    resolver: Arc<dyn AlternateResolver>,
    host: Arc<dyn EditorHost>,
}

impl AlternateCommands {
    pub fn new(
        config: PluginConfig,
        resolver: Arc<dyn AlternateResolver>,
        host: Arc<dyn EditorHost>,
    ) -> Self {
        Self {
            config,
            resolver,
            host,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn host(&self) -> &Arc<dyn EditorHost> {
        &self.host
    }

    /// Open the best existing alternate of `current` in `pane`.
    pub async fn open(&self, current: &Path, pane: Pane) -> Result<PathBuf> {
        let projections =
            projections::find_and_load(current, &self.config.projections_file).await;
        let candidates = chain_ok(|p: Projections| self.candidates(current, &p))(projections);
        let candidates = map_error(|err: Error| match err {
            Error::NoCandidates { path } => Error::NoAlternate { path },
            other => other,
        })(candidates);
        let target = async_chain_ok(|paths| self.first_existing(current, paths))(candidates).await;
        async_chain_ok(|path| self.show(path, pane))(target).await
    }

    /// Create an alternate of `current` (asking which one if there are several) and open it.
    pub async fn create(&self, current: &Path, pane: Pane) -> Result<PathBuf> {
        let projections =
            projections::find_and_load(current, &self.config.projections_file).await;
        let candidates = chain_ok(|p: Projections| self.candidates(current, &p))(projections);
        let chosen = async_chain_ok(|paths| self.choose(paths))(candidates).await;
        let created = async_chain_ok(|path| self.materialize(path))(chosen).await;

        if self.config.open_after_create {
            async_chain_ok(|path| self.show(path, pane))(created).await
        } else {
            created
        }
    }

    /// Resolver suggestions with existence flags, best first.
    pub async fn inspect(&self, current: &Path) -> Result<Vec<Candidate>> {
        let projections =
            projections::find_and_load(current, &self.config.projections_file).await;
        let paths = chain_ok(|p: Projections| self.candidates(current, &p))(projections)?;

        let mut candidates = Vec::with_capacity(paths.len());
        for path in paths {
            let exists = self.exists(&path).await?;
            candidates.push(Candidate { path, exists });
        }
        Ok(candidates)
    }

    fn candidates(&self, current: &Path, projections: &Projections) -> Result<Vec<PathBuf>> {
        let paths: Vec<PathBuf> = self
            .resolver
            .alternates(current, projections)
            .into_iter()
            .map(|path| projections.root.join(path))
            .collect();

        if paths.is_empty() {
            return Err(Error::NoCandidates {
                path: current.to_path_buf(),
            });
        }
        tracing::debug!(
            "{} alternate candidate(s) for {}",
            paths.len(),
            current.display()
        );
        Ok(paths)
    }

    async fn first_existing(&self, current: &Path, paths: Vec<PathBuf>) -> Result<PathBuf> {
        for path in paths {
            if self.exists(&path).await? {
                return Ok(path);
            }
        }
        Err(Error::NoAlternate {
            path: current.to_path_buf(),
        })
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        catch_panic(self.host.file_exists(path))
            .await
            .map_err(Error::from)
    }

    async fn choose(&self, mut paths: Vec<PathBuf>) -> Result<PathBuf> {
        if paths.len() == 1 || !self.config.prompt_on_multiple {
            return Ok(paths.swap_remove(0));
        }

        let picked = host_call(self.host.pick(CREATE_PROMPT, &paths)).await;
        chain_ok(|choice: Option<PathBuf>| choice.ok_or(Error::Cancelled))(picked)
    }

    async fn materialize(&self, path: PathBuf) -> Result<PathBuf> {
        let created = host_call(self.host.create_file(&path)).await;
        if to_boolean(&created) {
            tracing::info!("Created alternate file {}", path.display());
        }
        map_ok(|()| path.clone())(created)
    }

    async fn show(&self, path: PathBuf, pane: Pane) -> Result<PathBuf> {
        let opened = host_call(self.host.open_file(&path, pane)).await;
        map_ok(|()| path.clone())(opened)
    }
}
