use camino::{Utf8Path, Utf8PathBuf};
use config::{Case, Environment, File, FileFormat};
use miette::Diagnostic;
use mvnup_updates::UpdatePolicy;
use mvnup_version::ComparisonMethod;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "mvnup.yaml";
const ENV_PREFIX: &str = "MVNUP";

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error("Could not load configuration from {path}")]
    #[diagnostic(help(
        "Check that {path} is valid YAML and that MVNUP_* environment variables hold valid values"
    ))]
    Load {
        path: Utf8PathBuf,
        #[source]
        source: config::ConfigError,
    },
}

/// Settings read from `mvnup.yaml` and `MVNUP_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub comparison_method: ComparisonMethod,
    pub allow_major_updates: bool,
    pub allow_minor_updates: bool,
    pub allow_incremental_updates: bool,
    pub allow_snapshots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let policy = UpdatePolicy::default();
        Self {
            comparison_method: ComparisonMethod::default(),
            allow_major_updates: policy.allow_major_updates,
            allow_minor_updates: policy.allow_minor_updates,
            allow_incremental_updates: policy.allow_incremental_updates,
            allow_snapshots: policy.allow_snapshots,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `mvnup.yaml` in the current
    /// directory when no path is given. Only an explicitly named file has to
    /// exist.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, Error> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Utf8Path>, env: Environment) -> Result<Self, Error> {
        let required = path.is_some();
        let path = path.unwrap_or(Utf8Path::new(DEFAULT_CONFIG_FILE));
        debug!(%path, required, "Loading configuration");

        let load_error = |source| Error::Load {
            path: path.to_owned(),
            source,
        };

        config::Config::builder()
            .add_source(File::new(path.as_str(), FileFormat::Yaml).required(required))
            .add_source(env.try_parsing(true).convert_case(Case::Kebab))
            .build()
            .map_err(load_error)?
            .try_deserialize()
            .map_err(load_error)
    }

    pub fn policy(&self) -> UpdatePolicy {
        UpdatePolicy {
            allow_major_updates: self.allow_major_updates,
            allow_minor_updates: self.allow_minor_updates,
            allow_incremental_updates: self.allow_incremental_updates,
            allow_snapshots: self.allow_snapshots,
        }
    }
}
