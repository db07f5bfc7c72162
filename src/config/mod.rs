//! Run configuration: command line, environment and credentials

pub mod credentials;
pub mod options;
pub mod validation;

pub use credentials::{
    CredentialSource, EnvSource, LazySecretsFile, NoSecrets, ProcessEnv, SecretsFile,
    resolve_token,
};
pub use options::{CliArgs, RunOptions, usage};
pub use validation::{PreconditionError, validate_input_paths};
