//! Domain Entities

mod deploy_params;

pub use deploy_params::{
    DeployParams, RemoteLayout, DEFAULT_REMOTE_ROOT, PATH_EXCLUDES, PATH_KEEP_REPORTS,
    PATH_PROJECT, PATH_REMOTE_ROOT, PATH_SSH_HOST, PATH_SSH_USERNAME,
};
