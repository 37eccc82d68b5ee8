use serde::Serialize;

/// Body of the `/health` probe endpoint.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of the `/` welcome endpoint: service greeting plus running version.
#[derive(Serialize, Debug)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
}
