/// An addressable relational system. Owned exclusively by the transfer that
/// opens it; closed when the transfer ends.
#[derive(Debug, Clone)]
pub struct Connection {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub schema: Option<String>,
    pub username: String,
    pub password: String,
}

/// Immutable descriptor of one transfer. The engine does not read
/// configuration files or environment variables; everything it needs is in
/// here and in the opened source/target handles the caller provides.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub query: String,
    pub target_schema: Option<String>,
    pub target_table: String,
    pub drop_target_table: bool,
    pub create_target_table: bool,
}
