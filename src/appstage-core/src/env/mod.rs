use slog::{debug, Logger};
use std::env;

/// Environment variable holding the primary database URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable holding the application secret key.
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// A platform-attached database, discovered from one environment variable
/// named `<PREFIX><NAME>_URL`. The URL is the raw variable value; parsing it
/// is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedDatabase {
    pub name: String,
    pub url: String,
}

/// The primary database URL, if the platform provided one.
pub fn database_url() -> Option<String> {
    env::var(DATABASE_URL_VAR).ok()
}

/// The application secret key, if the platform provided one.
pub fn secret_key() -> Option<String> {
    env::var(SECRET_KEY_VAR).ok()
}

/// Discovers every database the platform attached to the application.
///
/// Scans the process environment for variables starting with `prefix` and
/// derives each database name from the first `_`-delimited token after the
/// prefix, so `<PREFIX>TEAL_URL` yields `TEAL`. Results are sorted by name.
/// Variables that are not valid unicode are skipped.
pub fn attached_databases(log: &Logger, prefix: &str) -> Vec<AttachedDatabase> {
    let vars = env::vars_os().filter_map(|(name, value)| {
        Some((name.into_string().ok()?, value.into_string().ok()?))
    });
    let found = attached_databases_from(vars, prefix);
    for database in &found {
        debug!(log, "Discovered attached database '{}'.", database.name);
    }
    found
}

fn attached_databases_from(
    vars: impl Iterator<Item = (String, String)>,
    prefix: &str,
) -> Vec<AttachedDatabase> {
    let mut found: Vec<AttachedDatabase> = vars
        .filter_map(|(var, url)| {
            let remainder = var.strip_prefix(prefix)?;
            let name = remainder.split('_').next()?;
            if name.is_empty() {
                return None;
            }
            Some(AttachedDatabase {
                name: name.to_string(),
                url,
            })
        })
        .collect();
    found.sort_by(|a, b| a.name.cmp(&b.name));
    found
}
