use crate::core::error::PortalError;
use url::Url;

/// Ensure the base path ends with `/` so `Url::join` keeps it intact when a
/// portal is mounted under a sub-path.
pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, PortalError> {
    let mut url = Url::parse(raw)?;
    let path = url.path();
    if path != "/" && !path.ends_with('/') {
        url.set_path(&format!("{path}/"));
    }
    Ok(url)
}
