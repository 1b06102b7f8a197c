//! Named base locations for the portal API.
//!
//! Paths are relative to the client's base URL, without a leading `/`.

/// Current user's profile.
pub const PROFILE: &str = "api/profile";
/// Country list.
pub const COUNTRIES: &str = "api/countries";
/// Organisation records; address a single one via [`resource_path`].
pub const ORGANISATIONS: &str = "api/organisations";

/// Append `id` as a path segment to `base` to address a single sub-resource.
///
/// `id` is not validated here; a malformed identifier yields a malformed
/// location, which the server rejects.
pub fn resource_path(base: &str, id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}
