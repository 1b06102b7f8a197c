//! Type-safe endpoint definitions.

use crate::core::{PortalError, routes};
use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;

/// Common trait implemented by every portal API endpoint.
pub trait Endpoint {
    type Output: DeserializeOwned + Send + 'static;

    /// HTTP verb. Every portal read endpoint is a plain `GET`.
    fn method(&self) -> Method {
        Method::GET
    }
    /// Relative API path, without a leading `/`.
    fn path(&self) -> Cow<'static, str>;
    /// Decode the response body into [`Endpoint::Output`].
    fn parse(&self, body: String) -> Result<Self::Output, PortalError> {
        Ok(serde_json::from_str(&body)?)
    }
}

/// GET /api/profile
pub struct Profile;
impl Endpoint for Profile {
    type Output = Value;
    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(routes::PROFILE)
    }
}

/// GET /api/countries
pub struct Countries;
impl Endpoint for Countries {
    type Output = Value;
    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(routes::COUNTRIES)
    }
}

/// GET /api/organisations/<id>
pub struct OrganisationDetail<'a>(pub &'a str);
impl<'a> Endpoint for OrganisationDetail<'a> {
    type Output = Value;
    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(routes::resource_path(routes::ORGANISATIONS, self.0))
    }
}
