/// Hand-off to the host's navigation and redirect primitives
///
/// The host framework performs the actual view transition or HTTP redirect.
/// This module only produces the URL and passes it across the [`Navigator`]
/// boundary, or packages it as a [`Redirect`].

use std::fmt;

use crate::diagnostics::Diagnostic;
use crate::error::RouteError;
use crate::generator::{Href, NavigationRequest, UrlGenerator};

/// The host's navigation primitive
pub trait Navigator {
    type Error: fmt::Display;

    fn navigate(&self, url: &str) -> Result<(), Self::Error>;
}

/// HTTP status used for a redirect
///
/// # Examples
///
/// ```
/// use rhtmx_links::RedirectStatus;
///
/// assert_eq!(RedirectStatus::default().code(), 307);
/// assert_eq!(RedirectStatus::try_from(301u16), Ok(RedirectStatus::MovedPermanently));
/// assert!(RedirectStatus::try_from(200u16).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RedirectStatus {
    /// 301 - permanent, method may change
    MovedPermanently,
    /// 302 - temporary, method may change
    Found,
    /// 303 - follow with GET
    SeeOther,
    /// 307 - temporary, method preserved
    #[default]
    TemporaryRedirect,
    /// 308 - permanent, method preserved
    PermanentRedirect,
}

impl RedirectStatus {
    pub fn code(self) -> u16 {
        match self {
            Self::MovedPermanently => 301,
            Self::Found => 302,
            Self::SeeOther => 303,
            Self::TemporaryRedirect => 307,
            Self::PermanentRedirect => 308,
        }
    }

    pub fn is_permanent(self) -> bool {
        matches!(self, Self::MovedPermanently | Self::PermanentRedirect)
    }
}

impl TryFrom<u16> for RedirectStatus {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            301 => Ok(Self::MovedPermanently),
            302 => Ok(Self::Found),
            303 => Ok(Self::SeeOther),
            307 => Ok(Self::TemporaryRedirect),
            308 => Ok(Self::PermanentRedirect),
            other => Err(other),
        }
    }
}

/// A resolved redirect, ready for the host's redirect helper
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub location: String,
    pub status: RedirectStatus,
    pub diagnostics: Vec<Diagnostic>,
}

impl UrlGenerator {
    /// Resolves `request` and hands the URL to `navigator`
    ///
    /// Navigator failures come back as [`RouteError::Navigation`].
    pub fn navigate<N: Navigator>(
        &self,
        navigator: &N,
        request: &NavigationRequest<'_>,
    ) -> Result<Href, RouteError> {
        let href = self.resolve(request)?;
        navigator
            .navigate(href.as_str())
            .map_err(|e| RouteError::Navigation {
                path: request.target.template().to_string(),
                url: href.to_string(),
                message: e.to_string(),
            })?;
        tracing::debug!(url = %href, "navigated");
        Ok(href)
    }

    /// Resolves `request` into a redirect with the given status
    pub fn redirect(
        &self,
        request: &NavigationRequest<'_>,
        status: RedirectStatus,
    ) -> Result<Redirect, RouteError> {
        let href = self.resolve(request)?;
        let diagnostics = href.diagnostics().to_vec();
        Ok(Redirect {
            location: href.into_string(),
            status,
            diagnostics,
        })
    }
}
