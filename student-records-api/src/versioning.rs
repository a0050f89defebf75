//! Header-based version routing.
//!
//! Several handlers can bind to the same path and method, one per
//! representation version. The version is read from the media type the
//! caller sends (`application/vnd.hedtech.integration.v{version}+json`) and
//! selects exactly one handler; unqualified requests go to the entry flagged
//! default.

use axum::{
    extract::{Request, State},
    handler::Handler,
    http::{header, HeaderMap, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{any, MethodFilter, MethodRouter},
    Router,
};
use std::{cmp::Ordering, fmt, str::FromStr, sync::Arc};
use thiserror::Error;
use tower::ServiceExt;

use crate::{error::ApiError, AppState};

pub const INTEGRATION_MEDIA_PREFIX: &str = "application/vnd.hedtech.integration";
pub const LEGACY_MEDIA_PREFIX: &str = "application/vnd.ellucian";
pub const MEDIA_TYPE_HEADER: &str = "x-media-type";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version '{0}'")]
    Malformed(String),

    #[error("Version '{0}' is not supported for this resource")]
    NotSupported(String),
}

impl From<VersionError> for ApiError {
    fn from(err: VersionError) -> Self {
        match err {
            VersionError::Malformed(_) => ApiError::BadRequest(err.to_string()),
            VersionError::NotSupported(_) => ApiError::NotAcceptable(err.to_string()),
        }
    }
}

/// Representation version of a resource, `major[.minor[.patch]]`.
///
/// Ordering and equality are numeric; `precision` only records how many
/// components were written so `6` and `6.1.0` display the way they were
/// registered.
#[derive(Debug, Clone, Copy)]
pub struct ApiVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    precision: u8,
}

impl ApiVersion {
    pub const fn major(major: u16) -> Self {
        Self {
            major,
            minor: 0,
            patch: 0,
            precision: 1,
        }
    }

    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
            precision: 3,
        }
    }

    fn key(&self) -> (u16, u16, u16) {
        (self.major, self.minor, self.patch)
    }
}

impl PartialEq for ApiVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ApiVersion {}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            1 => write!(f, "{}", self.major),
            2 => write!(f, "{}.{}", self.major, self.minor),
            _ => write!(f, "{}.{}.{}", self.major, self.minor, self.patch),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::Malformed(s.to_string());
        let parts = s
            .split('.')
            .map(|p| p.parse::<u16>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [major] => Ok(Self::major(*major)),
            [major, minor] => Ok(Self {
                major: *major,
                minor: *minor,
                patch: 0,
                precision: 2,
            }),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(malformed()),
        }
    }
}

/// Which representation family a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFamily {
    Integration,
    Legacy,
}

impl MediaFamily {
    fn prefix(&self) -> &'static str {
        match self {
            MediaFamily::Integration => INTEGRATION_MEDIA_PREFIX,
            MediaFamily::Legacy => LEGACY_MEDIA_PREFIX,
        }
    }

    pub fn media_type(&self, version: ApiVersion) -> String {
        format!("{}.v{}+json", self.prefix(), version)
    }
}

/// The version a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedVersion {
    /// No vendor media type, or one without a version.
    Unqualified,
    /// Only a major version, e.g. `v11`.
    Major(u16),
    Exact(ApiVersion),
}

impl RequestedVersion {
    /// Read the requested version for `method` from the request headers.
    ///
    /// Reads go by `Accept`; writes by `Content-Type`, then `Accept`.
    pub fn from_headers(method: &Method, headers: &HeaderMap) -> Result<Self, VersionError> {
        let candidates = if method == Method::POST || method == Method::PUT {
            vec![header::CONTENT_TYPE, header::ACCEPT]
        } else {
            vec![header::ACCEPT]
        };

        for name in &candidates {
            for value in headers.get_all(name) {
                let Ok(value) = value.to_str() else { continue };
                if let Some(requested) = Self::from_media_types(value)? {
                    if requested != RequestedVersion::Unqualified {
                        return Ok(requested);
                    }
                }
            }
        }
        Ok(RequestedVersion::Unqualified)
    }

    /// Parse a comma-separated media type list; `None` if it names no vendor type.
    pub fn from_media_types(value: &str) -> Result<Option<Self>, VersionError> {
        let mut found = None;
        for media in value.split(',') {
            let media = media
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();

            let rest = [INTEGRATION_MEDIA_PREFIX, LEGACY_MEDIA_PREFIX]
                .iter()
                .find_map(|prefix| media.strip_prefix(prefix));
            let Some(rest) = rest else { continue };

            if rest == "+json" {
                found.get_or_insert(RequestedVersion::Unqualified);
                continue;
            }

            let version = rest
                .strip_prefix(".v")
                .and_then(|r| r.strip_suffix("+json"))
                .ok_or_else(|| VersionError::Malformed(media.clone()))?;

            let requested = if version.contains('.') {
                RequestedVersion::Exact(version.parse()?)
            } else {
                let major = version
                    .parse::<u16>()
                    .map_err(|_| VersionError::Malformed(media.clone()))?;
                RequestedVersion::Major(major)
            };
            return Ok(Some(requested));
        }
        Ok(found)
    }
}

impl fmt::Display for RequestedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedVersion::Unqualified => f.write_str("default"),
            RequestedVersion::Major(major) => write!(f, "{}", major),
            RequestedVersion::Exact(version) => write!(f, "{}", version),
        }
    }
}

struct VersionEntry {
    version: ApiVersion,
    family: MediaFamily,
    is_default: bool,
    handler: MethodRouter<AppState>,
}

#[derive(Default)]
struct VersionTable {
    entries: Vec<VersionEntry>,
    /// Serves every version, used for unsupported mutation stubs.
    fallback: Option<MethodRouter<AppState>>,
}

impl VersionTable {
    fn select(&self, requested: RequestedVersion) -> Option<&VersionEntry> {
        match requested {
            RequestedVersion::Unqualified => self.entries.iter().find(|e| e.is_default),
            RequestedVersion::Major(major) => self
                .entries
                .iter()
                .filter(|e| e.version.major == major)
                .max_by_key(|e| e.version),
            RequestedVersion::Exact(version) => {
                self.entries.iter().find(|e| e.version == version)
            }
        }
    }

    async fn dispatch(&self, state: AppState, request: Request) -> Response {
        let requested = RequestedVersion::from_headers(request.method(), request.headers());

        let selected = match requested {
            Ok(requested) => self
                .select(requested)
                .ok_or_else(|| VersionError::NotSupported(requested.to_string())),
            Err(err) => Err(err),
        };

        match selected {
            Ok(entry) => {
                tracing::debug!(
                    method = %request.method(),
                    uri = %request.uri(),
                    version = %entry.version,
                    "Dispatching versioned request"
                );
                let media_type = entry.family.media_type(entry.version);
                let mut response = entry
                    .handler
                    .clone()
                    .with_state::<()>(state)
                    .oneshot(request)
                    .await
                    .unwrap_or_else(|never| match never {});
                if let Ok(value) = HeaderValue::from_str(&media_type) {
                    response.headers_mut().insert(MEDIA_TYPE_HEADER, value);
                }
                response
            }
            Err(err) => match &self.fallback {
                Some(fallback) => fallback
                    .clone()
                    .with_state::<()>(state)
                    .oneshot(request)
                    .await
                    .unwrap_or_else(|never| match never {}),
                None => {
                    tracing::warn!(
                        method = %request.method(),
                        uri = %request.uri(),
                        error = %err,
                        "No handler for requested version"
                    );
                    ApiError::from(err).into_response()
                }
            },
        }
    }
}

/// Builder for the per-path, per-method version tables.
#[derive(Default)]
pub struct VersionedRoutes {
    paths: Vec<(&'static str, Vec<(Method, VersionTable)>)>,
}

impl VersionedRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&mut self, path: &'static str, method: Method) -> &mut VersionTable {
        let index = match self.paths.iter().position(|(p, _)| *p == path) {
            Some(index) => index,
            None => {
                self.paths.push((path, Vec::new()));
                self.paths.len() - 1
            }
        };
        let methods = &mut self.paths[index].1;
        let index = match methods.iter().position(|(m, _)| *m == method) {
            Some(index) => index,
            None => {
                methods.push((method, VersionTable::default()));
                methods.len() - 1
            }
        };
        &mut methods[index].1
    }

    fn register<H, T>(
        mut self,
        path: &'static str,
        method: Method,
        version: ApiVersion,
        family: MediaFamily,
        is_default: bool,
        handler: H,
    ) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        let table = self.table(path, method.clone());
        let is_default = if is_default && table.entries.iter().any(|e| e.is_default) {
            tracing::warn!(
                path,
                %method,
                %version,
                "A default version is already registered; keeping the first"
            );
            false
        } else {
            is_default
        };

        table.entries.push(VersionEntry {
            version,
            family,
            is_default,
            handler: any(handler),
        });
        self
    }

    /// Register a frozen, non-default integration version.
    pub fn version<H, T>(
        self,
        path: &'static str,
        method: Method,
        version: ApiVersion,
        handler: H,
    ) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.register(path, method, version, MediaFamily::Integration, false, handler)
    }

    /// Register the integration version served to unqualified requests.
    pub fn default_version<H, T>(
        self,
        path: &'static str,
        method: Method,
        version: ApiVersion,
        handler: H,
    ) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.register(path, method, version, MediaFamily::Integration, true, handler)
    }

    /// Register a legacy (`application/vnd.ellucian`) version.
    pub fn legacy<H, T>(
        self,
        path: &'static str,
        method: Method,
        version: ApiVersion,
        is_default: bool,
        handler: H,
    ) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.register(path, method, version, MediaFamily::Legacy, is_default, handler)
    }

    /// Register a handler that answers any version this method has no entry for.
    pub fn unsupported<H, T>(mut self, path: &'static str, method: Method, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.table(path, method).fallback = Some(any(handler));
        self
    }

    /// Fold another builder's registrations into this one.
    pub fn merge(mut self, other: VersionedRoutes) -> Self {
        for (path, methods) in other.paths {
            for (method, table) in methods {
                let target = self.table(path, method);
                target.entries.extend(table.entries);
                if table.fallback.is_some() {
                    target.fallback = table.fallback;
                }
            }
        }
        self
    }

    pub fn into_router(self) -> Router<AppState> {
        let mut router = Router::new();
        for (path, methods) in self.paths {
            let mut method_router: MethodRouter<AppState> = MethodRouter::new();
            for (method, table) in methods {
                let filter = match MethodFilter::try_from(method.clone()) {
                    Ok(filter) => filter,
                    Err(_) => {
                        tracing::warn!(path, %method, "Skipping route with unroutable method");
                        continue;
                    }
                };
                let table = Arc::new(table);
                method_router = method_router.on(
                    filter,
                    move |State(state): State<AppState>, request: Request| {
                        let table = Arc::clone(&table);
                        async move { table.dispatch(state, request).await }
                    },
                );
            }
            router = router.route(path, method_router);
        }
        router
    }
}
