//! The endpoint pipeline shared by every versioned handler.
//!
//! Each handler declares an [`EndpointSpec`] and hands the pipeline a single
//! service call. The pipeline runs the same steps for every resource:
//!
//! 1. permission gate (caller must hold one of the declared codes),
//! 2. request normalization (JSON filters, empty-filter short-circuit,
//!    paging defaults, `Cache-Control: no-cache`),
//! 3. the delegated service call,
//! 4. Ethos privacy and extended-data lookup for the returned entities,
//! 5. result and error mapping.
//!
//! Failures are logged with full detail before being translated into a
//! client-safe body.

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use student_records_core::{
    describe_codes, EthosContext, Identified, Page, PermissionCode, ResourceRoute, ServiceError,
};

use crate::{
    error::{ApiError, ErrorContext, ErrorFormat},
    request::{EndpointRequest, FilterError, FilterParams, Paging},
    response::{json_with_ethos, PagedResponse},
    versioning::ApiVersion,
    AppState,
};

/// Static description of one (resource, method, version) endpoint.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSpec {
    pub resource: &'static str,
    pub version: ApiVersion,
    /// Singular label used in messages, e.g. `academic discipline`.
    pub entity: &'static str,
    /// Plural label used in messages, e.g. `academic disciplines`.
    pub label: &'static str,
    pub permissions: &'static [PermissionCode],
    pub filters: &'static [&'static str],
    pub default_limit: Option<usize>,
    pub format: ErrorFormat,
    pub ethos: bool,
}

impl EndpointSpec {
    pub const fn integration(
        resource: &'static str,
        version: ApiVersion,
        entity: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            resource,
            version,
            entity,
            label,
            permissions: &[],
            filters: &[],
            default_limit: None,
            format: ErrorFormat::Integration,
            ethos: true,
        }
    }

    pub const fn legacy(
        resource: &'static str,
        version: ApiVersion,
        entity: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            format: ErrorFormat::Legacy,
            ethos: false,
            ..Self::integration(resource, version, entity, label)
        }
    }

    pub const fn permissions(self, permissions: &'static [PermissionCode]) -> Self {
        Self {
            permissions,
            ..self
        }
    }

    pub const fn filters(self, filters: &'static [&'static str]) -> Self {
        Self { filters, ..self }
    }

    pub const fn paged(self, default_limit: usize) -> Self {
        Self {
            default_limit: Some(default_limit),
            ..self
        }
    }

    pub fn route(&self) -> ResourceRoute {
        ResourceRoute::new(self.resource, self.version.to_string())
    }
}

/// Failure inside a pipeline step.
#[derive(Debug)]
pub enum EndpointError {
    Service(ServiceError),
    Api(ApiError),
    /// The request's filters cannot match anything.
    NoMatches(String),
}

impl From<ServiceError> for EndpointError {
    fn from(err: ServiceError) -> Self {
        EndpointError::Service(err)
    }
}

impl From<ApiError> for EndpointError {
    fn from(err: ApiError) -> Self {
        EndpointError::Api(err)
    }
}

impl From<FilterError> for EndpointError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::Shape { .. } => EndpointError::NoMatches(err.to_string()),
            FilterError::InvalidJson { .. } => EndpointError::Api(err.into()),
        }
    }
}

pub type EndpointResult<T> = Result<T, EndpointError>;

/// Normalized inputs handed to the service call.
#[derive(Debug, Clone)]
pub struct ServiceQuery {
    pub bypass_cache: bool,
    pub paging: Option<Paging>,
    pub filters: FilterParams,
}

impl ServiceQuery {
    /// Decode a declared filter parameter. A value that does not fit the
    /// typed shape means the request matches nothing.
    pub fn filter<T>(&self, name: &str) -> EndpointResult<T>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.filters.decode(name)?)
    }

    pub fn offset(&self) -> usize {
        self.paging.map(|p| p.offset).unwrap_or(0)
    }

    pub fn limit(&self) -> usize {
        self.paging.map(|p| p.limit).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Read,
    Create,
    Update,
}

impl Operation {
    fn action(&self) -> &'static str {
        match self {
            Operation::Read => "retrieving",
            Operation::Create => "creating",
            Operation::Update => "updating",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Operation::Read => "view",
            Operation::Create => "create",
            Operation::Update => "update",
        }
    }
}

pub struct Pipeline<'a> {
    state: AppState,
    spec: &'a EndpointSpec,
    request: EndpointRequest,
}

impl<'a> Pipeline<'a> {
    pub fn new(state: AppState, spec: &'a EndpointSpec, request: EndpointRequest) -> Self {
        Self {
            state,
            spec,
            request,
        }
    }

    /// Unpaged collection read.
    pub async fn list<T, F, Fut>(self, call: F) -> Response
    where
        T: Serialize + Identified,
        F: FnOnce(AppState, ServiceQuery) -> Fut,
        Fut: Future<Output = EndpointResult<Vec<T>>>,
    {
        let op = Operation::Read;
        let query = match self.begin(op) {
            Ok(Some(query)) => query,
            Ok(None) => return json_with_ethos(StatusCode::OK, Vec::<T>::new(), None),
            Err(err) => return self.fail(op, self.spec.label, err),
        };
        let bypass_cache = query.bypass_cache;

        let items = match call(self.state.clone(), query).await {
            Ok(items) => items,
            Err(EndpointError::NoMatches(reason)) => {
                self.log_no_matches(&reason);
                return json_with_ethos(StatusCode::OK, Vec::<T>::new(), None);
            }
            Err(err) => return self.fail(op, self.spec.label, err),
        };

        match self.ethos(&items, bypass_cache).await {
            Ok(ethos) => {
                self.log_success(op, items.len());
                json_with_ethos(StatusCode::OK, items, ethos)
            }
            Err(err) => self.fail(op, self.spec.label, err.into()),
        }
    }

    /// Paged collection read. Paging is echoed back with the total count.
    pub async fn paged<T, F, Fut>(self, call: F) -> Response
    where
        T: Serialize + Identified,
        F: FnOnce(AppState, ServiceQuery) -> Fut,
        Fut: Future<Output = EndpointResult<Page<T>>>,
    {
        let op = Operation::Read;
        if let Err(err) = self.gate(op) {
            return self.fail(op, self.spec.label, err.into());
        }

        let default_limit = self.spec.default_limit.unwrap_or(usize::MAX);
        let paging = match Paging::from_query(&self.request.query, default_limit) {
            Ok(paging) => paging,
            Err(err) => return self.fail(op, self.spec.label, ApiError::from(err).into()),
        };

        let query = match self.begin(op) {
            Ok(Some(query)) => ServiceQuery {
                paging: Some(paging),
                ..query
            },
            Ok(None) => return self.page_response(PagedResponse::<T>::empty(paging), None),
            Err(err) => return self.fail(op, self.spec.label, err),
        };
        let bypass_cache = query.bypass_cache;

        let page = match call(self.state.clone(), query).await {
            Ok(page) => page,
            Err(EndpointError::NoMatches(reason)) => {
                self.log_no_matches(&reason);
                return self.page_response(PagedResponse::<T>::empty(paging), None);
            }
            Err(err) => return self.fail(op, self.spec.label, err),
        };

        match self.ethos(&page.items, bypass_cache).await {
            Ok(ethos) => {
                self.log_success(op, page.items.len());
                self.page_response(PagedResponse::new(page.items, paging, page.total), ethos)
            }
            Err(err) => self.fail(op, self.spec.label, err.into()),
        }
    }

    /// Single-entity read by id. An absent entity is a 404.
    pub async fn single<T, F, Fut>(self, id: &str, call: F) -> Response
    where
        T: Serialize + Identified,
        F: FnOnce(AppState, ServiceQuery) -> Fut,
        Fut: Future<Output = EndpointResult<Option<T>>>,
    {
        let op = Operation::Read;
        let query = match self.gate(op) {
            Ok(()) => self.plain_query(),
            Err(err) => return self.fail(op, self.spec.entity, err.into()),
        };
        let bypass_cache = query.bypass_cache;

        let entity = match call(self.state.clone(), query).await {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                let err = ApiError::NotFound(format!(
                    "No {} was found for GUID '{}'.",
                    self.spec.entity, id
                ));
                return self.fail(op, self.spec.entity, err.into());
            }
            Err(err) => return self.fail(op, self.spec.entity, err),
        };

        match self.ethos(std::slice::from_ref(&entity), bypass_cache).await {
            Ok(ethos) => {
                self.log_success(op, 1);
                json_with_ethos(StatusCode::OK, entity, ethos)
            }
            Err(err) => self.fail(op, self.spec.entity, err.into()),
        }
    }

    /// Create through the service; responds 200 with the stored entity.
    pub async fn create<T, F, Fut>(self, call: F) -> Response
    where
        T: Serialize + Identified,
        F: FnOnce(AppState, ServiceQuery) -> Fut,
        Fut: Future<Output = EndpointResult<T>>,
    {
        self.mutate(Operation::Create, StatusCode::OK, None::<fn(&T) -> String>, call)
            .await
    }

    /// Create through the service; responds 201 with a `Location` header.
    pub async fn created<T, L, F, Fut>(self, location: L, call: F) -> Response
    where
        T: Serialize + Identified,
        L: FnOnce(&T) -> String,
        F: FnOnce(AppState, ServiceQuery) -> Fut,
        Fut: Future<Output = EndpointResult<T>>,
    {
        self.mutate(Operation::Create, StatusCode::CREATED, Some(location), call)
            .await
    }

    /// Update through the service; responds 200 with the stored entity.
    pub async fn update<T, F, Fut>(self, call: F) -> Response
    where
        T: Serialize + Identified,
        F: FnOnce(AppState, ServiceQuery) -> Fut,
        Fut: Future<Output = EndpointResult<T>>,
    {
        self.mutate(Operation::Update, StatusCode::OK, None::<fn(&T) -> String>, call)
            .await
    }

    async fn mutate<T, L, F, Fut>(
        self,
        op: Operation,
        status: StatusCode,
        location: Option<L>,
        call: F,
    ) -> Response
    where
        T: Serialize + Identified,
        L: FnOnce(&T) -> String,
        F: FnOnce(AppState, ServiceQuery) -> Fut,
        Fut: Future<Output = EndpointResult<T>>,
    {
        let query = match self.gate(op) {
            Ok(()) => self.plain_query(),
            Err(err) => return self.fail(op, self.spec.entity, err.into()),
        };
        let bypass_cache = query.bypass_cache;

        let entity = match call(self.state.clone(), query).await {
            Ok(entity) => entity,
            Err(err) => return self.fail(op, self.spec.entity, err),
        };

        let ethos = match self.ethos(std::slice::from_ref(&entity), bypass_cache).await {
            Ok(ethos) => ethos,
            Err(err) => return self.fail(op, self.spec.entity, err.into()),
        };

        let location = location.map(|f| f(&entity));
        self.log_success(op, 1);
        let mut response = json_with_ethos(status, entity, ethos);
        if let Some(value) = location.and_then(|l| HeaderValue::from_str(&l).ok()) {
            response.headers_mut().insert(header::LOCATION, value);
        }
        response
    }

    /// Steps 1 and 2. `Ok(None)` means the filters cannot match anything.
    fn begin(&self, op: Operation) -> EndpointResult<Option<ServiceQuery>> {
        self.gate(op)?;

        let filters = FilterParams::resolve(&self.request.query, self.spec.filters)?;
        if filters.is_empty_request() {
            self.log_no_matches("all filter parameters are empty");
            return Ok(None);
        }

        Ok(Some(ServiceQuery {
            bypass_cache: self.request.bypass_cache,
            paging: None,
            filters,
        }))
    }

    fn plain_query(&self) -> ServiceQuery {
        ServiceQuery {
            bypass_cache: self.request.bypass_cache,
            paging: None,
            filters: FilterParams::default(),
        }
    }

    fn gate(&self, op: Operation) -> Result<(), ApiError> {
        let required = self.spec.permissions;
        if required.is_empty() || self.request.caller.has_any(required) {
            return Ok(());
        }
        Err(ApiError::Forbidden(format!(
            "User '{}' does not have permission to {} {}. Required: {}.",
            self.request.caller.person_id,
            op.verb(),
            self.spec.label,
            describe_codes(required)
        )))
    }

    /// Step 4: privacy list and extended data for the returned entities.
    async fn ethos<T: Identified>(
        &self,
        items: &[T],
        bypass_cache: bool,
    ) -> Result<Option<EthosContext>, ServiceError> {
        if !self.spec.ethos || items.is_empty() {
            return Ok(None);
        }

        let route = self.spec.route();
        let ids: Vec<String> = items.iter().map(|i| i.id().to_string()).collect();
        let privacy_paths = self
            .state
            .metadata
            .data_privacy_list(&route, bypass_cache)
            .await?;
        let extended = self.state.metadata.extended_data(&route, &ids).await?;

        Ok(Some(EthosContext::new(privacy_paths, extended)))
    }

    fn page_response<T: Serialize>(
        &self,
        page: PagedResponse<T>,
        ethos: Option<EthosContext>,
    ) -> Response {
        let page = if self.state.settings.include_link_headers {
            page.with_links(self.request.uri.path(), &self.request.query_pairs())
        } else {
            page
        };
        let mut response = page.into_response();
        crate::response::attach_ethos(&mut response, ethos);
        response
    }

    fn fail(&self, op: Operation, label: &'static str, err: EndpointError) -> Response {
        let api_error = match err {
            EndpointError::Service(err) => {
                tracing::error!(
                    resource = self.spec.resource,
                    version = %self.spec.version,
                    caller = %self.request.caller.person_id,
                    error = ?err,
                    "Service call failed while {} {}",
                    op.action(),
                    label
                );
                ApiError::from_service(err, ErrorContext::new(op.action(), label))
            }
            EndpointError::Api(err) => {
                tracing::error!(
                    resource = self.spec.resource,
                    version = %self.spec.version,
                    caller = %self.request.caller.person_id,
                    error = %err,
                    "Request rejected while {} {}",
                    op.action(),
                    label
                );
                err
            }
            EndpointError::NoMatches(reason) => {
                tracing::error!(
                    resource = self.spec.resource,
                    version = %self.spec.version,
                    reason = %reason,
                    "Filter mismatch outside a collection read"
                );
                ApiError::BadRequest(reason)
            }
        };
        api_error.into_response_with(self.spec.format)
    }

    fn log_no_matches(&self, reason: &str) {
        tracing::debug!(
            resource = self.spec.resource,
            version = %self.spec.version,
            reason,
            "Filters match nothing; returning an empty result"
        );
    }

    fn log_success(&self, op: Operation, count: usize) {
        tracing::debug!(
            resource = self.spec.resource,
            version = %self.spec.version,
            operation = op.action(),
            count,
            "Request completed"
        );
    }
}

/// Handler for mutations the ERP does not support. Never reaches a service.
pub async fn not_supported() -> Response {
    tracing::debug!("Rejecting unsupported operation");
    ApiError::Unsupported.into_response()
}

/// Parse a JSON request body. An empty or malformed body is a bad request.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes, label: &str) -> EndpointResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        let message = format!("Must provide a {} in the request body.", label);
        return Err(ApiError::BadRequest(message).into());
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiError::BadRequest(format!("Invalid {} in the request body: {}", label, e)).into()
    })
}
