use std::collections::HashMap;
use std::sync::Arc;

use bible_citations_rs::{Citations, RefError};
use futures::future::{self, Future};
use hyper::header::{self, HeaderValue};
use hyper::service::{NewService, Service};
use hyper::{Body, Method, Request, Response, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No input provided")]
    NoInput,
    #[error("Bad listen address: {0}")]
    BadAddress(String),
    #[error("Reference: {0}")]
    Reference(#[from] RefError),
    #[error("Server: {0}")]
    Server(String),
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let query = query.unwrap_or("");
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn required(args: &HashMap<String, String>, key: &str) -> Result<String, ServiceError> {
    args.get(key)
        .map(|v| v.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(ServiceError::NoInput)
}

fn search_results(citations: &Citations, query: Option<&str>) -> Result<Value, ServiceError> {
    let text = required(&parse_query(query), "q")?;
    let refs = citations.get_unique_refs(&text);
    let results = citations.parse_refs(&refs);
    tracing::debug!(refs = refs.len(), results = results.len(), "search");
    Ok(json!({ "refs": refs, "results": results }))
}

fn parse_result(citations: &Citations, query: Option<&str>) -> Result<Value, ServiceError> {
    let args = parse_query(query);
    let marker = required(&args, "cv")?;
    let book = required(&args, "book").ok();
    let reference = citations.parse_cv(&marker, book.as_ref().map(String::as_str))?;
    Ok(json!(reference))
}

fn failure(error: ServiceError) -> (StatusCode, Option<Value>) {
    match error {
        ServiceError::Reference(e) => (
            StatusCode::BAD_REQUEST,
            Some(json!({ "error": e.to_string() })),
        ),
        ServiceError::NoInput => (StatusCode::BAD_REQUEST, None),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
    }
}

/// Status and JSON body for a request.
pub fn route(
    citations: &Citations,
    method: &Method,
    path: &str,
    query: Option<&str>,
) -> (StatusCode, Option<Value>) {
    let result = match (method, path) {
        (&Method::GET, "/") => search_results(citations, query),
        (&Method::GET, "/parse") => parse_result(citations, query),
        _ => return (StatusCode::NOT_FOUND, None),
    };

    match result {
        Ok(body) => (StatusCode::OK, Some(body)),
        Err(e) => failure(e),
    }
}

fn respond(status: StatusCode, body: Option<Value>) -> Response<Body> {
    let mut response = match body {
        Some(body) => {
            let mut response = Response::new(Body::from(body.to_string()));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            response
        }
        None => Response::new(Body::empty()),
    };
    *response.status_mut() = status;
    response
}

#[derive(Clone)]
pub struct SearchService {
    citations: Arc<Citations>,
}

impl SearchService {
    pub fn new(citations: Citations) -> SearchService {
        SearchService {
            citations: Arc::new(citations),
        }
    }
}

impl NewService for SearchService {
    type ReqBody = Body;
    type ResBody = Body;
    type Error = ServiceError;
    type Service = SearchService;
    type Future = Box<dyn Future<Item = Self::Service, Error = Self::Error> + Send>;
    type InitError = ServiceError;

    fn new_service(&self) -> Self::Future {
        Box::new(future::ok(self.clone()))
    }
}

impl Service for SearchService {
    type ReqBody = Body;
    type ResBody = Body;
    type Error = ServiceError;
    type Future = Box<dyn Future<Item = Response<Self::ResBody>, Error = Self::Error> + Send>;

    fn call(&mut self, request: Request<Self::ReqBody>) -> Self::Future {
        let (status, body) = route(
            &self.citations,
            request.method(),
            request.uri().path(),
            request.uri().query(),
        );
        tracing::info!(
            method = %request.method(),
            path = request.uri().path(),
            status = status.as_u16(),
            "request"
        );
        Box::new(future::ok(respond(status, body)))
    }
}
