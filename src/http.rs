//! HTTP operation and parameter descriptors.
//!
//! Thin constructors that stamp a method or parameter kind together with
//! schema inputs. They carry no logic of their own; the OpenAPI builder is
//! their only consumer.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Lowercase method name, used as the key inside a path item.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }
}

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Query,
    Path,
    Body,
}

impl ParameterKind {
    /// Value of the OpenAPI `in` field. Body parameters never appear there;
    /// they merge into the request body instead.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Query => "query",
            ParameterKind::Path => "path",
            ParameterKind::Body => "body",
        }
    }
}

/// A declared request parameter: where it travels plus its schema.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub kind: ParameterKind,
    pub schema: Schema,
}

impl Parameter {
    /// A query-string parameter. Required in the generated document unless
    /// its schema is optional.
    pub fn query(schema: Schema) -> Self {
        Self {
            kind: ParameterKind::Query,
            schema,
        }
    }

    /// A path-template parameter. Always required in the generated document,
    /// regardless of schema options.
    pub fn path(schema: Schema) -> Self {
        Self {
            kind: ParameterKind::Path,
            schema,
        }
    }

    /// A request-body field. All body parameters of an operation merge into
    /// one object schema.
    pub fn body(schema: Schema) -> Self {
        Self {
            kind: ParameterKind::Body,
            schema,
        }
    }
}

/// Declared shape of one HTTP endpoint.
///
/// Parameters keep declaration order; the body merge and the rendered
/// parameter list both follow it. The response schema is held behind `Arc`
/// so the OpenAPI builder can match it against the named-response table by
/// pointer identity.
#[derive(Debug, Clone)]
pub struct Operation {
    pub method: Method,
    pub operation_id: String,
    pub path: String,
    pub parameters: IndexMap<String, Parameter>,
    pub response: Arc<Schema>,
}

impl Operation {
    pub fn new<I, K>(
        method: Method,
        operation_id: impl Into<String>,
        path: impl Into<String>,
        parameters: I,
        response: Arc<Schema>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Parameter)>,
        K: Into<String>,
    {
        Self {
            method,
            operation_id: operation_id.into(),
            path: path.into(),
            parameters: parameters
                .into_iter()
                .map(|(name, parameter)| (name.into(), parameter))
                .collect(),
            response,
        }
    }

    pub fn get<I, K>(
        operation_id: impl Into<String>,
        path: impl Into<String>,
        parameters: I,
        response: Arc<Schema>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Parameter)>,
        K: Into<String>,
    {
        Self::new(Method::Get, operation_id, path, parameters, response)
    }

    pub fn post<I, K>(
        operation_id: impl Into<String>,
        path: impl Into<String>,
        parameters: I,
        response: Arc<Schema>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Parameter)>,
        K: Into<String>,
    {
        Self::new(Method::Post, operation_id, path, parameters, response)
    }

    pub fn put<I, K>(
        operation_id: impl Into<String>,
        path: impl Into<String>,
        parameters: I,
        response: Arc<Schema>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Parameter)>,
        K: Into<String>,
    {
        Self::new(Method::Put, operation_id, path, parameters, response)
    }

    pub fn patch<I, K>(
        operation_id: impl Into<String>,
        path: impl Into<String>,
        parameters: I,
        response: Arc<Schema>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Parameter)>,
        K: Into<String>,
    {
        Self::new(Method::Patch, operation_id, path, parameters, response)
    }

    pub fn delete<I, K>(
        operation_id: impl Into<String>,
        path: impl Into<String>,
        parameters: I,
        response: Arc<Schema>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Parameter)>,
        K: Into<String>,
    {
        Self::new(Method::Delete, operation_id, path, parameters, response)
    }
}
