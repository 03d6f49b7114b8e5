//! Composable HTTP request/response schemas.
//!
//! Describe a request or response shape once as a tree of schema nodes and
//! derive two things from that single description: a runtime validator that
//! reports precise, path-qualified errors, and an OpenAPI 3.0.1 document.
//!
//! # Example
//!
//! ```
//! use reqschema::{validate, Schema};
//! use serde_json::json;
//!
//! let user = Schema::object([
//!     ("id", Schema::string()),
//!     ("tag", Schema::enumeration(["a", "b"]).optional()),
//! ]);
//! assert_eq!(user.definition(), r#"{ id: string, tag?: "a" | "b" }"#);
//!
//! assert!(validate(&user, Some(&json!({ "id": "x" }))).is_ok());
//!
//! let err = validate(&user, Some(&json!({ "id": 1, "tag": "z" }))).unwrap_err();
//! assert_eq!(
//!     err.description,
//!     r#"property [id]: should be string, property [tag]: should be one of "a" | "b""#
//! );
//! ```
//!
//! # Definitions
//!
//! Every node carries a canonical textual definition, used in error messages
//! and as the deduplication key inside unions:
//!
//! | Constructor | Definition |
//! |-------------|------------|
//! | `Schema::number()` | `number` |
//! | `Schema::string()` | `string` |
//! | `Schema::boolean()` | `boolean` |
//! | `Schema::enumeration(["a", "b"])` | `"a" \| "b"` |
//! | `Schema::array(item)` | `Array<item>` |
//! | `Schema::object(props)` | `{ name: def, opt?: def }` |
//! | `Schema::union(items)` | `a \| b` (flattened, deduplicated) |
//! | `Schema::dict(value)` | `{ [key: string]: value }` |
//!
//! `schema.optional()` lets an absent value pass validation and marks the
//! property with `?` in a containing object. `schema.nullable()` appends
//! `" | null"` to the definition and sets the `nullable` flag in the
//! generated document.
//!
//! # OpenAPI generation
//!
//! [`OasBuilder`] projects a list of [`Operation`] descriptors plus a table
//! of named response schemas into an OpenAPI 3.0.1 document. Response
//! schemas registered by name and referenced through the same `Arc` are
//! emitted as `$ref` pointers into `components.schemas`; everything else
//! inlines.

mod error;
mod http;
mod openapi;
mod schema;
mod validator;

pub use error::ValidationError;
pub use http::{Method, Operation, Parameter, ParameterKind};
pub use openapi::{Info, OasBuilder};
pub use schema::{EnumValue, Schema, SchemaKind, SchemaOptions};
pub use validator::{validate, validate_with, ValidateOptions};
