//! Mollie provider hooks for Rust OAuth 2.0 clients: fixed endpoints, scope conventions,
//! provider error parsing, and typed organization profiles in one small crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
#[cfg(feature = "reqwest")] pub mod http;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		str::FromStr,
		sync::Arc,
	};
	#[cfg(feature = "reqwest")] pub use std::pin::Pin;

	pub use oauth2::{AccessToken, HttpResponse};
	#[cfg(feature = "reqwest")] pub use oauth2::HttpRequest;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
	#[cfg(feature = "reqwest")] pub use crate::error::Error;
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
