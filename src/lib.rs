//! EVE Online single sign-on client: build the login redirect, trade the returned authorization
//! code for an access token, and resolve that token to the authenticated character.
//!
//! Every operation hangs off [`flows::SsoClient`], which owns its [`config::SsoConfig`] and a
//! pluggable [`http::SsoHttpClient`] transport (reqwest by default).

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod response;
pub mod transport;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
