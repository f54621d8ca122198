#[allow(clippy::module_inception)]
mod client;
mod decode;
mod error;
mod flags;
mod response;

pub use client::ApiClient;
pub use decode::{decode_json, decode_plain, null_as_default, parse_hashes, WireShape};
pub use error::ApiError;
pub use flags::{FlagValue, Flags};
pub use response::RawResponse;

use bytes::Bytes;
use reqwest::multipart::Form;

/// Everything the executor needs to issue one RPC call.
#[derive(Debug)]
pub struct Call {
    /// Endpoint path below `/api/v0`, e.g. `object/stat`
    pub path: &'static str,
    /// Positional arguments, sent as repeated `arg=` pairs in order
    pub args: Vec<String>,
    pub flags: Flags,
    /// Multipart body; when present the call is a POST
    pub form: Option<Form>,
}

impl Call {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            args: Vec::new(),
            flags: Flags::new(),
            form: None,
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }

    /// Query pairs in wire order: positional args first, then flags.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.args
            .iter()
            .map(|arg| ("arg", arg.as_str()))
            .chain(self.flags.iter())
            .collect()
    }
}

/// One endpoint of the RPC API.
///
/// Implementors validate their inputs while building the [`Call`] and
/// know how to turn the response body into their typed result.
pub trait ApiRequest {
    type Response;

    fn build_call(&self) -> Result<Call, ApiError>;

    fn decode(body: Bytes) -> Result<Self::Response, ApiError>;
}

/// Fail with `InvalidArgument` when a mandatory argument is empty.
pub fn require_arg(name: &str, value: &str) -> Result<String, ApiError> {
    if value.is_empty() {
        return Err(ApiError::invalid_argument(format!("{} is required", name)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_precede_flags() {
        let call = Call::new("dht/findprovs")
            .arg("QmKey")
            .flags(Flags::new().with("verbose", true));

        assert_eq!(
            call.query_pairs(),
            vec![("arg", "QmKey"), ("verbose", "true")]
        );
    }

    #[test]
    fn test_require_arg() {
        assert_eq!(require_arg("key", "QmKey").unwrap(), "QmKey");
        assert!(matches!(
            require_arg("key", ""),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
