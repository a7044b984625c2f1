//! Platform-abstracted HTTP GET with Send-safe futures.
//!
//! On wasm32 `reqwest::Response` is not `Send` because it wraps JS types
//! that are inherently single-threaded, while commands must return
//! `Pin<Box<dyn Future<Output = ()> + Send>>` on every target. So:
//!
//! - on **native** the request goes through reqwest directly (those futures
//!   are Send already);
//! - on **wasm** the request is spawned on the JS thread with
//!   `wasm_bindgen_futures::spawn_local` and the result comes back through
//!   a `flume` channel, whose receiver side is Send.
//!
//! The data source is read-only, so only GET is supported.

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Body bytes, fully buffered.
    pub body: Vec<u8>,
}

impl Response {
    /// True when the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure (DNS, refused connection, aborted body).
#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP error: {}", self.message)
    }
}

impl std::error::Error for HttpError {}

pub type HttpResult<T> = Result<T, HttpError>;

/// Issue a GET request and buffer the whole response.
pub async fn get(url: impl Into<String>) -> HttpResult<Response> {
    let url = url.into();

    #[cfg(not(target_arch = "wasm32"))]
    {
        get_native(url).await
    }

    #[cfg(target_arch = "wasm32")]
    {
        get_wasm(url).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn get_native(url: String) -> HttpResult<Response> {
    execute(url).await
}

#[cfg(target_arch = "wasm32")]
async fn get_wasm(url: String) -> HttpResult<Response> {
    let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

    // The reqwest future is not Send on wasm; run it on the JS thread and
    // hand the Send-safe result back through the channel.
    wasm_bindgen_futures::spawn_local(async move {
        let result = execute(url).await;
        let _ = tx.send_async(result).await;
    });

    rx.recv_async()
        .await
        .map_err(|_| HttpError::new("request cancelled"))?
}

async fn execute(url: String) -> HttpResult<Response> {
    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_2xx_only() {
        let ok = Response {
            status: 204,
            body: Vec::new(),
        };
        assert!(ok.is_success());

        let not_found = Response {
            status: 404,
            body: Vec::new(),
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn body_parses_as_text_and_json() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Payload {
            message: String,
        }

        let response = Response {
            status: 200,
            body: br#"{"message": "hello"}"#.to_vec(),
        };

        assert_eq!(response.text().unwrap(), r#"{"message": "hello"}"#);
        assert_eq!(
            response.json::<Payload>().unwrap(),
            Payload {
                message: "hello".to_string()
            }
        );
    }
}
