//! Remote vault over HTTP/JSON.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    domain::error::EndpointError,
    endpoint::{Endpoint, Endpoints, endpoint},
};

/// Build endpoints posting to `{base_url}/hash` and `{base_url}/validate`.
pub fn new(base_url: &str) -> Endpoints {
    with_client(Client::new(), base_url)
}

pub fn with_client(client: Client, base_url: &str) -> Endpoints {
    let base_url = base_url.trim_end_matches('/');
    Endpoints {
        hash: post_endpoint(client.clone(), format!("{base_url}/hash")),
        validate: post_endpoint(client, format!("{base_url}/validate")),
    }
}

fn post_endpoint<Req, Resp>(client: Client, url: String) -> Endpoint<Req, Resp>
where
    Req: Serialize + Send + 'static,
    Resp: DeserializeOwned + Send + 'static,
{
    let url: Arc<str> = url.into();
    endpoint(move |request: Req| {
        let client = client.clone();
        let url = Arc::clone(&url);
        async move {
            let response = client
                .post(&*url)
                .json(&request)
                .send()
                .await
                .map_err(|e| EndpointError::Http(e.to_string()))?;

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(EndpointError::Limited);
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(EndpointError::Http(format!("{status}: {body}")));
            }

            response
                .json::<Resp>()
                .await
                .map_err(|e| EndpointError::Http(e.to_string()))
        }
    })
}
