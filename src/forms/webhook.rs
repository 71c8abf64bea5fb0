use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{RequestMode, ResponseType};

use super::submit::{Delivery, SubmitError, Webhook};

/// Posts form data straight from the browser. The webhook host sends no CORS
/// headers, so the request goes out as `no-cors` and the response body is
/// never read.
pub struct HttpWebhook;

#[async_trait(?Send)]
impl Webhook for HttpWebhook {
    async fn post(&self, url: &str, body: String) -> Result<Delivery, SubmitError> {
        let response = Request::post(url)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        if response.type_() == ResponseType::Opaque {
            return Ok(Delivery::Opaque);
        }
        Ok(Delivery::Status(response.status()))
    }
}
