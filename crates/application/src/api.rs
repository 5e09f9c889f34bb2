//! Typed client for the Leads service endpoints.
//!
//! [`LeadsApi`] binds a transport to a single base URL for its lifetime and
//! exposes one method per endpoint of the wire contract. Success statuses
//! deserialize the expected shape; non-success statuses deserialize the
//! service's error body instead of failing, so scenarios can assert on
//! either outcome.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use leadprobe_domain::{
    ApiReply, ApiResponse, CreatedLead, LeadRecord, NewLead, ReplyPayload, RequestSpec,
    ResponseError, SubArea,
};

use crate::error::ApiResult;
use crate::ports::HttpClient;

/// Typed API client bound to one base URL.
///
/// Scenarios build a fresh instance in setup; the client carries no state
/// beyond the transport and the base URL, so nothing leaks between tests.
pub struct LeadsApi<C: HttpClient> {
    client: C,
    base_url: Url,
}

impl<C: HttpClient> LeadsApi<C> {
    /// Creates a client bound to `base_url`.
    #[must_use]
    pub const fn new(client: C, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Returns the base URL this client is bound to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches every SubArea known to the service (`GET /SubAreas`).
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the request cannot be built or the
    /// service cannot be reached.
    pub async fn list_sub_areas(&self) -> ApiResult<ApiReply<Vec<SubArea>>> {
        self.execute(RequestSpec::get("/SubAreas")).await
    }

    /// Fetches the SubAreas matching a pin code
    /// (`GET /SubAreas/Filter/PinCode/{pinCode}`). An unmatched pin code is
    /// a 200 with an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the request cannot be built or the
    /// service cannot be reached.
    pub async fn filter_sub_areas(&self, pin_code: &str) -> ApiResult<ApiReply<Vec<SubArea>>> {
        self.execute(
            RequestSpec::get("/SubAreas/Filter/PinCode/{pinCode}")
                .with_segment("pinCode", pin_code),
        )
        .await
    }

    /// Creates a Lead (`POST /Leads`). The service answers 200 with the
    /// generated identifier, or 400 with a validation message.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the body cannot be serialized or
    /// the service cannot be reached.
    pub async fn create_lead(&self, lead: &NewLead) -> ApiResult<ApiReply<CreatedLead>> {
        self.execute(RequestSpec::post("/Leads").with_json_body(lead)?)
            .await
    }

    /// Fetches the full Lead record including the nested SubArea
    /// (`GET /Leads/{id}`), or 404 for an unknown identifier.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the request cannot be built or the
    /// service cannot be reached.
    pub async fn get_lead(&self, id: &str) -> ApiResult<ApiReply<LeadRecord>> {
        self.execute(RequestSpec::get("/Leads/{id}").with_segment("id", id))
            .await
    }

    async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> ApiResult<ApiReply<T>> {
        let request = spec.resolve(&self.base_url)?;
        debug!(method = %request.method, url = %request.url, "executing request");
        let response = self.client.execute(&request).await?;
        debug!(status = response.status.as_u16(), "response received");
        Ok(classify(&response))
    }
}

/// Splits a raw response into the typed reply shape.
///
/// A body that matches neither the success shape nor the error shape yields
/// [`ReplyPayload::Empty`], keeping the status available for assertions.
fn classify<T: DeserializeOwned>(response: &ApiResponse) -> ApiReply<T> {
    let payload = if response.status.is_success() {
        response
            .json::<T>()
            .map_or(ReplyPayload::Empty, ReplyPayload::Success)
    } else {
        response
            .json::<ResponseError>()
            .map_or(ReplyPayload::Empty, ReplyPayload::Error)
    };
    ApiReply {
        status: response.status,
        payload,
    }
}
