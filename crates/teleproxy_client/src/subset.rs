//! Subset resolution: attempt, miss detection, creation, single retry.

use crate::call::CallRequest;
use crate::client::Client;
use crate::credentials::Credentials;
use crate::error::{ClientError, ClientResult};
use crate::identity::IdentitySource;
use crate::request::{build_request, RequestDescriptor, RequestOptions};
use crate::transport::{HttpResponse, Transport};
use http::{Method, StatusCode};
use teleproxy_protocol::{SubsetCreateBody, SubsetKey};

/// What a single subset fetch attempt produced.
///
/// The miss signal is data, not an error: the resolver branches on this
/// instead of catching a status-keyed exception.
#[derive(Debug)]
pub(crate) enum AttemptOutcome {
    /// 2xx: the subset exists and answered.
    Hit(HttpResponse),
    /// 412: the subset named by this key is not materialized yet.
    Miss(HttpResponse),
    /// Any other status: terminal for this call path.
    Failed(HttpResponse),
}

impl AttemptOutcome {
    fn classify(response: HttpResponse) -> Self {
        if response.is_success() {
            AttemptOutcome::Hit(response)
        } else if response.status == StatusCode::PRECONDITION_FAILED {
            AttemptOutcome::Miss(response)
        } else {
            AttemptOutcome::Failed(response)
        }
    }
}

impl<T: Transport, C: Credentials, I: IdentitySource> Client<T, C, I> {
    /// Resolves a subsetted resource: try the cached entry, and on a
    /// miss create it and retry the original request exactly once.
    ///
    /// The retry reuses the descriptor from the first attempt, so a
    /// machine set that changes mid-flight affects the next call's key,
    /// not this one's.
    pub(crate) fn resolve_subset(&self, request: &CallRequest) -> ClientResult<HttpResponse> {
        let key = self.derive_key()?;
        let url = format!("{}/{}/{}", self.config.subset_url(), key, request.resource);
        self.config.logger().debug(&format!("subset url: {}", url));

        let descriptor =
            build_request(&url, request.to_options(), &self.config, &self.credentials)?;

        match self.attempt(&descriptor)? {
            AttemptOutcome::Hit(response) => {
                self.config.logger().debug("first subset call passed, cache hit");
                Ok(response)
            }
            AttemptOutcome::Failed(response) => Err(ClientError::http(response)),
            AttemptOutcome::Miss(_) => {
                self.config.logger().debug("first subset call failed, cache miss");
                self.create_subset()?;

                self.config
                    .logger()
                    .debug("subset creation passed, calling newly created subset");
                match self.attempt(&descriptor)? {
                    AttemptOutcome::Hit(response) => Ok(response),
                    AttemptOutcome::Miss(response) | AttemptOutcome::Failed(response) => {
                        Err(ClientError::http(response))
                    }
                }
            }
        }
    }

    /// Materializes the subset for the current identity on the server.
    ///
    /// Branch id and machine ids are re-read from the identity source
    /// here, never cached. Failures propagate uncaught; only the miss
    /// signal from the fetch attempt is handled specially.
    pub(crate) fn create_subset(&self) -> ClientResult<HttpResponse> {
        let branch_id = self.identity.branch_id()?;
        let machine_ids = self.identity.machine_ids()?;
        let key = SubsetKey::derive(&branch_id, &machine_ids);
        let body = SubsetCreateBody::new(
            key,
            branch_id,
            self.config.subset_list_type,
            machine_ids,
        );

        let options = RequestOptions {
            method: Some(Method::POST),
            payload: Some(body.to_json()),
            ..Default::default()
        };
        let descriptor = build_request(
            self.config.subset_url(),
            options,
            &self.config,
            &self.credentials,
        )?;

        let response = self.transport.execute(&descriptor)?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ClientError::http(response))
        }
    }

    /// Executes one fetch attempt and classifies the outcome.
    fn attempt(&self, descriptor: &RequestDescriptor) -> ClientResult<AttemptOutcome> {
        let response = self.transport.execute(descriptor)?;
        Ok(AttemptOutcome::classify(response))
    }

    /// Derives the subset key from the live identity.
    fn derive_key(&self) -> ClientResult<SubsetKey> {
        let branch_id = self.identity.branch_id()?;
        let machine_ids = self.identity.machine_ids()?;
        Ok(SubsetKey::derive(&branch_id, &machine_ids))
    }
}
