use http::{Request, Response, StatusCode};
use kube::api::{ListMeta, ObjectList, TypeMeta};
use kube::client::Body;
use kube::core::Status;
use kube::{Client, Resource};
use serde::Serialize;
use tokio::task::JoinHandle;
use tower_test::mock;
use tracing::debug;

use crate::error::ClusterError;

/// A request as seen by a reactor, body already collected.
pub type ApiRequest = Request<Vec<u8>>;

pub type ApiResponse = Response<Body>;

/// In-process API server answering a `kube::Client`.
///
/// Every request goes to the reactor and its response goes back to the client
/// as is. The server ends once all client clones are dropped. Dropping the
/// server aborts it.
pub struct FakeApiServer {
    task: JoinHandle<usize>,
}

impl FakeApiServer {
    pub fn start<F>(mut reactor: F) -> (Client, Self)
    where
        F: FnMut(&ApiRequest) -> ApiResponse + Send + 'static,
    {
        let (service, mut handle) = mock::pair::<Request<Body>, Response<Body>>();
        let task = tokio::spawn(async move {
            let mut served = 0;
            while let Some((request, send)) = handle.next_request().await {
                let (parts, body) = request.into_parts();
                let body = body.collect_bytes().await.map(|b| b.to_vec()).unwrap_or_default();
                let request = Request::from_parts(parts, body);
                debug!("Fake API server: {} {}", request.method(), request.uri().path());
                send.send_response(reactor(&request));
                served += 1;
            }
            served
        });

        (Client::new(service, "default"), Self { task })
    }

    /// Waits until every client is gone and returns how many requests were served.
    pub async fn finish(mut self) -> Result<usize, ClusterError> {
        (&mut self.task).await.map_err(|e| ClusterError::Api(e.to_string()))
    }
}

impl Drop for FakeApiServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn object_response<T: Serialize>(status: StatusCode, object: &T) -> ApiResponse {
    let mut response = Response::new(Body::from(serde_json::to_vec(object).unwrap_or_default()));
    *response.status_mut() = status;
    response
}

/// A `<Kind>List` holding `items`.
pub fn list_response<K>(items: Vec<K>) -> ApiResponse
where
    K: Resource<DynamicType = ()> + Clone + Serialize,
{
    let list = ObjectList { types: TypeMeta::list::<K>(), metadata: ListMeta::default(), items };
    object_response(StatusCode::OK, &list)
}

/// A failed `Status` as the API server sends it, e.g. `NotFound` or `AlreadyExists`.
pub fn status_response(status: StatusCode, reason: &str, message: &str) -> ApiResponse {
    let body = Status::failure(message, reason).with_code(status.as_u16());
    object_response(status, &body)
}
