//! The interactor template method.

use crate::auth::AuthMiddleware;
use crate::client::HttpClient;
use crate::request::Request;
use crate::store::Store;

/// A controller that sequences one HTTP send with post-processing and
/// store dispatch.
///
/// Concrete interactors supply a [`request`](HttpInteractor::request)
/// descriptor and, optionally, an auth middleware, a side-effect hook, and
/// an action list; [`execute`](HttpInteractor::execute) is the provided
/// template method that drives them. The interactor holds shared handles
/// to one client and one store — both may be shared with other
/// interactors.
///
/// Per execution the flow is linear: send → (absent ⇒ stop) → side
/// effects → dispatch each action in order. All failure is absorbed
/// inside [`HttpClient::send`], so `execute` itself never fails.
///
/// # Example
///
/// ```ignore
/// struct RefreshNotes {
///     client: Arc<ReqwestClient>,
///     store: Arc<NoteStore>,
/// }
///
/// impl HttpInteractor for RefreshNotes {
///     type Response = Vec<Note>;
///     type Request = ListNotes;
///     type Client = ReqwestClient;
///     type Store = NoteStore;
///
///     fn http_client(&self) -> &ReqwestClient {
///         &self.client
///     }
///
///     fn store(&self) -> &NoteStore {
///         &self.store
///     }
///
///     fn request(&self) -> ListNotes {
///         ListNotes
///     }
///
///     fn actions(&self, notes: &Vec<Note>) -> Vec<NoteAction> {
///         vec![NoteAction::Loaded(notes.clone())]
///     }
/// }
/// ```
pub trait HttpInteractor {
    /// The typed response produced by the request descriptor.
    type Response;

    /// The request descriptor this interactor sends.
    type Request: Request<Response = Self::Response> + Send + Sync;

    /// The HTTP client used to send it.
    type Client: HttpClient;

    /// The store actions are dispatched to.
    type Store: Store;

    /// The client handle. Shared, not exclusively owned.
    fn http_client(&self) -> &Self::Client;

    /// The store handle. Shared, not exclusively owned.
    fn store(&self) -> &Self::Store;

    /// The request to send. Built fresh per execution.
    fn request(&self) -> Self::Request;

    /// Optional authentication middleware. Defaults to none.
    fn auth(
        &self,
    ) -> Option<&dyn AuthMiddleware<<Self::Client as HttpClient>::TransportRequest>> {
        None
    }

    /// Side effects to run after a successful response, before any
    /// dispatch. Defaults to doing nothing.
    async fn side_effects(&self, response: &Self::Response) {
        let _ = response;
    }

    /// Actions to dispatch to the store, derived from the response.
    /// Defaults to none.
    fn actions(&self, response: &Self::Response) -> Vec<<Self::Store as Store>::Action> {
        let _ = response;
        Vec::new()
    }

    /// The template method performing the request.
    ///
    /// Sends [`request`](HttpInteractor::request) with the optional
    /// [`auth`](HttpInteractor::auth) middleware. When the client produces
    /// a response, runs [`side_effects`](HttpInteractor::side_effects) to
    /// completion and then dispatches every action from
    /// [`actions`](HttpInteractor::actions), in order. When the client
    /// produces nothing, stops: no side effects, no dispatch.
    async fn execute(&self) {
        let request = self.request();
        let Some(response) = self.http_client().send(request, self.auth()).await else {
            return;
        };

        self.side_effects(&response).await;

        for action in self.actions(&response) {
            self.store().dispatch(action);
        }
    }
}
