//! Retained UI state for the character list.
//!
//! `CharactersViewModel` starts in `Loading`, issues exactly one fetch on
//! construction and publishes the outcome through a `watch` channel.
//! Subscribers always see the latest value first.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use portal_application::{CharactersRepository, GetCharacters};
use portal_domain::{Characters, NetworkResult};

/// Observable character list state.
pub type CharactersState = watch::Receiver<NetworkResult<Characters>>;

type Publisher = Arc<Mutex<Option<watch::Sender<NetworkResult<Characters>>>>>;

/// State holder for the character list screen.
///
/// Single-shot: the state moves from `Loading` to `Success` or `Error`
/// once and never goes back. Dropping or disposing the holder cancels a
/// fetch that is still in flight.
#[derive(Debug)]
pub struct CharactersViewModel {
    state: CharactersState,
    publisher: Publisher,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl CharactersViewModel {
    /// Creates the view model and starts the fetch on the current Tokio
    /// runtime. Returns without waiting for any network I/O.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[must_use]
    pub fn new<R>(get_characters: GetCharacters<R>) -> Self
    where
        R: CharactersRepository + 'static,
    {
        Self::with_handle(get_characters, &Handle::current())
    }

    /// Creates the view model and starts the fetch on the given runtime.
    #[must_use]
    pub fn with_handle<R>(get_characters: GetCharacters<R>, handle: &Handle) -> Self
    where
        R: CharactersRepository + 'static,
    {
        let (tx, state) = watch::channel(NetworkResult::Loading);
        let publisher: Publisher = Arc::new(Mutex::new(Some(tx)));
        let cancel = CancellationToken::new();

        let task = handle.spawn(load_characters(
            get_characters,
            Arc::clone(&publisher),
            cancel.clone(),
        ));

        Self {
            state,
            publisher,
            cancel,
            task,
        }
    }

    /// Subscribes to the character list state.
    ///
    /// The receiver's `borrow()` yields the current value immediately;
    /// `changed()` resolves on the next replacement, or right away if the
    /// fetch already completed.
    #[must_use]
    pub fn characters(&self) -> CharactersState {
        self.state.clone()
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> NetworkResult<Characters> {
        self.state.borrow().clone()
    }

    /// Waits until the fetch has produced an outcome.
    ///
    /// Returns the current state unchanged (still `Loading`) if the view
    /// model is disposed first.
    pub async fn wait_until_resolved(&self) -> NetworkResult<Characters> {
        let mut state = self.state.clone();
        let resolved = state
            .wait_for(NetworkResult::is_resolved)
            .await
            .map(|s| (*s).clone());
        resolved.unwrap_or_else(|_| state.borrow().clone())
    }

    /// Cancels the in-flight fetch. The state is never replaced afterwards.
    pub fn dispose(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        debug!("disposing characters view model");
        self.cancel.cancel();
        self.publisher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.task.abort();
    }

    /// Returns true once `dispose` has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for CharactersViewModel {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn load_characters<R: CharactersRepository>(
    get_characters: GetCharacters<R>,
    publisher: Publisher,
    cancel: CancellationToken,
) {
    debug!("fetching characters");

    let result = tokio::select! {
        biased;

        () = cancel.cancelled() => {
            debug!("characters fetch cancelled");
            return;
        }
        result = get_characters.execute() => result,
    };

    // Publish while holding the lock: dispose takes the sender under the
    // same lock, so a disposed holder is never written to.
    let mut slot = publisher.lock().unwrap_or_else(PoisonError::into_inner);
    let Some(tx) = slot.take() else {
        debug!("characters fetch finished after dispose, dropping result");
        return;
    };

    debug!(success = result.is_success(), "publishing characters state");
    tx.send_replace(result);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use portal_domain::Character;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::oneshot;

    /// Repository that waits for the test to release a result.
    struct GatedRepository {
        gate: tokio::sync::Mutex<Option<oneshot::Receiver<NetworkResult<Characters>>>>,
        calls: AtomicUsize,
        dropped_in_flight: Arc<AtomicBool>,
    }

    impl GatedRepository {
        fn new() -> (Arc<Self>, oneshot::Sender<NetworkResult<Characters>>) {
            let (tx, rx) = oneshot::channel();
            let repo = Arc::new(Self {
                gate: tokio::sync::Mutex::new(Some(rx)),
                calls: AtomicUsize::new(0),
                dropped_in_flight: Arc::new(AtomicBool::new(false)),
            });
            (repo, tx)
        }
    }

    /// Sets a flag if the fetch future is dropped before completing.
    struct InFlight {
        dropped: Arc<AtomicBool>,
        completed: bool,
    }

    impl Drop for InFlight {
        fn drop(&mut self) {
            if !self.completed {
                self.dropped.store(true, Ordering::SeqCst);
            }
        }
    }

    #[async_trait]
    impl CharactersRepository for GatedRepository {
        async fn get_characters(&self) -> NetworkResult<Characters> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut guard = InFlight {
                dropped: Arc::clone(&self.dropped_in_flight),
                completed: false,
            };
            let gate = self.gate.lock().await.take();
            let result = match gate {
                Some(rx) => match rx.await {
                    Ok(result) => result,
                    Err(_) => std::future::pending().await,
                },
                None => std::future::pending().await,
            };
            guard.completed = true;
            result
        }
    }

    fn rick() -> Characters {
        Characters::new(vec![Character::new(1, "Rick", true, "u")])
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_starts_loading_and_fetches_once() {
        let (repo, gate) = GatedRepository::new();
        let view_model = CharactersViewModel::new(GetCharacters::new(Arc::clone(&repo)));

        assert_eq!(view_model.current(), NetworkResult::Loading);
        settle().await;
        assert_eq!(view_model.current(), NetworkResult::Loading);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);

        gate.send(NetworkResult::success(rick())).unwrap();

        assert_eq!(view_model.wait_until_resolved().await, NetworkResult::success(rick()));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transitions_exactly_once() {
        let (repo, gate) = GatedRepository::new();
        let view_model = CharactersViewModel::new(GetCharacters::new(repo));
        let mut state = view_model.characters();
        assert!(state.borrow_and_update().is_loading());

        gate.send(NetworkResult::error("Error occurred: 404")).unwrap();

        let mut seen = Vec::new();
        while state.changed().await.is_ok() {
            seen.push(state.borrow_and_update().clone());
        }

        assert_eq!(seen, vec![NetworkResult::error("Error occurred: 404")]);
        assert_eq!(view_model.current(), NetworkResult::error("Error occurred: 404"));
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_resolved_value() {
        let (repo, gate) = GatedRepository::new();
        let view_model = CharactersViewModel::new(GetCharacters::new(repo));
        gate.send(NetworkResult::success(Characters::empty())).unwrap();
        view_model.wait_until_resolved().await;

        let late = view_model.characters();

        assert_eq!(*late.borrow(), NetworkResult::success(Characters::empty()));
    }

    #[tokio::test]
    async fn test_dispose_before_resolution_keeps_loading() {
        let (repo, gate) = GatedRepository::new();
        let view_model = CharactersViewModel::new(GetCharacters::new(Arc::clone(&repo)));
        let mut state = view_model.characters();
        settle().await;

        view_model.dispose();
        // The fetch was aborted, so nobody is listening any more.
        let _ = gate.send(NetworkResult::success(rick()));
        settle().await;

        assert!(view_model.is_disposed());
        assert_eq!(view_model.current(), NetworkResult::Loading);
        assert!(state.changed().await.is_err());
        assert!(repo.dropped_in_flight.load(Ordering::SeqCst));
        assert_eq!(view_model.wait_until_resolved().await, NetworkResult::Loading);
    }

    #[tokio::test]
    async fn test_drop_cancels_in_flight_fetch() {
        let (repo, _gate) = GatedRepository::new();
        let view_model = CharactersViewModel::new(GetCharacters::new(Arc::clone(&repo)));
        let state = view_model.characters();
        settle().await;

        drop(view_model);

        tokio::time::timeout(Duration::from_secs(1), async {
            while !repo.dropped_in_flight.load(Ordering::SeqCst) {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("fetch should be cancelled");
        assert_eq!(*state.borrow(), NetworkResult::Loading);
    }

    #[tokio::test]
    async fn test_dispose_after_resolution_keeps_value() {
        let (repo, gate) = GatedRepository::new();
        let view_model = CharactersViewModel::new(GetCharacters::new(repo));
        gate.send(NetworkResult::success(rick())).unwrap();
        view_model.wait_until_resolved().await;

        view_model.dispose();
        view_model.dispose();

        assert_eq!(view_model.current(), NetworkResult::success(rick()));
    }
}
