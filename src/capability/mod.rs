pub mod context;

pub use context::ExtractionContext;

use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::error::Result;

/// An optional collaborator: either a working handle or nothing.
pub enum Capability<T: ?Sized> {
    Available(Arc<T>),
    Unavailable,
}

impl<T: ?Sized> Capability<T> {
    pub fn handle(&self) -> Option<&Arc<T>> {
        match self {
            Capability::Available(handle) => Some(handle),
            Capability::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }
}

impl<T: ?Sized> Clone for Capability<T> {
    fn clone(&self) -> Self {
        match self {
            Capability::Available(handle) => Capability::Available(Arc::clone(handle)),
            Capability::Unavailable => Capability::Unavailable,
        }
    }
}

type Loader<T> = Box<dyn Fn() -> BoxFuture<'static, Result<Arc<T>>> + Send + Sync>;

/// A capability resolved on first use. Concurrent first callers wait on a single
/// load; a failed load resolves to `Unavailable` for the life of the process.
pub struct LazyCapability<T: ?Sized> {
    name: &'static str,
    cell: OnceCell<Capability<T>>,
    loader: Option<Loader<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> LazyCapability<T> {
    pub fn new<F, Fut>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<T>>> + Send + 'static,
    {
        Self {
            name,
            cell: OnceCell::new(),
            loader: Some(Box::new(move || loader().boxed())),
        }
    }

    pub fn ready(name: &'static str, capability: Capability<T>) -> Self {
        Self {
            name,
            cell: OnceCell::new_with(Some(capability)),
            loader: None,
        }
    }

    pub fn unavailable(name: &'static str) -> Self {
        Self::ready(name, Capability::Unavailable)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn get(&self) -> &Capability<T> {
        self.cell
            .get_or_init(|| async {
                let Some(load) = &self.loader else {
                    return Capability::Unavailable;
                };

                match load().await {
                    Ok(handle) => {
                        tracing::info!("{} capability initialized", self.name);
                        Capability::Available(handle)
                    }
                    Err(e) => {
                        tracing::warn!("{} capability unavailable: {}", self.name, e);
                        Capability::Unavailable
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[tokio::test]
    async fn test_loader_runs_once_under_concurrent_first_use() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = loads.clone();
        let lazy: Arc<LazyCapability<dyn Greeter>> = Arc::new(LazyCapability::new("greeter", move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                Ok::<_, Error>(Arc::new(English) as Arc<dyn Greeter>)
            }
        }));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let lazy = lazy.clone();
                tokio::spawn(async move { lazy.get().await.is_available() })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap());
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        let handle = lazy.get().await.handle().unwrap();
        assert_eq!(handle.greet(), "hello");
    }

    #[tokio::test]
    async fn test_failed_load_stays_unavailable() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = loads.clone();
        let lazy: LazyCapability<dyn Greeter> = LazyCapability::new("greeter", move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<Arc<dyn Greeter>, _>(Error::Capability("model not installed".to_string()))
            }
        });

        assert!(!lazy.get().await.is_available());
        assert!(!lazy.get().await.is_available());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ready_and_unavailable() {
        let ready: LazyCapability<dyn Greeter> =
            LazyCapability::ready("greeter", Capability::Available(Arc::new(English) as Arc<dyn Greeter>));
        assert!(ready.get().await.is_available());

        let missing: LazyCapability<dyn Greeter> = LazyCapability::unavailable("greeter");
        assert!(missing.get().await.handle().is_none());
        assert_eq!(missing.name(), "greeter");
    }
}
