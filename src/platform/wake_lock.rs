// platform/wake_lock.rs
use super::PlatformError;
use bevy::prelude::*;

/// Keeps the screen from sleeping while a game is running.
pub trait WakeLock: Send + Sync {
    fn request(&mut self) -> Result<(), PlatformError>;
    fn release(&mut self) -> Result<(), PlatformError>;
}

/// Desktop windows have no screen wake-lock to ask for.
#[derive(Debug, Default)]
pub struct UnsupportedWakeLock;

impl WakeLock for UnsupportedWakeLock {
    fn request(&mut self) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported("screen wake lock"))
    }

    fn release(&mut self) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported("screen wake lock"))
    }
}

#[derive(Resource)]
pub struct ScreenWakeLock {
    backend: Box<dyn WakeLock>,
    held: bool,
}

impl Default for ScreenWakeLock {
    fn default() -> Self {
        Self::new(UnsupportedWakeLock)
    }
}

impl ScreenWakeLock {
    pub fn new(backend: impl WakeLock + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            held: false,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Asks for the lock unless we already hold it. Failures are logged and
    /// otherwise ignored.
    pub fn acquire(&mut self) {
        if self.held {
            return;
        }
        match self.backend.request() {
            Ok(()) => {
                self.held = true;
                debug!("Screen wake lock acquired");
            }
            Err(err) => debug!("Screen wake lock unavailable: {err}"),
        }
    }

    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        self.held = false;
        match self.backend.release() {
            Ok(()) => debug!("Screen wake lock released"),
            Err(err) => debug!("Screen wake lock release failed: {err}"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Backend that counts calls and can be told to refuse.
    #[derive(Clone, Default)]
    pub(crate) struct CountingWakeLock {
        pub requests: Arc<AtomicUsize>,
        pub releases: Arc<AtomicUsize>,
        pub deny: bool,
    }

    impl WakeLock for CountingWakeLock {
        fn request(&mut self) -> Result<(), PlatformError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            if self.deny {
                Err(PlatformError::Unsupported("test"))
            } else {
                Ok(())
            }
        }

        fn release(&mut self) -> Result<(), PlatformError> {
            self.releases.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn acquire_is_idempotent_while_held() {
        let backend = CountingWakeLock::default();
        let mut lock = ScreenWakeLock::new(backend.clone());
        lock.acquire();
        lock.acquire();
        assert!(lock.is_held());
        assert_eq!(backend.requests.load(Ordering::SeqCst), 1);

        lock.release();
        lock.release();
        assert!(!lock.is_held());
        assert_eq!(backend.releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn denied_request_is_ignored_and_retried_later() {
        let backend = CountingWakeLock {
            deny: true,
            ..default()
        };
        let mut lock = ScreenWakeLock::new(backend.clone());
        lock.acquire();
        lock.acquire();
        assert!(!lock.is_held());
        assert_eq!(backend.requests.load(Ordering::SeqCst), 2);

        lock.release();
        assert_eq!(backend.releases.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsupported_backend_never_holds() {
        let mut lock = ScreenWakeLock::default();
        lock.acquire();
        assert!(!lock.is_held());
    }
}
