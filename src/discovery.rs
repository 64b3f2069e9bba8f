use crate::error::Result;
use crate::platform::Platform;
use crate::source::NameserverSource;
use log::debug;

/// Resolves the nameserver list for `platform_id` using the matching source.
///
/// An unsupported identifier fails before either source is touched.
pub async fn get_nameservers(
    platform_id: &str,
    linux: &dyn NameserverSource,
    windows: &dyn NameserverSource,
) -> Result<Vec<String>> {
    let platform: Platform = platform_id.parse()?;
    debug!("Discovering nameservers for {}", platform);
    match platform {
        Platform::Linux => linux.fetch().await,
        Platform::Windows => windows.fetch().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiscoveryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        servers: Vec<String>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(servers: &[&str]) -> Self {
            Self {
                servers: servers.iter().map(|s| s.to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl NameserverSource for FakeSource {
        async fn fetch(&self) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.servers.clone())
        }
    }

    #[tokio::test]
    async fn test_dispatch_linux() {
        let linux = FakeSource::new(&["192.168.11.11"]);
        let windows = FakeSource::new(&["192.168.22.22"]);
        let result = get_nameservers("linux", &linux, &windows).await.unwrap();
        assert_eq!(result, vec!["192.168.11.11"]);
        assert_eq!(linux.calls(), 1);
        assert_eq!(windows.calls(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_windows() {
        let linux = FakeSource::new(&["192.168.11.11"]);
        let windows = FakeSource::new(&["192.168.22.22", "192.168.22.22"]);
        let result = get_nameservers("windows", &linux, &windows).await.unwrap();
        assert_eq!(result, vec!["192.168.22.22", "192.168.22.22"]);
        assert_eq!(linux.calls(), 0);
        assert_eq!(windows.calls(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_unsupported() {
        let linux = FakeSource::new(&["192.168.11.11"]);
        let windows = FakeSource::new(&["192.168.22.22"]);
        let result = get_nameservers("plan9", &linux, &windows).await;
        assert!(matches!(result, Err(DiscoveryError::UnsupportedPlatform(ref id)) if id == "plan9"));
        assert_eq!(linux.calls(), 0);
        assert_eq!(windows.calls(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_propagates_source_error() {
        struct FailingSource;

        #[async_trait::async_trait]
        impl NameserverSource for FailingSource {
            async fn fetch(&self) -> Result<Vec<String>> {
                Err(DiscoveryError::Io {
                    path: "/etc/resolv.conf".into(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                })
            }
        }

        let windows = FakeSource::new(&[]);
        let result = get_nameservers("linux", &FailingSource, &windows).await;
        assert!(matches!(result, Err(DiscoveryError::Io { .. })));
    }
}
