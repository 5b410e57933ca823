use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use voxlate::application::ports::{
    AudioChunkStream, VoiceProvider, VoiceProviderError, VoiceRegistry,
};
use voxlate::application::services::{VoiceResolveError, VoiceResolver};
use voxlate::domain::{UserId, VoiceId, VoiceReference};
use voxlate::infrastructure::persistence::InMemoryVoiceRegistry;

struct CountingVoiceProvider {
    registrations: AtomicUsize,
    fail_registration: bool,
}

impl CountingVoiceProvider {
    fn new() -> Self {
        Self {
            registrations: AtomicUsize::new(0),
            fail_registration: false,
        }
    }

    fn failing() -> Self {
        Self {
            registrations: AtomicUsize::new(0),
            fail_registration: true,
        }
    }

    fn registration_count(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VoiceProvider for CountingVoiceProvider {
    async fn register_voice(
        &self,
        _name: &str,
        _sample: &Path,
    ) -> Result<VoiceId, VoiceProviderError> {
        if self.fail_registration {
            return Err(VoiceProviderError::RegistrationFailed(
                "quota exhausted".to_string(),
            ));
        }
        let n = self.registrations.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(VoiceId::new(format!("voice-{}", n)))
    }

    async fn synthesize(
        &self,
        _text: &str,
        _voice_id: &VoiceId,
    ) -> Result<Bytes, VoiceProviderError> {
        Ok(Bytes::from_static(b"audio"))
    }

    async fn synthesize_stream(
        &self,
        _text: &str,
        _voice_id: &VoiceId,
    ) -> Result<AudioChunkStream, VoiceProviderError> {
        Ok(Box::pin(futures::stream::empty()))
    }

    async fn delete_voice(&self, _voice_id: &VoiceId) -> Result<(), VoiceProviderError> {
        Ok(())
    }
}

fn sample() -> VoiceReference {
    VoiceReference::new("sample.wav")
}

#[tokio::test]
async fn given_unknown_user_when_resolving_then_registers_exactly_once() {
    let provider = Arc::new(CountingVoiceProvider::new());
    let registry = Arc::new(InMemoryVoiceRegistry::new());
    let resolver = VoiceResolver::new(provider.clone(), registry.clone());
    let user = UserId::new("user-1");

    let voice_id = resolver.resolve_or_create(&user, &sample()).await.unwrap();

    assert_eq!(voice_id, VoiceId::new("voice-1"));
    assert_eq!(provider.registration_count(), 1);
    assert!(registry.get(&user).await.unwrap().is_some());
}

#[tokio::test]
async fn given_known_user_when_resolving_again_then_reuses_without_provider_call() {
    let provider = Arc::new(CountingVoiceProvider::new());
    let registry = Arc::new(InMemoryVoiceRegistry::new());
    let resolver = VoiceResolver::new(provider.clone(), registry);
    let user = UserId::new("user-1");

    let first = resolver.resolve_or_create(&user, &sample()).await.unwrap();
    let second = resolver.resolve_or_create(&user, &sample()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.registration_count(), 1);
}

#[tokio::test]
async fn given_two_users_when_resolving_then_each_gets_own_voice() {
    let provider = Arc::new(CountingVoiceProvider::new());
    let registry = Arc::new(InMemoryVoiceRegistry::new());
    let resolver = VoiceResolver::new(provider.clone(), registry);

    let first = resolver
        .resolve_or_create(&UserId::new("user-1"), &sample())
        .await
        .unwrap();
    let second = resolver
        .resolve_or_create(&UserId::new("user-2"), &sample())
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(provider.registration_count(), 2);
}

#[tokio::test]
async fn given_provider_rejection_when_resolving_then_nothing_is_persisted() {
    let provider = Arc::new(CountingVoiceProvider::failing());
    let registry = Arc::new(InMemoryVoiceRegistry::new());
    let resolver = VoiceResolver::new(provider, registry.clone());
    let user = UserId::new("user-1");

    let result = resolver.resolve_or_create(&user, &sample()).await;

    assert!(matches!(result, Err(VoiceResolveError::Registration(_))));
    assert!(registry.get(&user).await.unwrap().is_none());
}

#[tokio::test]
async fn given_concurrent_requests_for_same_user_when_resolving_then_single_registration() {
    let provider = Arc::new(CountingVoiceProvider::new());
    let registry = Arc::new(InMemoryVoiceRegistry::new());
    let resolver = Arc::new(VoiceResolver::new(provider.clone(), registry));
    let user = UserId::new("user-1");

    let a = {
        let resolver = Arc::clone(&resolver);
        let user = user.clone();
        tokio::spawn(async move { resolver.resolve_or_create(&user, &sample()).await })
    };
    let b = {
        let resolver = Arc::clone(&resolver);
        let user = user.clone();
        tokio::spawn(async move { resolver.resolve_or_create(&user, &sample()).await })
    };

    let first = a.await.unwrap().unwrap();
    let second = b.await.unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.registration_count(), 1);
}
